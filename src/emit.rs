// Type-directed output dispatch.
//
// The output routine is selected at the call site from the value's static
// type. The only runtime tag switch lives in the `Value` impl at the bottom
// of this file; it exists for the dynamic `log` builtin and is invisible to
// compiled call sites.

use crate::value::Value;
use std::io::{self, Write};

/// Output routine selection by static type.
///
/// Integer and text tokens are written followed by a single separating
/// space and do not terminate the line. Boolean tokens write `true` or
/// `false` followed by a newline. The asymmetry is deliberate: callers
/// build composite lines token by token and end them either with a boolean
/// or with an explicit [`emit_newline`].
pub trait Emit {
    /// Write this value's token to `out`.
    fn emit_to<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

impl Emit for i64 {
    fn emit_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{} ", self)
    }
}

impl Emit for bool {
    fn emit_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", if *self { "true" } else { "false" })
    }
}

impl Emit for str {
    fn emit_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{} ", self)
    }
}

impl Emit for String {
    fn emit_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.as_str().emit_to(out)
    }
}

impl<T: Emit + ?Sized> Emit for &T {
    fn emit_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        (**self).emit_to(out)
    }
}

// Every other integer width funnels into the 64-bit routine.
macro_rules! emit_as_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Emit for $ty {
            fn emit_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
                (*self as i64).emit_to(out)
            }
        }
    )*};
}

emit_as_int!(i8, i16, i32, isize, u8, u16, u32, u64, usize);

impl Emit for Value {
    fn emit_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Value::Int(i) => i.emit_to(out),
            Value::Str(s) => s.as_str().emit_to(out),
            Value::Bool(b) => b.emit_to(out),
        }
    }
}

/// Emit one token to standard output.
///
/// Write failures are discarded; the output contract gives callers no
/// error path.
pub fn emit<T: Emit>(value: T) {
    let _ = value.emit_to(&mut io::stdout());
}

/// Terminate the current output line.
///
/// Needed after integer or text tokens, which do not terminate their line.
pub fn emit_newline() {
    let _ = io::stdout().write_all(b"\n");
}
