//! eMo runtime support library.
//!
//! This crate implements the primitive operations that compiled eMo
//! programs link against: type-directed diagnostic output, the simulated
//! model lifecycle, and the subsystem simulations (network, UI, system).
//! The interpreted execution mode of the toolchain reaches the same
//! primitives by dotted name through [`builtins::call_builtin`].

pub mod builtins;
pub mod emit;
pub mod math;
pub mod model;
pub mod net;
pub mod system;
pub mod ui;
pub mod value;

pub use builtins::{call_builtin, BuiltinFn};
pub use emit::{emit, emit_newline, Emit};
pub use model::Model;
pub use value::{RuntimeError, Value};
