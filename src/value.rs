// Runtime values for eMo programs.
//
// Defines the closed primitive value set and the errors raised by the
// dynamic call surface.

use serde::Serialize;
use std::fmt;

/// Runtime value representation for the eMo primitive types.
///
/// The primitive set is closed: a value is exactly one of a 64-bit signed
/// integer, an owned text, or a boolean. The enum discriminant doubles as
/// the type tag, so tag and payload cannot disagree.
///
/// Values are built at call sites from literals or variables and handed to
/// the runtime; nothing in the runtime stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
}

/// Type tag of a [`Value`], separated from its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Str,
    Bool,
}

impl ValueKind {
    /// Tag name as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Int => "Int",
            ValueKind::Str => "Str",
            ValueKind::Bool => "Bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Value {
    /// Get this value's type tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Str(_) => ValueKind::Str,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    /// Tag name of this value, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Extract the integer payload.
    pub fn as_int(&self) -> Result<i64, RuntimeError> {
        match self {
            Value::Int(i) => Ok(*i),
            _ => Err(self.type_error(ValueKind::Int)),
        }
    }

    /// Borrow the text payload.
    pub fn as_str(&self) -> Result<&str, RuntimeError> {
        match self {
            Value::Str(s) => Ok(s),
            _ => Err(self.type_error(ValueKind::Str)),
        }
    }

    /// Extract the boolean payload.
    pub fn as_bool(&self) -> Result<bool, RuntimeError> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.type_error(ValueKind::Bool)),
        }
    }

    fn type_error(&self, expected: ValueKind) -> RuntimeError {
        RuntimeError::TypeError {
            expected: expected.name().to_string(),
            found: self.type_name().to_string(),
            message: format!("cannot read {} payload as {}", self.type_name(), expected),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Errors raised by the dynamic call surface.
///
/// The typed surface is infallible by construction; only named builtin
/// calls and payload accessors can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    #[error("type error: expected {expected}, found {found}: {message}")]
    TypeError {
        expected: String,
        found: String,
        message: String,
    },

    #[error("arity mismatch: builtin `{fn_name}` expects {expected} arguments, got {found}")]
    ArityMismatch {
        fn_name: String,
        expected: usize,
        found: usize,
    },

    #[error("unknown builtin: {0}")]
    UnknownFunction(String),

    #[error("json error: {0}")]
    JsonError(String),
}
