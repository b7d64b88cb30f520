//! The value an expression evaluates to.
//!
//! [`Value`] is the native form used by Rust callers. [`ValueKind`] carries
//! everything the emitter needs to render the equivalent C++ struct: tag
//! constants, payload members and their zero values, in declaration order.

use std::fmt;

/// Tag of a [`Value`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    #[default]
    Nil,
}

impl ValueKind {
    /// Payload declaration order.
    pub const ALL: [ValueKind; 4] = [
        ValueKind::String,
        ValueKind::Number,
        ValueKind::Boolean,
        ValueKind::Nil,
    ];

    /// Name of the rendered tag enum.
    pub const ENUM_NAME: &'static str = "ValueType";

    /// Tag constant in the rendered enum.
    pub fn tag(self) -> &'static str {
        match self {
            Self::String => "VALSTRING",
            Self::Number => "VALNUMBER",
            Self::Boolean => "VALBOOL",
            Self::Nil => "VALNIL",
        }
    }

    /// C++ type of the payload.
    pub fn cpp_type(self) -> &'static str {
        match self {
            Self::String => "std::string",
            Self::Number => "double",
            Self::Boolean => "bool",
            Self::Nil => "std::nullptr_t",
        }
    }

    /// Standard header declaring the payload type, if one is needed.
    pub fn cpp_header(self) -> Option<&'static str> {
        match self {
            Self::String => Some("string"),
            Self::Nil => Some("cstddef"),
            Self::Number | Self::Boolean => None,
        }
    }

    /// Payload member name.
    pub fn member(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Nil => "nil",
        }
    }

    /// Initializer of an unset payload.
    pub fn zero(self) -> &'static str {
        match self {
            Self::String => "\"\"",
            Self::Number => "0",
            Self::Boolean => "false",
            Self::Nil => "nullptr",
        }
    }

    pub fn from_cpp_type(ty: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.cpp_type() == ty)
    }
}

/// Runtime value of an expression. Defaults to `Nil`.
///
/// Values with different tags never compare equal; two `Nil`s always do.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    #[default]
    Nil,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Number(_) => ValueKind::Number,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Nil => ValueKind::Nil,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// `nil` and `false` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            // Integral numbers print without a fractional part.
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Nil => f.write_str("nil"),
        }
    }
}
