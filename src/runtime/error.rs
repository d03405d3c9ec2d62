use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum RtErrorType {
    /// Call shape incompatible with a declared signature: too few positional
    /// arguments, too many arguments overall, an unknown named argument, or
    /// a named argument colliding with a positionally-filled slot.
    ArgumentMismatch(String),
    /// Dynamic dispatch found no method and no `no_such_method` handler.
    NoSuchMethod(String),
    TypeError(String),
    /// A descriptor that does not parse.
    SyntaxError(String),
    /// JSON text or a value that does not cross the host bridge.
    BridgeError(String),
}
impl RtErrorType {
    pub fn new_copy(other: &Self) -> Self {
        match other {
            RtErrorType::ArgumentMismatch(m) => RtErrorType::ArgumentMismatch(m.to_string()),
            RtErrorType::NoSuchMethod(m) => RtErrorType::NoSuchMethod(m.to_string()),
            RtErrorType::TypeError(m) => RtErrorType::TypeError(m.to_string()),
            RtErrorType::SyntaxError(m) => RtErrorType::SyntaxError(m.to_string()),
            RtErrorType::BridgeError(m) => RtErrorType::BridgeError(m.to_string()),
        }
    }
}
impl Display for RtErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RtErrorType::ArgumentMismatch(m) => write!(f, "Argument mismatch: {}.", m),
            RtErrorType::NoSuchMethod(m) => write!(f, "No such method: {}.", m),
            RtErrorType::TypeError(m) => write!(f, "Type error: {}.", m),
            RtErrorType::SyntaxError(m) => write!(f, "Syntax error: {}.", m),
            RtErrorType::BridgeError(m) => write!(f, "Bridge error: {}.", m),
        }
    }
}
