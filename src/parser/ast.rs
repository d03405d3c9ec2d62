//! AST for parsed signature and call descriptors.

use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum LiteralType {
    NullLiteral,
    BooleanLiteral(bool),
    IntegerLiteral(i64),
    DoubleLiteral(f64),
    StringLiteral(String),
}
impl Clone for LiteralType {
    fn clone(&self) -> Self {
        match self {
            LiteralType::NullLiteral => LiteralType::NullLiteral,
            LiteralType::BooleanLiteral(b) => LiteralType::BooleanLiteral(*b),
            LiteralType::IntegerLiteral(i) => LiteralType::IntegerLiteral(*i),
            LiteralType::DoubleLiteral(d) => LiteralType::DoubleLiteral(*d),
            LiteralType::StringLiteral(s) => LiteralType::StringLiteral(s.to_string()),
        }
    }
}
impl Display for LiteralType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralType::NullLiteral => write!(f, "null"),
            LiteralType::BooleanLiteral(b) => write!(f, "{}", b),
            LiteralType::IntegerLiteral(i) => write!(f, "{}", i),
            LiteralType::DoubleLiteral(d) => write!(f, "{}", d),
            LiteralType::StringLiteral(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// A parsed signature descriptor: `name(a, b, {x: 1})`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureData {
    pub name: Option<String>,
    pub positional: Vec<String>,
    pub named: Vec<(String, LiteralType)>,
}

/// A parsed call descriptor: `name(1, 2, x: 3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallData {
    pub callee: Option<String>,
    pub positional: Vec<LiteralType>,
    pub named: Vec<(String, LiteralType)>,
}
