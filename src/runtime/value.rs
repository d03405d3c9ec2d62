use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::parser::ast::LiteralType;
use crate::runtime::dispatch::ObjectRef;

pub enum Value {
    Null,
    Boolean(bool),
    Number(NumberType),
    String(String),
    List(Vec<Value>),
    /// Insertion-ordered string-keyed map.
    Map(Vec<(String, Value)>),
    Object(ObjectRef),
}
impl Value {
    pub fn from_literal(literal: &LiteralType) -> Self {
        match literal {
            LiteralType::NullLiteral => Value::Null,
            LiteralType::BooleanLiteral(b) => Value::Boolean(*b),
            LiteralType::IntegerLiteral(i) => Value::Number(NumberType::Integer(*i)),
            LiteralType::DoubleLiteral(d) => Value::Number(NumberType::Double(*d)),
            LiteralType::StringLiteral(s) => Value::String(s.to_string()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "bool",
            Value::Number(NumberType::Integer(_)) => "int",
            Value::Number(NumberType::Double(_)) => "double",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
        }
    }
}
impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Boolean(b) => Value::Boolean(*b),
            Value::Number(n) => Value::Number(n.clone()),
            Value::String(s) => Value::String(s.to_string()),
            Value::List(items) => Value::List(items.clone()),
            Value::Map(entries) => Value::Map(entries.clone()),
            Value::Object(o) => Value::Object(o.clone()),
        }
    }
}
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{}\": {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Object(o) => write!(f, "instance of {}", o.borrow().class_name),
        }
    }
}
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Value::Null"),
            Value::Boolean(b) => write!(f, "Value::Boolean({})", b),
            Value::Number(n) => write!(f, "Value::Number({:?})", n),
            Value::String(s) => write!(f, "Value::String({:?})", s),
            Value::List(items) => write!(f, "Value::List({:?})", items),
            Value::Map(entries) => write!(f, "Value::Map({:?})", entries),
            Value::Object(o) => write!(f, "Value::Object({})", o.borrow().class_name),
        }
    }
}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum NumberType {
    Integer(i64),
    Double(f64),
}
impl Display for NumberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer(i) => write!(f, "{}", i),
            NumberType::Double(d) => write!(f, "{}", d),
        }
    }
}
impl Clone for NumberType {
    fn clone(&self) -> Self {
        match self {
            NumberType::Integer(i) => NumberType::Integer(*i),
            NumberType::Double(d) => NumberType::Double(*d),
        }
    }
}
