//! JSON shim.
//!
//! Bridges the host JSON model (`serde_json::Value`) to the language value
//! model. Shallow and total over JSON's domain; class instances do not
//! cross the bridge.

use crate::runtime::error::RtErrorType;
use crate::runtime::value::{NumberType, Value};

pub fn from_json(json: serde_json::Value) -> Result<Value, RtErrorType> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(NumberType::Integer(i))
            } else if let Some(d) = n.as_f64() {
                Value::Number(NumberType::Double(d))
            } else {
                return Err(RtErrorType::BridgeError(format!(
                    "number {} does not fit the value model",
                    n
                )));
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                list.push(from_json(item)?);
            }
            Value::List(list)
        }
        serde_json::Value::Object(entries) => {
            let mut map = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                map.push((key, from_json(value)?));
            }
            Value::Map(map)
        }
    })
}

pub fn to_json(value: &Value) -> Result<serde_json::Value, RtErrorType> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Number(NumberType::Integer(i)) => serde_json::Value::from(*i),
        Value::Number(NumberType::Double(d)) => {
            // Non-finite doubles have no JSON form; encode as null.
            serde_json::Number::from_f64(*d)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null)
        }
        Value::String(s) => serde_json::Value::String(s.to_string()),
        Value::List(items) => {
            let mut array = Vec::with_capacity(items.len());
            for item in items {
                array.push(to_json(item)?);
            }
            serde_json::Value::Array(array)
        }
        Value::Map(entries) => {
            let mut object = serde_json::Map::with_capacity(entries.len());
            for (key, value) in entries {
                object.insert(key.to_string(), to_json(value)?);
            }
            serde_json::Value::Object(object)
        }
        Value::Object(o) => {
            return Err(RtErrorType::BridgeError(format!(
                "instance of {} does not serialize",
                o.borrow().class_name
            )))
        }
    })
}

/// Parse JSON text into a language value.
pub fn parse(text: &str) -> Result<Value, RtErrorType> {
    let json: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| RtErrorType::BridgeError(format!("malformed JSON: {}", e)))?;
    from_json(json)
}

/// Serialize a language value to JSON text.
pub fn stringify(value: &Value) -> Result<String, RtErrorType> {
    let json = to_json(value)?;
    serde_json::to_string(&json)
        .map_err(|e| RtErrorType::BridgeError(format!("serialization failed: {}", e)))
}
