use uuid::Uuid;

use crate::parser::ast::SignatureData;
use crate::parser::parse_signature;
use crate::runtime::error::RtErrorType;
use crate::runtime::value::Value;

/// A declared named parameter: suppliable by name, defaulted when omitted.
pub struct NamedParam {
    pub name: String,
    pub default: Value,
}
impl NamedParam {
    pub fn new(name: impl Into<String>, default: Value) -> Self {
        NamedParam {
            name: name.into(),
            default,
        }
    }
}
impl Clone for NamedParam {
    fn clone(&self) -> Self {
        NamedParam {
            name: self.name.to_string(),
            default: self.default.clone(),
        }
    }
}

/// A function's declared shape: required positional parameters followed by
/// named parameters. The declared named-parameter order is the canonical
/// positional order of the optional slots.
pub struct Signature {
    pub name: String,
    pub required: Vec<String>,
    pub named: Vec<NamedParam>,
}
impl Signature {
    pub fn new(
        name: impl Into<String>,
        required: Vec<String>,
        named: Vec<NamedParam>,
    ) -> Result<Self, RtErrorType> {
        let mut name = name.into();
        if name.is_empty() {
            // Anonymous functions still need a stable name for diagnostics.
            name = format!("<fn:{}>", Uuid::new_v4().to_hyphenated());
        }
        let mut seen: Vec<&str> = vec![];
        for p in required.iter().map(|s| s.as_str()) {
            if seen.contains(&p) {
                return Err(RtErrorType::ArgumentMismatch(format!(
                    "duplicate parameter '{}' in '{}'",
                    p, name
                )));
            }
            seen.push(p);
        }
        for p in named.iter().map(|n| n.name.as_str()) {
            if seen.contains(&p) {
                return Err(RtErrorType::ArgumentMismatch(format!(
                    "duplicate parameter '{}' in '{}'",
                    p, name
                )));
            }
            seen.push(p);
        }
        Ok(Signature {
            name,
            required,
            named,
        })
    }

    /// Build a signature from a textual descriptor, e.g.
    /// `greet(who, {greeting: "hello", punct: "!"})`.
    pub fn parse(descriptor: &str) -> Result<Self, RtErrorType> {
        let data = parse_signature(descriptor)
            .map_err(|e| RtErrorType::SyntaxError(format!("bad signature descriptor\n{}", e)))?;
        Signature::from_data(data)
    }

    pub fn from_data(data: SignatureData) -> Result<Self, RtErrorType> {
        let named = data
            .named
            .iter()
            .map(|(n, lit)| NamedParam::new(n.to_string(), Value::from_literal(lit)))
            .collect();
        Signature::new(data.name.unwrap_or_default(), data.positional, named)
    }

    /// Count of required positional parameters.
    pub fn arity(&self) -> usize {
        self.required.len()
    }

    /// Full frame width: required plus named slots.
    pub fn total_slots(&self) -> usize {
        self.required.len() + self.named.len()
    }

    /// Frame slot of a named parameter, located by name.
    pub fn named_slot(&self, name: &str) -> Option<usize> {
        self.named
            .iter()
            .position(|p| p.name == name)
            .map(|i| self.required.len() + i)
    }

    /// Human-readable shape, for mismatch diagnostics.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = self.required.iter().map(|s| s.to_string()).collect();
        if !self.named.is_empty() {
            parts.push(format!(
                "{{{}}}",
                self.named
                    .iter()
                    .map(|p| p.name.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ));
        }
        format!("{}({})", self.name, parts.join(", "))
    }
}
impl Clone for Signature {
    fn clone(&self) -> Self {
        Signature {
            name: self.name.to_string(),
            required: self.required.clone(),
            named: self.named.clone(),
        }
    }
}
