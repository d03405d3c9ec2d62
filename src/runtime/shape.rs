use crate::runtime::signature::Signature;
use crate::runtime::value::Value;

/// The shape of a call site: how many positional arguments were supplied and
/// which argument names, in supplied order. Two calls with the same shape
/// share a stub regardless of the argument values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallShape {
    pub positional: usize,
    pub names: Vec<String>,
}
impl CallShape {
    pub fn new(positional: usize, names: Vec<String>) -> Self {
        CallShape { positional, names }
    }

    pub fn of_call(positional: &[Value], named: &[(String, Value)]) -> Self {
        CallShape {
            positional: positional.len(),
            names: named.iter().map(|(n, _)| n.to_string()).collect(),
        }
    }

    /// True when the supplied arguments already form the declared frame:
    /// every slot supplied, and any supplied names match the trailing
    /// declared slots in declared order. Named arguments supplied out of
    /// declared order never match, even when the count does.
    pub fn matches_exactly(&self, signature: &Signature) -> bool {
        if self.positional < signature.arity() {
            return false;
        }
        if self.positional + self.names.len() != signature.total_slots() {
            return false;
        }
        let named_offset = self.positional - signature.arity();
        self.names
            .iter()
            .enumerate()
            .all(|(i, name)| signature.named[named_offset + i].name == *name)
    }

    pub fn describe(&self) -> String {
        if self.names.is_empty() {
            format!("{} positional", self.positional)
        } else {
            format!(
                "{} positional, named ({})",
                self.positional,
                self.names.join(", ")
            )
        }
    }
}
