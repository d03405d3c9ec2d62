//! Call-stub synthesis.
//!
//! A stub adapts a call site's argument shape to a function's declared
//! parameter shape. Stubs are plain data: one slot instruction per declared
//! parameter, computed once per distinct shape and applied by explicit slot
//! assignment. Nothing is generated or evaluated at runtime.

use std::collections::HashMap;
use std::rc::Rc;

use crate::runtime::error::RtErrorType;
use crate::runtime::shape::CallShape;
use crate::runtime::signature::Signature;
use crate::runtime::value::Value;

/// One instruction of a binding plan: where the value for a frame slot
/// comes from.
#[derive(Debug)]
pub enum Slot {
    /// Supplied positional argument at this index.
    Positional(usize),
    /// Supplied named argument at this index of the supplied-name list.
    Named(usize),
    /// Omitted named parameter; the declared default, cloned per call.
    Default(Value),
}

/// A synthesized call stub for one (signature, call shape) pair.
pub enum CallStub {
    /// The supplied arguments already form the declared frame; invoke the
    /// target unchanged.
    Direct,
    /// Reorder/fill per the slot plan.
    Plan { shape: CallShape, slots: Vec<Slot> },
    /// The shape can never satisfy the signature; applying reproduces the
    /// mismatch without re-validating.
    Mismatch(RtErrorType),
}
impl CallStub {
    pub fn compute(signature: &Signature, shape: &CallShape) -> CallStub {
        if shape.matches_exactly(signature) {
            return CallStub::Direct;
        }
        match build_plan(signature, shape) {
            Ok(slots) => CallStub::Plan {
                shape: shape.clone(),
                slots,
            },
            Err(e) => CallStub::Mismatch(e),
        }
    }

    pub fn is_direct(&self) -> bool {
        matches!(self, CallStub::Direct)
    }

    /// Materialize the full positional frame for the target function.
    pub fn apply(
        &self,
        positional: Vec<Value>,
        named: Vec<(String, Value)>,
    ) -> Result<Vec<Value>, RtErrorType> {
        match self {
            CallStub::Direct => {
                let mut frame = positional;
                frame.extend(named.into_iter().map(|(_, v)| v));
                Ok(frame)
            }
            CallStub::Plan { shape, slots } => {
                if positional.len() != shape.positional || named.len() != shape.names.len() {
                    return Err(RtErrorType::ArgumentMismatch(format!(
                        "stub for shape ({}) applied to a call of a different shape",
                        shape.describe()
                    )));
                }
                let mut frame = Vec::with_capacity(slots.len());
                for slot in slots {
                    match slot {
                        Slot::Positional(i) => frame.push(positional[*i].clone()),
                        Slot::Named(k) => frame.push(named[*k].1.clone()),
                        Slot::Default(v) => frame.push(v.clone()),
                    }
                }
                Ok(frame)
            }
            CallStub::Mismatch(e) => Err(RtErrorType::new_copy(e)),
        }
    }
}

fn build_plan(signature: &Signature, shape: &CallShape) -> Result<Vec<Slot>, RtErrorType> {
    if shape.positional < signature.arity() {
        return Err(RtErrorType::ArgumentMismatch(format!(
            "'{}' expects at least {} positional arguments, got {}",
            signature.describe(),
            signature.arity(),
            shape.positional
        )));
    }
    if shape.positional + shape.names.len() > signature.total_slots() {
        return Err(RtErrorType::ArgumentMismatch(format!(
            "'{}' takes at most {} arguments, got {}",
            signature.describe(),
            signature.total_slots(),
            shape.positional + shape.names.len()
        )));
    }
    if shape.names.len() > signature.named.len() {
        return Err(RtErrorType::ArgumentMismatch(format!(
            "'{}' declares {} named parameters, got {} named arguments",
            signature.describe(),
            signature.named.len(),
            shape.names.len()
        )));
    }
    for (i, name) in shape.names.iter().enumerate() {
        if shape.names[..i].contains(name) {
            return Err(RtErrorType::ArgumentMismatch(format!(
                "duplicate named argument '{}' in call to '{}'",
                name, signature.name
            )));
        }
        match signature.named_slot(name) {
            None => {
                return Err(RtErrorType::ArgumentMismatch(format!(
                    "'{}' has no named parameter '{}'",
                    signature.describe(),
                    name
                )))
            }
            Some(slot) => {
                // A leading optional slot may be filled positionally; naming
                // it too would double-bind the slot.
                if slot < shape.positional {
                    return Err(RtErrorType::ArgumentMismatch(format!(
                        "named argument '{}' collides with a positionally supplied value in call to '{}'",
                        name, signature.name
                    )));
                }
            }
        }
    }

    let mut slots = Vec::with_capacity(signature.total_slots());
    for i in 0..shape.positional {
        slots.push(Slot::Positional(i));
    }
    for (j, param) in signature.named.iter().enumerate() {
        let frame_slot = signature.arity() + j;
        if frame_slot < shape.positional {
            // Already covered by a positional argument.
            continue;
        }
        match shape.names.iter().position(|n| n == &param.name) {
            Some(k) => slots.push(Slot::Named(k)),
            None => slots.push(Slot::Default(param.default.clone())),
        }
    }
    Ok(slots)
}

/// Per-callable stub memoization: one stub per distinct call shape. Lives on
/// the callable itself; there is no shared or global cache.
pub struct StubCache {
    stubs: HashMap<CallShape, Rc<CallStub>>,
}
impl StubCache {
    pub fn new() -> Self {
        StubCache {
            stubs: HashMap::new(),
        }
    }

    pub fn stub_for(&mut self, signature: &Signature, shape: &CallShape) -> Rc<CallStub> {
        if let Some(stub) = self.stubs.get(shape) {
            return stub.clone();
        }
        let stub = Rc::new(CallStub::compute(signature, shape));
        self.stubs.insert(shape.clone(), stub.clone());
        stub
    }

    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }
}
impl Default for StubCache {
    fn default() -> Self {
        StubCache::new()
    }
}
