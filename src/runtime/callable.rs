//! Callable objects.
//!
//! A [`FunctionObject`] pairs a declared [`Signature`] with a body and a
//! per-callable [`StubCache`]. Calls route through the cache: the first call
//! with a given shape synthesizes the stub, later calls with the same shape
//! reuse it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::runtime::binding::StubCache;
use crate::runtime::error::RtErrorType;
use crate::runtime::relay::DebugRelay;
use crate::runtime::shape::CallShape;
use crate::runtime::signature::Signature;
use crate::runtime::value::Value;

/// Context handed to native bodies.
pub struct EvalContext {
    pub relay: Option<DebugRelay>,
}
impl EvalContext {
    pub fn new() -> Self {
        EvalContext { relay: None }
    }

    pub fn with_relay(relay: DebugRelay) -> Self {
        EvalContext { relay: Some(relay) }
    }

    /// Debug print: through the relay when one is set, else stdout.
    pub fn print(&mut self, message: &str) {
        match &mut self.relay {
            Some(relay) => relay.post(message),
            None => println!("{}", message),
        }
    }
}
impl Default for EvalContext {
    fn default() -> Self {
        EvalContext::new()
    }
}

/// Body signature for compiled-in functions.
pub type NativeFn = fn(&mut EvalContext, Vec<Value>) -> Result<Value, RtErrorType>;

pub enum FunctionBody {
    /// Direct function pointer.
    Native(NativeFn),
    /// Closure body; small vtable indirection cost.
    Boxed(Box<dyn Fn(&mut EvalContext, Vec<Value>) -> Result<Value, RtErrorType>>),
}
impl FunctionBody {
    fn call(&self, ctx: &mut EvalContext, frame: Vec<Value>) -> Result<Value, RtErrorType> {
        match self {
            FunctionBody::Native(f) => f(ctx, frame),
            FunctionBody::Boxed(f) => f(ctx, frame),
        }
    }
}

pub struct FunctionObject {
    pub signature: Signature,
    body: FunctionBody,
    cache: RefCell<StubCache>,
}
impl FunctionObject {
    pub fn native(signature: Signature, body: NativeFn) -> Self {
        FunctionObject {
            signature,
            body: FunctionBody::Native(body),
            cache: RefCell::new(StubCache::new()),
        }
    }

    pub fn boxed(
        signature: Signature,
        body: impl Fn(&mut EvalContext, Vec<Value>) -> Result<Value, RtErrorType> + 'static,
    ) -> Self {
        FunctionObject {
            signature,
            body: FunctionBody::Boxed(Box::new(body)),
            cache: RefCell::new(StubCache::new()),
        }
    }

    /// Call with supplied positional arguments and (name, value) pairs.
    /// Named arguments may come in any order; the stub places them at their
    /// declared slots and fills defaults for the rest.
    pub fn call(
        &self,
        ctx: &mut EvalContext,
        positional: Vec<Value>,
        named: Vec<(String, Value)>,
    ) -> Result<Value, RtErrorType> {
        let shape = CallShape::of_call(&positional, &named);
        let stub = self.cache.borrow_mut().stub_for(&self.signature, &shape);
        let frame = stub.apply(positional, named)?;
        self.body.call(ctx, frame)
    }

    /// Number of distinct call shapes synthesized so far.
    pub fn stub_count(&self) -> usize {
        self.cache.borrow().len()
    }
}

/// A callable with a receiver and leading arguments pre-bound, delegating to
/// the target function.
pub struct BoundCallable {
    target: Rc<FunctionObject>,
    bound: Vec<Value>,
}
impl BoundCallable {
    pub fn new(target: Rc<FunctionObject>, bound: Vec<Value>) -> Self {
        BoundCallable { target, bound }
    }

    pub fn call(
        &self,
        ctx: &mut EvalContext,
        positional: Vec<Value>,
        named: Vec<(String, Value)>,
    ) -> Result<Value, RtErrorType> {
        let mut full = self.bound.clone();
        full.extend(positional);
        self.target.call(ctx, full, named)
    }
}
