//! # callbind - Calling-convention runtime for a dynamic language
//!
//! Runtime-support library for a dynamically-typed language that compiles
//! down to a host platform. The centerpiece is the **call-stub engine**:
//! given a function's declared shape (fixed positional parameters plus a
//! table of named parameters with default values) and a call site's shape
//! (positional count plus supplied argument names), it computes a reusable
//! binding plan that validates the call, fills defaults for omitted named
//! parameters, and reorders named arguments into their declared positional
//! slots. Plans are pure data applied by explicit slot assignment; no code
//! is synthesized at runtime.
//!
//! Around the core sit the pieces such a runtime needs:
//! - a small value model ([`runtime::value`]),
//! - callable objects that cache one stub per distinct call shape
//!   ([`runtime::callable`]),
//! - class-hierarchy method and operator dispatch with a `no_such_method`
//!   fallback ([`runtime::dispatch`]),
//! - a JSON shim between the host object model and the language value model
//!   ([`runtime::bridge`]),
//! - a one-way debug-output relay with payload truncation
//!   ([`runtime::relay`]),
//! - a pest-based parser for textual signature/call descriptors
//!   ([`parser`]).
//!
//! ## Quick Start
//!
//! ### Binding a call
//!
//! ```
//! use callbind::runtime::signature::Signature;
//! use callbind::runtime::shape::CallShape;
//! use callbind::runtime::binding::CallStub;
//! use callbind::runtime::value::Value;
//!
//! let sig = Signature::parse("greet(who, {greeting: \"hello\", punct: \"!\"})").unwrap();
//! let shape = CallShape::new(1, vec!["punct".to_string()]);
//! let stub = CallStub::compute(&sig, &shape);
//!
//! let frame = stub
//!     .apply(
//!         vec![Value::String("world".to_string())],
//!         vec![("punct".to_string(), Value::String("?".to_string()))],
//!     )
//!     .unwrap();
//!
//! // who, greeting (defaulted), punct — in declared order.
//! assert_eq!(frame.len(), 3);
//! assert_eq!(frame[1], Value::String("hello".to_string()));
//! assert_eq!(frame[2], Value::String("?".to_string()));
//! ```
//!
//! ### Calling through a function object
//!
//! ```
//! use callbind::runtime::callable::{EvalContext, FunctionObject};
//! use callbind::runtime::signature::Signature;
//! use callbind::runtime::value::{NumberType, Value};
//!
//! let sig = Signature::parse("scale(n, {by: 2})").unwrap();
//! let f = FunctionObject::native(sig, |_ctx, frame| match (&frame[0], &frame[1]) {
//!     (Value::Number(NumberType::Integer(n)), Value::Number(NumberType::Integer(by))) => {
//!         Ok(Value::Number(NumberType::Integer(n * by)))
//!     }
//!     _ => Ok(Value::Null),
//! });
//!
//! let mut ctx = EvalContext::new();
//! let result = f
//!     .call(&mut ctx, vec![Value::Number(NumberType::Integer(21))], vec![])
//!     .unwrap();
//! assert_eq!(result, Value::Number(NumberType::Integer(42)));
//! // The (1 positional, no names) stub is now cached on the callable.
//! assert_eq!(f.stub_count(), 1);
//! ```
//!
//! ## Stub caching
//!
//! Every [`runtime::callable::FunctionObject`] carries its own
//! [`runtime::binding::StubCache`], keyed by [`runtime::shape::CallShape`].
//! The first call with a given shape computes the plan; later calls with the
//! same shape reuse it, including the mismatch case — a call site that can
//! never succeed gets a cached stub that fails without re-validating. There
//! is no global cache and no ambient shared state.
//!
//! ## Architecture
//!
//! - **[`parser`]** - pest parser for signature and call descriptors
//! - **[`runtime`]** - value model and binding engine
//!   - **[`runtime::binding`]** - call-stub synthesis and the per-callable cache
//!   - **[`runtime::dispatch`]** - class registry, method/operator dispatch
//!   - **[`runtime::bridge`]** - host JSON <-> language value conversion
//!   - **[`runtime::relay`]** - debug-output forwarding with truncation

#[macro_use]
extern crate lazy_static;

pub mod parser;
pub mod runtime;
