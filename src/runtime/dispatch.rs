//! Class hierarchy and dynamic dispatch.
//!
//! Replaces the original prototype-patching emulation of class inheritance
//! and operator overloading with an explicit class registry: method lookup
//! walks the declared parent chain, operators map to ordinary methods
//! through a fixed table, and a missing method falls back to the chain's
//! `no_such_method` handler when one is declared.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runtime::callable::{EvalContext, FunctionObject};
use crate::runtime::error::RtErrorType;
use crate::runtime::value::Value;

/// Fallback handler name. Receives the receiver, the missing method's name,
/// the positional arguments as a list and the named arguments as a map.
pub const NO_SUCH_METHOD: &str = "no_such_method";

lazy_static! {
    /// Operator token to method name. Overloading an operator means
    /// declaring the mapped method on the class.
    pub static ref OPERATOR_METHODS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("+", "op_add");
        m.insert("-", "op_sub");
        m.insert("*", "op_mul");
        m.insert("/", "op_div");
        m.insert("==", "op_eq");
        m.insert("<", "op_lt");
        m.insert("[]", "op_index");
        m.insert("[]=", "op_index_set");
        m.insert("negate", "op_negate");
        m
    };
}

/// An instance of a registered class.
pub struct Instance {
    pub class_name: String,
    fields: HashMap<String, Value>,
}
impl Instance {
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }
}

pub type ObjectRef = Rc<RefCell<Instance>>;

/// A class declaration: optional parent plus its method table. Methods
/// declare the receiver as their first positional parameter; dispatch
/// prepends it.
pub struct ClassInfo {
    pub name: String,
    pub parent: Option<String>,
    methods: HashMap<String, Rc<FunctionObject>>,
}
impl ClassInfo {
    pub fn new(name: impl Into<String>) -> Self {
        ClassInfo {
            name: name.into(),
            parent: None,
            methods: HashMap::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn add_method(mut self, name: impl Into<String>, method: FunctionObject) -> Self {
        self.methods.insert(name.into(), Rc::new(method));
        self
    }
}

pub struct ClassRegistry {
    classes: HashMap<String, ClassInfo>,
}
impl ClassRegistry {
    pub fn new() -> Self {
        ClassRegistry {
            classes: HashMap::new(),
        }
    }

    pub fn register(&mut self, class: ClassInfo) -> Result<(), RtErrorType> {
        if self.classes.contains_key(&class.name) {
            return Err(RtErrorType::TypeError(format!(
                "class '{}' is already registered",
                class.name
            )));
        }
        // Reject a parent chain that loops back through the new class.
        let mut ancestor = class.parent.clone();
        while let Some(name) = ancestor {
            if name == class.name {
                return Err(RtErrorType::TypeError(format!(
                    "inheritance cycle through '{}'",
                    class.name
                )));
            }
            ancestor = self.classes.get(&name).and_then(|c| c.parent.clone());
        }
        self.classes.insert(class.name.to_string(), class);
        Ok(())
    }

    pub fn new_instance(&self, class: &str) -> Result<ObjectRef, RtErrorType> {
        if !self.classes.contains_key(class) {
            return Err(RtErrorType::TypeError(format!(
                "unknown class '{}'",
                class
            )));
        }
        Ok(Rc::new(RefCell::new(Instance {
            class_name: class.to_string(),
            fields: HashMap::new(),
        })))
    }

    /// Walk the parent chain looking for `method`.
    pub fn resolve_method(&self, class: &str, method: &str) -> Option<Rc<FunctionObject>> {
        let mut current = Some(class.to_string());
        while let Some(name) = current {
            let info = self.classes.get(&name)?;
            if let Some(f) = info.methods.get(method) {
                return Some(f.clone());
            }
            current = info.parent.clone();
        }
        None
    }

    /// Dynamic method invocation: resolve along the chain, prepend the
    /// receiver, bind through the call-stub engine. Falls back to
    /// [`NO_SUCH_METHOD`] when the chain declares one.
    pub fn invoke_method(
        &self,
        ctx: &mut EvalContext,
        receiver: &ObjectRef,
        method: &str,
        positional: Vec<Value>,
        named: Vec<(String, Value)>,
    ) -> Result<Value, RtErrorType> {
        let class_name = receiver.borrow().class_name.to_string();
        if let Some(f) = self.resolve_method(&class_name, method) {
            let mut full = Vec::with_capacity(positional.len() + 1);
            full.push(Value::Object(receiver.clone()));
            full.extend(positional);
            return f.call(ctx, full, named);
        }
        if let Some(fallback) = self.resolve_method(&class_name, NO_SUCH_METHOD) {
            return fallback.call(
                ctx,
                vec![
                    Value::Object(receiver.clone()),
                    Value::String(method.to_string()),
                    Value::List(positional),
                    Value::Map(named),
                ],
                vec![],
            );
        }
        Err(RtErrorType::NoSuchMethod(format!(
            "'{}' has no method '{}'",
            class_name, method
        )))
    }

    /// Operator dispatch: `a + b` becomes `a.op_add(b)`.
    pub fn invoke_operator(
        &self,
        ctx: &mut EvalContext,
        receiver: &ObjectRef,
        token: &str,
        operands: Vec<Value>,
    ) -> Result<Value, RtErrorType> {
        let method = OPERATOR_METHODS
            .get(token)
            .ok_or_else(|| RtErrorType::TypeError(format!("unknown operator '{}'", token)))?;
        self.invoke_method(ctx, receiver, method, operands, vec![])
    }
}
impl Default for ClassRegistry {
    fn default() -> Self {
        ClassRegistry::new()
    }
}
