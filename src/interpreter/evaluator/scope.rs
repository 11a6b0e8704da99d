use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::{
    ast::Node,
    interpreter::{
        evaluator::function::core::Builtin,
        value::core::{Value, ValueType},
    },
};

/// Index of a scope record in a [`ScopeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub usize);

impl ScopeId {
    /// The global scope. It always exists and has no parent.
    pub const GLOBAL: Self = Self(0);
}

/// A value bound to a name, tagged with its runtime type.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// The bound value.
    pub value: Value,
    /// Type of `value` at the time of binding.
    pub ty:    ValueType,
}

impl Binding {
    /// Binds `value`, recording its type.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        let ty = value.value_type();
        Self { value, ty }
    }
}

/// A function defined with `def`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFunction {
    /// The function name.
    pub name:   String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Node,
}

/// What a name is bound to.
#[derive(Debug, Clone)]
pub enum Symbol {
    /// A plain value.
    Value(Binding),
    /// A user-defined function.
    Function(Rc<UserFunction>),
    /// A host function from the builtin table or `register_builtin`.
    Builtin(Builtin),
}

#[derive(Debug, Clone, Default)]
struct Scope {
    symbols: HashMap<String, Symbol>,
    parent:  Option<ScopeId>,
}

/// Owns every scope record of an evaluator.
///
/// Released slots are recycled by later allocations, so the arena only grows
/// as deep as the deepest chain of simultaneously live calls.
#[derive(Debug, Clone)]
pub struct ScopeArena {
    slots: Vec<Option<Scope>>,
    free:  Vec<usize>,
}

impl Default for ScopeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeArena {
    /// Creates an arena holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: vec![Some(Scope::default())],
               free:  Vec::new(), }
    }

    /// Allocates an empty scope whose lookups fall back to `parent`.
    ///
    /// # Example
    /// ```
    /// use adder::interpreter::evaluator::scope::{ScopeArena, ScopeId};
    ///
    /// let mut arena = ScopeArena::new();
    /// let first = arena.allocate(Some(ScopeId::GLOBAL));
    /// arena.release(first);
    /// let second = arena.allocate(Some(ScopeId::GLOBAL));
    /// assert_eq!(first, second);
    /// assert_eq!(arena.live_count(), 2);
    /// ```
    pub fn allocate(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let scope = Scope { symbols: HashMap::new(),
                            parent };
        let id = if let Some(index) = self.free.pop() {
            self.slots[index] = Some(scope);
            ScopeId(index)
        } else {
            self.slots.push(Some(scope));
            ScopeId(self.slots.len() - 1)
        };
        debug!(scope = id.0, parent = ?parent.map(|p| p.0), "allocated scope");
        id
    }

    /// Drops a scope and everything bound in it. The global scope is never
    /// released.
    pub fn release(&mut self, id: ScopeId) {
        if id == ScopeId::GLOBAL {
            return;
        }
        if let Some(slot) = self.slots.get_mut(id.0)
           && slot.take().is_some()
        {
            self.free.push(id.0);
            debug!(scope = id.0, "released scope");
        }
    }

    /// Number of scopes currently allocated, the global scope included.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Binds `name` in scope `id`, replacing any previous binding there.
    pub fn define(&mut self, id: ScopeId, name: impl Into<String>, symbol: Symbol) {
        if let Some(Some(scope)) = self.slots.get_mut(id.0) {
            scope.symbols.insert(name.into(), symbol);
        }
    }

    /// Resolves `name` starting at scope `id` and walking up the parent
    /// chain.
    #[must_use]
    pub fn lookup(&self, id: ScopeId, name: &str) -> Option<&Symbol> {
        let mut next = Some(id);
        while let Some(current) = next {
            let scope = self.slots.get(current.0)?.as_ref()?;
            if let Some(symbol) = scope.symbols.get(name) {
                return Some(symbol);
            }
            next = scope.parent;
        }
        None
    }

    /// The symbols bound directly in scope `id`.
    pub fn symbols(&self, id: ScopeId) -> impl Iterator<Item = (&str, &Symbol)> {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .into_iter()
            .flat_map(|scope| scope.symbols.iter().map(|(name, symbol)| (name.as_str(), symbol)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Symbol {
        Symbol::Value(Binding::new(Value::Int(n)))
    }

    #[test]
    fn lookup_walks_to_parent() {
        let mut arena = ScopeArena::new();
        arena.define(ScopeId::GLOBAL, "x", int(1));
        let call = arena.allocate(Some(ScopeId::GLOBAL));
        arena.define(call, "y", int(2));

        assert!(matches!(arena.lookup(call, "x"), Some(Symbol::Value(b)) if b.value == Value::Int(1)));
        assert!(arena.lookup(ScopeId::GLOBAL, "y").is_none());
    }

    #[test]
    fn inner_binding_shadows_outer() {
        let mut arena = ScopeArena::new();
        arena.define(ScopeId::GLOBAL, "x", int(1));
        let call = arena.allocate(Some(ScopeId::GLOBAL));
        arena.define(call, "x", int(5));

        assert!(matches!(arena.lookup(call, "x"), Some(Symbol::Value(b)) if b.value == Value::Int(5)));
        assert!(matches!(arena.lookup(ScopeId::GLOBAL, "x"),
                         Some(Symbol::Value(b)) if b.value == Value::Int(1)));
    }

    #[test]
    fn released_scope_is_gone() {
        let mut arena = ScopeArena::new();
        let call = arena.allocate(Some(ScopeId::GLOBAL));
        arena.define(call, "tmp", int(3));
        arena.release(call);

        assert!(arena.lookup(call, "tmp").is_none());
        assert_eq!(arena.live_count(), 1);

        arena.release(ScopeId::GLOBAL);
        assert_eq!(arena.live_count(), 1);
    }
}
