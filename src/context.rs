//! The read-only, recursive mapping an evaluation looks symbols up in.
//!
//! `Context` is the interface a host binding adapts its native associative
//! data into (spec.md §6); marshalling that native type is explicitly out
//! of scope for this crate (spec.md §1). Two ready-to-use adapters ship
//! alongside the trait: [`MapContext`], built on an owned `HashMap`, and a
//! blanket impl over `serde_json::Value` for embedders who already have a
//! JSON tree.

use crate::value::Value;
use std::collections::HashMap;

/// What a successful [`Context::get`] lookup can return: a leaf value, or
/// a nested context to keep descending into.
pub enum Lookup<'a> {
    Value(Value),
    Nested(&'a dyn Context),
}

/// A read-only recursive mapping from names to values.
///
/// Implementors only need `get`; `Rule::evaluate`/`matches` never mutate a
/// context and never call `get` more than once per `Ident`/`Attr` node per
/// evaluation.
pub trait Context {
    fn get(&self, name: &str) -> Option<Lookup<'_>>;
}

/// A context with no bindings at all. Valid input for any rule that
/// references no identifiers (spec.md §6).
pub struct EmptyContext;

impl Context for EmptyContext {
    fn get(&self, _name: &str) -> Option<Lookup<'_>> {
        None
    }
}

/// An owned value tree used to build [`MapContext`] nesting: either a leaf
/// [`Value`] or a nested mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Owned {
    Leaf(Value),
    Map(HashMap<String, Owned>),
}

impl From<Value> for Owned {
    fn from(v: Value) -> Self {
        Owned::Leaf(v)
    }
}

impl From<HashMap<String, Owned>> for Owned {
    fn from(map: HashMap<String, Owned>) -> Self {
        Owned::Map(map)
    }
}

impl Context for Owned {
    fn get(&self, name: &str) -> Option<Lookup<'_>> {
        match self {
            Owned::Leaf(_) => None,
            Owned::Map(map) => map.get(name).map(|owned| match owned {
                Owned::Leaf(v) => Lookup::Value(v.clone()),
                nested @ Owned::Map(_) => Lookup::Nested(nested),
            }),
        }
    }
}

/// A context backed by an owned, arbitrarily nested `HashMap`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapContext(HashMap<String, Owned>);

impl MapContext {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn insert(mut self, name: impl Into<String>, value: impl Into<Owned>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl Context for MapContext {
    fn get(&self, name: &str) -> Option<Lookup<'_>> {
        self.0.get(name).map(|owned| match owned {
            Owned::Leaf(v) => Lookup::Value(v.clone()),
            Owned::Map(_) => Lookup::Nested(owned),
        })
    }
}

/// Convert a JSON number into a [`Value`]: integral, exponent-free numbers
/// map to `Int`, everything else maps to `Float`.
fn json_number_to_value(n: &serde_json::Number) -> Option<Value> {
    if let Some(i) = n.as_i64() {
        Some(Value::Int(i))
    } else {
        n.as_f64().map(Value::Float)
    }
}

impl Context for serde_json::Value {
    fn get(&self, name: &str) -> Option<Lookup<'_>> {
        let serde_json::Value::Object(map) = self else {
            return None;
        };
        let child = map.get(name)?;
        match child {
            serde_json::Value::Object(_) => Some(Lookup::Nested(child)),
            serde_json::Value::Null => Some(Lookup::Value(Value::Null)),
            serde_json::Value::Bool(b) => Some(Lookup::Value(Value::Bool(*b))),
            serde_json::Value::String(s) => Some(Lookup::Value(Value::Str(s.clone()))),
            serde_json::Value::Number(n) => json_number_to_value(n).map(Lookup::Value),
            serde_json::Value::Array(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_context_nested_lookup() {
        let mut inner = HashMap::new();
        inner.insert("age".to_string(), Owned::Leaf(Value::Int(1)));
        let ctx = MapContext::new().insert("person", Owned::Map(inner));

        match ctx.get("person") {
            Some(Lookup::Nested(nested)) => match nested.get("age") {
                Some(Lookup::Value(Value::Int(1))) => {}
                _ => panic!("expected person.age == 1"),
            },
            _ => panic!("expected nested context for person"),
        }
    }

    #[test]
    fn map_context_missing_key() {
        let ctx = MapContext::new().insert("age", Value::Int(1));
        assert!(ctx.get("name").is_none());
    }

    #[test]
    fn json_context_lookup() {
        let json = serde_json::json!({"person": {"name": "Hank"}, "age": 1});
        match Context::get(&json, "age") {
            Some(Lookup::Value(Value::Int(1))) => {}
            _ => panic!("expected age == 1"),
        }
        match Context::get(&json, "person") {
            Some(Lookup::Nested(p)) => match p.get("name") {
                Some(Lookup::Value(Value::Str(s))) => assert_eq!(s, "Hank"),
                _ => panic!("expected person.name"),
            },
            _ => panic!("expected nested person"),
        }
    }
}
