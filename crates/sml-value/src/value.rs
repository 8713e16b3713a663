//! The structured value model.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use sml_tree::Node;

/// A structured value.
///
/// Collections keep insertion order. A [`Value::Set`] holds no two equal
/// members; a [`Value::Map`] or [`Value::Dictionary`] holds no two equal keys.
/// Map and dictionary values read from a document stay undecoded, as
/// [`Value::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Nil,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
    /// An ordered sequence.
    List(Vec<Value>),
    /// An ordered collection of distinct members.
    Set(Vec<Value>),
    /// Entries with arbitrary keys.
    Map(Vec<(Value, Value)>),
    /// Entries with text keys.
    Dictionary(Vec<(String, Value)>),
    /// A markup payload carried as is.
    ///
    /// Encoding rejects a text payload that is empty or that directly follows
    /// another text payload in a list or set, since adjacent text runs merge.
    Raw(Node),
}

impl Value {
    /// Build a set, dropping repeated members.
    pub fn set(members: impl IntoIterator<Item = Value>) -> Self {
        let mut out = Vec::new();
        for member in members {
            push_unique(&mut out, member);
        }
        Value::Set(out)
    }

    /// Build a map. A repeated key keeps its first position and takes the
    /// last value.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut out: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            upsert(&mut out, key, value);
        }
        Value::Map(out)
    }

    /// Build a dictionary, with the same key handling as [`Value::map`].
    pub fn dictionary<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        let mut out: Vec<(String, Value)> = Vec::new();
        for (key, value) in entries {
            upsert(&mut out, key.into(), value);
        }
        Value::Dictionary(out)
    }

    /// Whether this is [`Value::Nil`].
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Members of a list or set.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Set(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&Node> {
        match self {
            Value::Raw(node) => Some(node),
            _ => None,
        }
    }

    /// Look a key up in a dictionary, or a text key in a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Dictionary(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            Value::Map(entries) => entries
                .iter()
                .find(|(k, _)| k.as_str() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

pub(crate) fn push_unique(out: &mut Vec<Value>, member: Value) {
    if !out.contains(&member) {
        out.push(member);
    }
}

pub(crate) fn upsert<K: PartialEq>(out: &mut Vec<(K, Value)>, key: K, value: Value) {
    match out.iter_mut().find(|(k, _)| *k == key) {
        Some((_, slot)) => *slot = value,
        None => out.push((key, value)),
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Raw(node)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(members: BTreeSet<T>) -> Self {
        Value::set(members.into_iter().map(Into::into))
    }
}

impl<T: Into<Value>, S> From<HashSet<T, S>> for Value {
    fn from(members: HashSet<T, S>) -> Self {
        Value::set(members.into_iter().map(Into::into))
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Dictionary(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
