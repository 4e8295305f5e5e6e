use std::collections::BTreeMap;

use serde::Serialize;

use crate::FieldKey;

/// Typed value of one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Flag(bool),
}

impl Value {
    pub fn as_number(self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(value),
            Value::Flag(_) => None,
        }
    }

    pub fn as_flag(self) -> Option<bool> {
        match self {
            Value::Flag(value) => Some(value),
            Value::Number(_) => None,
        }
    }
}

/// Flat mapping of field keys to values produced by one fetch cycle.
///
/// A key that is absent was never seen on the page. A key mapped to `None`
/// was found but its text did not convert.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    values: BTreeMap<FieldKey, Option<Value>>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: FieldKey, value: Option<Value>) {
        self.values.insert(key, value);
    }

    pub fn contains_key(&self, key: FieldKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn get(&self, key: FieldKey) -> Option<Value> {
        self.values.get(&key).copied().flatten()
    }

    pub fn number(&self, key: FieldKey) -> Option<f64> {
        self.get(key).and_then(Value::as_number)
    }

    pub fn flag(&self, key: FieldKey) -> Option<bool> {
        self.get(key).and_then(Value::as_flag)
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, Option<Value>)> + '_ {
        self.values.iter().map(|(key, value)| (*key, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Moves every entry of `other` into `self`; keys of `other` win.
    pub fn merge(&mut self, other: Snapshot) {
        self.values.extend(other.values);
    }
}

impl FromIterator<(FieldKey, Option<Value>)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (FieldKey, Option<Value>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Identity strings scraped once at setup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceIdentity {
    pub mac_address: Option<String>,
    pub firmware_version: Option<String>,
}
