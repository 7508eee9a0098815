// Copyright 2026 The Stimorder Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// The value of a labeled stimulus field.
///
/// Constrained fields only need equality comparison; floats go through
/// `OrderedFloat` so that every variant is `Eq` and `Hash`. The serde
/// representation is untagged, so a JSON trial definition like
/// `{"item_type": "filler", "id": 3}` maps directly onto stimulus fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(String),
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<usize> for FieldValue {
    fn from(v: usize) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(OrderedFloat(v))
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Str(v) => write!(f, "{v}"),
        }
    }
}

/// Anything the randomizer can read labeled fields from.
///
/// The algorithms are generic over this seam so callers with their own trial
/// types don't have to convert into [`Stimulus`] first.
pub trait Labeled {
    /// The value of `field`, or `None` if this item doesn't carry it.
    fn label(&self, field: &str) -> Option<&FieldValue>;
}

/// A single stimulus: an opaque record of field name to value.
///
/// The randomizer never mutates a stimulus, it only reorders them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stimulus {
    fields: BTreeMap<String, FieldValue>,
}

impl Stimulus {
    pub fn new() -> Stimulus {
        Default::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Labeled for Stimulus {
    fn label(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}

impl FromIterator<(String, FieldValue)> for Stimulus {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Stimulus {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Adjacency constraints: field name to maximum run length.
///
/// A limit of `k` on field `f` means no `k + 1` consecutive items in the
/// output may share the same value of `f`. Multiple fields may be
/// constrained at once; all limits must hold for an order to be valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constraints {
    limits: BTreeMap<String, usize>,
}

impl Constraints {
    pub fn new() -> Constraints {
        Default::default()
    }

    /// A one-entry table, the common single-field case.
    pub fn single(field: impl Into<String>, max_run: usize) -> Constraints {
        Constraints::new().limit(field, max_run)
    }

    /// Builder-style insert.
    pub fn limit(mut self, field: impl Into<String>, max_run: usize) -> Self {
        self.limits.insert(field.into(), max_run);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, max_run: usize) {
        self.limits.insert(field.into(), max_run);
    }

    pub fn max_run(&self, field: &str) -> Option<usize> {
        self.limits.get(field).copied()
    }

    /// Iterate `(field, max_run)` pairs in deterministic (BTree) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.limits.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl FromIterator<(String, usize)> for Constraints {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Constraints {
            limits: iter.into_iter().collect(),
        }
    }
}
