//! Parameter sources.

use crate::error::{BindError, BindResult};
use crate::value::Value;
use std::collections::BTreeMap;

/// Named parameter values, keyed by placeholder name (without `:` or `@`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedParams {
    values: BTreeMap<String, Value>,
}

impl NamedParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set a value (consuming version of [`insert`](Self::insert)).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build named parameters from a JSON object.
    ///
    /// Values are converted with [`Value::from_json`], so JSON arrays expand
    /// when bound. Returns `None` if `json` is not an object.
    pub fn from_json(json: serde_json::Value) -> Option<Self> {
        match json {
            serde_json::Value::Object(map) => Some(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for NamedParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = NamedParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Where the values for a statement's placeholders come from.
///
/// Exactly one kind is active per query.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ParameterSource {
    /// No parameters; the statement is used as written.
    #[default]
    None,
    /// Values for `?` placeholders, in statement order.
    Indexed(Vec<Value>),
    /// Values for `:name` and `@name` placeholders.
    Named(NamedParams),
}

impl ParameterSource {
    /// Select the source from the raw parts a query builder collected.
    ///
    /// Supplying both indexed and named values is rejected before the
    /// statement is looked at.
    pub fn from_parts(indexed: Vec<Value>, named: NamedParams) -> BindResult<Self> {
        match (indexed.is_empty(), named.is_empty()) {
            (false, false) => Err(BindError::MixedParameterStyle),
            (false, true) => Ok(ParameterSource::Indexed(indexed)),
            (true, false) => Ok(ParameterSource::Named(named)),
            (true, true) => Ok(ParameterSource::None),
        }
    }

    /// Number of values supplied (a list counts as one).
    pub fn len(&self) -> usize {
        match self {
            ParameterSource::None => 0,
            ParameterSource::Indexed(values) => values.len(),
            ParameterSource::Named(params) => params.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Value>> for ParameterSource {
    fn from(values: Vec<Value>) -> Self {
        ParameterSource::Indexed(values)
    }
}

impl From<NamedParams> for ParameterSource {
    fn from(params: NamedParams) -> Self {
        ParameterSource::Named(params)
    }
}
