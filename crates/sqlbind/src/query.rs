//! A statement paired with its parameters.
//!
//! [`ParamQuery`] is what a query builder hands over once the caller has
//! chosen how to supply parameters: not at all, by position, or by name.

use crate::binder::{self, BoundQuery};
use crate::config::BindConfig;
use crate::error::BindResult;
use crate::params::{NamedParams, ParameterSource};
use crate::value::Value;
use std::fmt;

/// A SQL statement and the source of its parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamQuery {
    sql: String,
    source: ParameterSource,
}

impl ParamQuery {
    /// A statement without parameters.
    pub fn none(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            source: ParameterSource::None,
        }
    }

    /// A statement with `?` placeholders and their values in order.
    pub fn indexed<V: Into<Value>>(
        sql: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            sql: sql.into(),
            source: ParameterSource::Indexed(values.into_iter().map(Into::into).collect()),
        }
    }

    /// A statement with `:name` / `@name` placeholders.
    pub fn named(sql: impl Into<String>, params: NamedParams) -> Self {
        Self {
            sql: sql.into(),
            source: ParameterSource::Named(params),
        }
    }

    /// Choose the kind of query from everything a builder collected.
    ///
    /// Fails with [`BindError::MixedParameterStyle`](crate::BindError::MixedParameterStyle)
    /// when both indexed and named values are present.
    pub fn from_parts(
        sql: impl Into<String>,
        indexed: Vec<Value>,
        named: NamedParams,
    ) -> BindResult<Self> {
        let source = ParameterSource::from_parts(indexed, named)?;
        Ok(Self {
            sql: sql.into(),
            source,
        })
    }

    /// The statement as written.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn source(&self) -> &ParameterSource {
        &self.source
    }

    /// Produce the driver statement and its values.
    pub fn bind(&self) -> BindResult<BoundQuery> {
        binder::bind(&self.sql, &self.source)
    }

    /// Produce the driver statement and its values with the given configuration.
    pub fn bind_with(&self, config: &BindConfig) -> BindResult<BoundQuery> {
        binder::bind_with(&self.sql, &self.source, config)
    }

    /// The statement with values written inline, for display only.
    pub fn humanize(&self) -> BindResult<String> {
        binder::humanize(&self.sql, &self.source)
    }

    /// Pass the humanized statement to `f`, e.g. to log it, and return `self`.
    ///
    /// If the parameters do not fit the statement, `f` receives the statement
    /// as written; the error surfaces on [`bind`](Self::bind).
    pub fn peek(&self, f: impl FnOnce(&str)) -> &Self {
        match self.humanize() {
            Ok(text) => f(&text),
            Err(_) => f(&self.sql),
        }
        self
    }
}

impl fmt::Display for ParamQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.humanize() {
            Ok(text) => f.write_str(&text),
            Err(_) => f.write_str(&self.sql),
        }
    }
}
