use crate::value::Value;
use tokio_postgres::types::ToSql;

/// A normalized statement and the values to bind to it, in placeholder order.
///
/// The number of placeholders in [`sql`](Self::sql) always equals the number
/// of [`values`](Self::values).
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct BoundQuery {
    sql: String,
    values: Vec<Value>,
}

impl BoundQuery {
    pub(crate) fn new(sql: String, values: Vec<Value>) -> Self {
        Self { sql, values }
    }

    /// The normalized statement.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Values to bind, positionally aligned with the placeholders.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of bound values.
    pub fn param_count(&self) -> usize {
        self.values.len()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.values)
    }

    /// Parameter refs compatible with `tokio-postgres`.
    ///
    /// Bind with [`BindConfig::numbered`](crate::BindConfig::numbered) so the
    /// statement uses `$n` placeholders.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }
}
