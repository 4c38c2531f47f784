use crate::binder;
use crate::config::BindConfig;
use crate::query::ParamQuery;
use tracing::Level;

/// A `tracing`-based debug hook that emits a bound statement.
///
/// Each event carries the normalized statement a driver will prepare, the
/// humanized statement with values inline, and the parameter count. Binding
/// failures are emitted at `WARN` regardless of the configured level.
///
/// Enable via the crate feature: `sqlbind = { features = ["tracing"] }`.
#[derive(Debug, Clone)]
pub struct TracingSqlHook {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for TracingSqlHook {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl TracingSqlHook {
    /// Create a new hook with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    fn truncate_sql(&self, sql: &str) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        }
    }

    /// Bind `query` with `?` placeholders and emit the result.
    pub fn observe(&self, query: &ParamQuery) {
        self.observe_with(query, &BindConfig::default());
    }

    /// Bind `query` with `config` and emit the statement a driver would prepare.
    pub fn observe_with(&self, query: &ParamQuery, config: &BindConfig) {
        match binder::bind_humanized(query.sql(), query.source(), config) {
            Ok((bound, humanized)) => self.emit(
                &self.truncate_sql(bound.sql()),
                &self.truncate_sql(&humanized),
                bound.param_count(),
            ),
            Err(err) => {
                let sql = self.truncate_sql(query.sql());
                tracing::warn!(
                    target: "sqlbind.sql",
                    sql = %sql,
                    error = %err,
                    "failed to bind parameters"
                );
            }
        }
    }

    fn emit(&self, sql: &str, humanized: &str, param_count: usize) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        emit_at_level!(
            self.level,
            target: "sqlbind.sql",
            param_count,
            sql = %sql,
            humanized = %humanized,
        );
    }
}

/// Cut `sql` to at most `max_bytes` without splitting a UTF-8 character.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
