/// How placeholders are written in a normalized statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?` (JDBC/ODBC, MySQL, SQLite).
    #[default]
    Question,
    /// `$1, $2, ...` (PostgreSQL, tokio-postgres).
    Numbered,
}

/// Configuration for binding.
///
/// The default writes `?` placeholders.
#[derive(Debug, Clone, Default)]
pub struct BindConfig {
    /// Placeholder syntax of the normalized statement.
    pub placeholder: PlaceholderStyle,
}

impl BindConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder style.
    pub fn with_placeholder(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder = style;
        self
    }

    /// Write `$1, $2, ...` placeholders, as tokio-postgres expects.
    pub fn numbered(self) -> Self {
        self.with_placeholder(PlaceholderStyle::Numbered)
    }
}
