use crate::value::Value;
use std::fmt;

/// A classified span of a SQL statement.
///
/// Writing every token of a stream back out with [`Display`](fmt::Display)
/// reproduces the text it was tokenized from.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier, keyword or number outside quotes.
    Word(String),
    /// Text between quote delimiters.
    QuotedWord(String),
    /// A single-quote delimiter.
    Quote,
    /// A space or tab.
    Space(char),
    /// A `\n` or `\r`.
    Newline(char),
    /// A single punctuation or operator character.
    Punc(char),
    /// A positional `?` placeholder.
    IndexedParam,
    /// A `:name` placeholder.
    NamedParam(String),
    /// An `@name` placeholder, padded to a power of two when bound to a list.
    OptimisedNamedParam(String),
    /// A placeholder resolved to its bound value. Only produced by the binder.
    ValueParam(Value),
}

impl Token {
    /// The placeholder name for `:name` and `@name` tokens.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Token::NamedParam(name) | Token::OptimisedNamedParam(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns `true` for tokens a driver binds a value to.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Token::IndexedParam | Token::ValueParam(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(text) | Token::QuotedWord(text) => f.write_str(text),
            Token::Quote => f.write_str("'"),
            Token::Space(c) | Token::Newline(c) | Token::Punc(c) => write!(f, "{c}"),
            Token::IndexedParam | Token::ValueParam(_) => f.write_str("?"),
            Token::NamedParam(name) => write!(f, ":{name}"),
            Token::OptimisedNamedParam(name) => write!(f, "@{name}"),
        }
    }
}

/// An ordered sequence of tokens produced by a single [`tokenize`](super::tokenize) call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            fmt::Display::fmt(token, f)?;
        }
        Ok(())
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
