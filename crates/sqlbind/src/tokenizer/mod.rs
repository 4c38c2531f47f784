//! Statement tokenizer.
//!
//! Splits a SQL statement into [`Token`]s so that placeholders can be located
//! and rewritten without disturbing anything else. Text inside single quotes
//! is never interpreted: `'2000-01-01T00:00:00'` or `'?%'` stay literal.
//!
//! ```
//! use sqlbind::tokenizer::{tokenize, Token};
//!
//! let tokens = tokenize("a = :id");
//! assert_eq!(tokens.as_slice().last(), Some(&Token::NamedParam("id".into())));
//! assert_eq!(tokens.to_string(), "a = :id");
//! ```

mod token;


pub use token::{Token, TokenStream};

/// Tokenize a statement.
///
/// This never fails: any character without a special meaning is part of a word.
pub fn tokenize(statement: &str) -> TokenStream {
    let mut state = State::default();

    for c in statement.chars() {
        match c {
            '\'' => state.quote(),
            '(' | ')' | '[' | ']' | '{' | '}' | ',' | '.' | ';' | '=' | '<' | '>' | '+' | '-'
            | '*' | '/' | '%' | '!' => state.punctuation(c),
            ' ' | '\t' => state.separator(Token::Space(c), c),
            '\n' | '\r' => state.separator(Token::Newline(c), c),
            '?' => state.question_mark(),
            ':' => state.start_named(),
            '@' => state.start_optimised(),
            _ => state.buffer.push(c),
        }
    }
    state.end_word();

    TokenStream::new(state.tokens)
}

/// Names of the `:name` and `@name` placeholders, in statement order.
///
/// A name used more than once appears once per use.
pub fn parameter_names(statement: &str) -> Vec<String> {
    tokenize(statement)
        .into_iter()
        .filter_map(|token| match token {
            Token::NamedParam(name) | Token::OptimisedNamedParam(name) => Some(name),
            _ => None,
        })
        .collect()
}

/// Number of `?` placeholders in a statement, not counting quoted ones.
pub fn count_indexed(statement: &str) -> usize {
    tokenize(statement)
        .iter()
        .filter(|token| matches!(token, Token::IndexedParam))
        .count()
}

#[derive(Default)]
struct State {
    buffer: String,
    quoting: bool,
    pending_named: bool,
    pending_optimised: bool,
    markers: Vec<char>,
    tokens: Vec<Token>,
}

impl State {
    fn quote(&mut self) {
        self.end_word();
        self.tokens.push(Token::Quote);
        self.quoting = !self.quoting;
    }

    fn punctuation(&mut self, c: char) {
        if self.quoting {
            self.buffer.push(c);
        } else {
            self.end_word();
            self.tokens.push(Token::Punc(c));
        }
    }

    fn separator(&mut self, token: Token, c: char) {
        if self.quoting {
            self.buffer.push(c);
        } else {
            self.end_word();
            self.tokens.push(token);
        }
    }

    fn question_mark(&mut self) {
        if self.quoting {
            self.buffer.push('?');
        } else {
            // Flush first so `a?` keeps its order.
            self.end_word();
            self.tokens.push(Token::IndexedParam);
        }
    }

    fn start_named(&mut self) {
        if self.quoting {
            self.buffer.push(':');
        } else {
            // `::` keeps the first colon as text.
            if self.pending_named && self.buffer.is_empty() {
                self.release_markers();
            }
            self.pending_named = true;
            self.markers.push(':');
        }
    }

    fn start_optimised(&mut self) {
        if self.quoting {
            self.buffer.push('@');
        } else {
            if self.pending_optimised && self.buffer.is_empty() {
                self.release_markers();
            }
            self.pending_optimised = true;
            self.markers.push('@');
        }
    }

    /// Emit pending markers that never got a name as punctuation.
    fn release_markers(&mut self) {
        for c in self.markers.drain(..) {
            self.tokens.push(Token::Punc(c));
        }
        self.pending_named = false;
        self.pending_optimised = false;
    }

    fn end_word(&mut self) {
        if !self.buffer.is_empty() {
            let word = std::mem::take(&mut self.buffer);
            let token = if self.pending_named {
                Token::NamedParam(word)
            } else if self.pending_optimised {
                Token::OptimisedNamedParam(word)
            } else if self.quoting {
                Token::QuotedWord(word)
            } else {
                Token::Word(word)
            };
            self.tokens.push(token);
            self.markers.clear();
        }
        self.release_markers();
    }
}
