//! Parameter binding.
//!
//! Resolves every placeholder of a statement against a [`ParameterSource`]
//! and renders the result either for a driver (all placeholders positional)
//! or for a human (values written inline).
//!
//! # Example
//!
//! ```
//! use sqlbind::{bind, NamedParams, ParameterSource, Value};
//!
//! let params = NamedParams::new().with("ns", vec![1, 2, 3]);
//! let bound = bind("WHERE n IN (@ns)", &ParameterSource::Named(params)).unwrap();
//!
//! assert_eq!(bound.sql(), "WHERE n IN (?,?,?,?)");
//! assert_eq!(bound.values(), &[Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(3)]);
//! ```

mod bound;


pub use bound::BoundQuery;

use crate::config::{BindConfig, PlaceholderStyle};
use crate::error::{BindError, BindResult};
use crate::expand::{Expansion, intersperse};
use crate::humanize::write_value;
use crate::params::{NamedParams, ParameterSource};
use crate::tokenizer::{Token, TokenStream, count_indexed, tokenize};
use crate::value::Value;
use std::fmt::Write;

/// Bind `source` to `sql`, writing `?` placeholders.
pub fn bind(sql: &str, source: &ParameterSource) -> BindResult<BoundQuery> {
    bind_with(sql, source, &BindConfig::default())
}

/// Bind `source` to `sql` using the given configuration.
///
/// Either the whole [`BoundQuery`] is produced or an error is returned;
/// nothing is partially bound.
pub fn bind_with(
    sql: &str,
    source: &ParameterSource,
    config: &BindConfig,
) -> BindResult<BoundQuery> {
    Ok(resolve(sql, source)?.bound(sql, config.placeholder))
}

/// Render `sql` with the values of `source` written inline, for display.
///
/// Runs the same resolution as [`bind`], so it fails in the same cases.
pub fn humanize(sql: &str, source: &ParameterSource) -> BindResult<String> {
    Ok(resolve(sql, source)?.humanized(sql))
}

/// [`bind_with`] and [`humanize`] from a single resolution.
#[cfg(feature = "tracing")]
pub(crate) fn bind_humanized(
    sql: &str,
    source: &ParameterSource,
    config: &BindConfig,
) -> BindResult<(BoundQuery, String)> {
    let resolved = resolve(sql, source)?;
    Ok((resolved.bound(sql, config.placeholder), resolved.humanized(sql)))
}

/// Placeholders matched up with their values.
enum Resolved<'a> {
    Plain,
    /// `?` placeholders, counted against the values.
    Indexed(&'a [Value]),
    /// Named placeholders replaced by [`Token::ValueParam`]s.
    Tokens(Vec<Token>),
}

fn resolve<'a>(sql: &str, source: &'a ParameterSource) -> BindResult<Resolved<'a>> {
    match source {
        ParameterSource::None => Ok(Resolved::Plain),
        ParameterSource::Indexed(values) => {
            if count_indexed(sql) != values.len() {
                return Err(BindError::mismatched(sql, values));
            }
            Ok(Resolved::Indexed(values))
        }
        ParameterSource::Named(params) => {
            resolve_named(sql, tokenize(sql), params).map(Resolved::Tokens)
        }
    }
}

impl Resolved<'_> {
    fn bound(&self, sql: &str, style: PlaceholderStyle) -> BoundQuery {
        match self {
            Resolved::Plain => BoundQuery::new(sql.to_string(), Vec::new()),
            Resolved::Indexed(values) => {
                let text = match style {
                    // Indexed statements are already in driver form.
                    PlaceholderStyle::Question => sql.to_string(),
                    PlaceholderStyle::Numbered => rewrite_indexed(sql, |out, idx| {
                        let _ = write!(out, "${}", idx + 1);
                    }),
                };
                BoundQuery::new(text, values.to_vec())
            }
            Resolved::Tokens(tokens) => {
                let values = tokens
                    .iter()
                    .filter_map(|token| match token {
                        Token::ValueParam(v) => Some(v.clone()),
                        _ => None,
                    })
                    .collect();
                BoundQuery::new(render(tokens, style), values)
            }
        }
    }

    fn humanized(&self, sql: &str) -> String {
        match self {
            Resolved::Plain => sql.to_string(),
            Resolved::Indexed(values) => rewrite_indexed(sql, |out, idx| {
                if let Some(v) = values.get(idx) {
                    write_value(out, v);
                }
            }),
            Resolved::Tokens(tokens) => {
                let mut out = String::with_capacity(sql.len());
                for token in tokens {
                    match token {
                        Token::ValueParam(v) => write_value(&mut out, v),
                        other => {
                            let _ = write!(out, "{other}");
                        }
                    }
                }
                out
            }
        }
    }
}

/// Copy `sql`, letting `write` replace the `idx`-th unquoted `?`.
///
/// Works on the text rather than tokens so everything that is not a `?`,
/// such as the `::` of a cast, is copied untouched.
fn rewrite_indexed(sql: &str, mut write: impl FnMut(&mut String, usize)) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut quoting = false;
    let mut idx = 0;
    for c in sql.chars() {
        match c {
            '?' if !quoting => {
                write(&mut out, idx);
                idx += 1;
            }
            '\'' => {
                quoting = !quoting;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Replace each `:name` and `@name` with its value, expanding lists.
fn resolve_named(sql: &str, tokens: TokenStream, params: &NamedParams) -> BindResult<Vec<Token>> {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        let (name, expansion) = match token {
            Token::NamedParam(name) => (name, Expansion::Exact),
            Token::OptimisedNamedParam(name) => (name, Expansion::PowerOfTwo),
            // A `?` would have no value to bind.
            Token::IndexedParam => {
                let supplied: Vec<Value> = params.iter().map(|(_, v)| v.clone()).collect();
                return Err(BindError::mismatched(sql, &supplied));
            }
            other => {
                out.push(other);
                continue;
            }
        };

        let value = params
            .get(&name)
            .ok_or_else(|| BindError::unspecified(name.as_str()))?;

        match value {
            Value::List(items) => {
                let expanded = expansion.apply(items).into_iter().map(Token::ValueParam);
                out.extend(intersperse(expanded, Token::Punc(',')));
            }
            scalar => out.push(Token::ValueParam(scalar.clone())),
        }
    }

    Ok(out)
}

/// Write tokens with every placeholder in the given style.
fn render(tokens: &[Token], style: PlaceholderStyle) -> String {
    let mut out = String::new();
    let mut idx: usize = 0;
    for token in tokens {
        if token.is_placeholder() {
            idx += 1;
            match style {
                PlaceholderStyle::Question => out.push('?'),
                PlaceholderStyle::Numbered => {
                    let _ = write!(out, "${idx}");
                }
            }
        } else {
            let _ = write!(out, "{token}");
        }
    }
    out
}
