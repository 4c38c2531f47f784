//! # sqlbind
//!
//! Turns a hand-written SQL statement with mixed placeholder syntaxes into
//! something a database driver can prepare.
//!
//! ## Placeholders
//!
//! - `?` - positional, bound from an ordered list of values
//! - `:name` - named, may repeat; a list value expands to `?,?,?`
//! - `@name` - named, but a list value is padded to the next power of two by
//!   repeating its last element, so statements with lists of similar length
//!   share one prepared-statement plan
//!
//! Placeholder characters inside single-quoted literals are never interpreted.
//!
//! ## Example
//!
//! ```
//! use sqlbind::{NamedParams, ParamQuery};
//!
//! let query = ParamQuery::named(
//!     "SELECT * FROM people WHERE age >= :adult AND county IN (@counties)",
//!     NamedParams::new()
//!         .with("adult", 18)
//!         .with("counties", vec!["Kent", "Surrey", "Essex"]),
//! );
//!
//! let bound = query.bind().unwrap();
//! assert_eq!(
//!     bound.sql(),
//!     "SELECT * FROM people WHERE age >= ? AND county IN (?,?,?,?)"
//! );
//! assert_eq!(bound.param_count(), 5);
//!
//! assert_eq!(
//!     query.to_string(),
//!     "SELECT * FROM people WHERE age >= 18 AND county IN ('Kent','Surrey','Essex','Essex')"
//! );
//! ```
//!
//! For tokio-postgres, bind with [`BindConfig::numbered`] and pass
//! [`BoundQuery::params_ref`] to the client.

pub mod binder;
pub mod config;
pub mod error;
pub mod expand;
pub mod humanize;
pub mod params;
pub mod power_of_two;
pub mod query;
pub mod tokenizer;
pub mod value;

#[cfg(feature = "tracing")]
mod tracing_hook;

pub use binder::{BoundQuery, bind, bind_with, humanize};
pub use config::{BindConfig, PlaceholderStyle};
pub use error::{BindError, BindResult};
pub use expand::Expansion;
pub use humanize::humanize_value;
pub use params::{NamedParams, ParameterSource};
pub use power_of_two::next_or_zero;
pub use query::ParamQuery;
pub use tokenizer::{Token, TokenStream, count_indexed, parameter_names, tokenize};
pub use value::Value;

#[cfg(feature = "tracing")]
pub use tracing_hook::TracingSqlHook;
