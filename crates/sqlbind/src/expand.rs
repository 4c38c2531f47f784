//! List expansion policy for named placeholders.

use crate::power_of_two::next_or_zero;

/// How a list bound to a named placeholder is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// One placeholder per element (`:name`).
    Exact,
    /// Padded to the next power of two with the last element (`@name`), so
    /// that lists of similar length share one prepared statement.
    PowerOfTwo,
}

impl Expansion {
    /// Number of placeholders a list of `len` elements expands to.
    pub fn size(self, len: usize) -> usize {
        match self {
            Expansion::Exact => len,
            Expansion::PowerOfTwo => next_or_zero(len),
        }
    }

    /// Expand `items` to the sized sequence of values to bind.
    pub fn apply<T: Clone>(self, items: &[T]) -> Vec<T> {
        pad_with_last_to(items, self.size(items.len()))
    }
}

/// Extend `items` to `size` by repeating the last element.
///
/// Never truncates, and an empty input stays empty.
pub fn pad_with_last_to<T: Clone>(items: &[T], size: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(size.max(items.len()));
    out.extend_from_slice(items);
    if let Some(last) = items.last() {
        out.resize(size.max(items.len()), last.clone());
    }
    out
}

/// Place `separator` between each pair of adjacent items.
pub fn intersperse<T: Clone>(items: impl IntoIterator<Item = T>, separator: T) -> Vec<T> {
    let mut out = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(separator.clone());
        }
        out.push(item);
    }
    out
}
