//! Power-of-two sizing for padded list expansion.

/// Smallest power of two `>= n`, or zero when `n` is zero.
///
/// Saturates at `n` itself in the (unreachable in practice) case where the
/// next power of two does not fit in a `usize`.
pub fn next_or_zero(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n.checked_next_power_of_two().unwrap_or(n)
    }
}
