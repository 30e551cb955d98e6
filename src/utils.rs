//! Assorted sizing helpers used before any table is allocated.

/// Number of cells in an `(len_a + 1) x (len_b + 1)` table, or `None` on overflow.
#[inline]
pub fn checked_cell_count(len_a: usize, len_b: usize) -> Option<usize> {
    let rows = len_a.checked_add(1)?;
    let cols = len_b.checked_add(1)?;
    rows.checked_mul(cols)
}

/// Inclusive bounds on the number of columns of any global alignment of
/// sequences with the given lengths: `max(m, n) ..= m + n`.
#[inline]
pub fn alignment_length_bounds(len_a: usize, len_b: usize) -> (usize, usize) {
    (len_a.max(len_b), len_a.saturating_add(len_b))
}
