/// Wraps `index` into `[0, len)`.
///
/// Negative indexes count backwards from the end, so `wrap(-1, 5) == 4`. Returns `0` when
/// `len == 0`; this is the only index an empty carousel ever reports.
#[must_use]
pub fn wrap(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    // rem_euclid is always in [0, len), which fits back into usize.
    index.rem_euclid(len) as usize
}

/// Wraps `index + delta` into `[0, len)`.
///
/// Convenience for neighbor lookups on `usize` indexes.
#[must_use]
pub(crate) fn step(index: usize, delta: i64, len: usize) -> usize {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    wrap(index.saturating_add(delta), len)
}
