//! # Relative Indexes
//!
//! Users never see storage positions. They count from the newest entry:
//!
//! ```text
//! storage (oldest first):   [ a ][ b ][ c ][ d ]
//! absolute position:          0    1    2    3
//! relative index:             3    2    1    0
//! negative relative index:   -1   -2   -3   -4
//! ```
//!
//! `0` is the most recent copy and larger numbers go back in time. Negative
//! numbers count from the other end, `-1` being the oldest entry still kept.
//! Each index is resolved on its own, so a multi-index delete can mix signs.

use crate::error::{ClipError, Result};

/// Maps a relative index onto an absolute position in a history of `len` entries.
pub fn resolve(relative: i64, len: usize) -> Result<usize> {
    let out_of_bounds = || ClipError::IndexOutOfBounds {
        index: relative,
        len,
    };

    let absolute = if relative >= 0 {
        i64::try_from(len)
            .ok()
            .and_then(|n| n.checked_sub(relative))
            .and_then(|n| n.checked_sub(1))
    } else {
        relative.checked_neg().and_then(|n| n.checked_sub(1))
    };

    absolute
        .and_then(|pos| usize::try_from(pos).ok())
        .filter(|pos| *pos < len)
        .ok_or_else(out_of_bounds)
}

/// Inverse of [`resolve`] for non-negative indexes.
pub fn to_relative(absolute: usize, len: usize) -> i64 {
    let newest = i64::try_from(len).unwrap_or(i64::MAX) - 1;
    newest - i64::try_from(absolute).unwrap_or(i64::MAX)
}
