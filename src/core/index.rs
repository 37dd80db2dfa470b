//! # Index Arithmetic
//!
//! Stateless cyclic stepping over a collection. Both controller modes (and
//! any owner of a controlled index) go through these two functions so the
//! wraparound rule lives in exactly one place.
//!
//! ```text
//! Prev at 0  →  length - 1
//! Next at length - 1  →  0
//! ```

use crate::core::error::CarouselError;
use crate::core::intent::{Direction, NavigationIntent};

/// Maps an intent to its relative step: `+1` for Next, `-1` for Prev.
pub fn advance(intent: NavigationIntent) -> isize {
    match intent.direction {
        Direction::Prev => -1,
        Direction::Next => 1,
    }
}

/// Computes `(current + step) mod length` as a true (non-negative) modulo.
///
/// `current` is not required to be in range: a stale index left over from a
/// longer collection is folded back into `[0, length)` by the same rule.
pub fn apply_step(current: usize, step: isize, length: usize) -> Result<usize, CarouselError> {
    if length == 0 {
        return Err(CarouselError::InvalidCollection);
    }
    // i128 holds any usize + isize without overflow.
    let wrapped = (current as i128 + step as i128).rem_euclid(length as i128);
    Ok(wrapped as usize)
}
