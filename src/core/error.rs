//! # Errors and Anomalies
//!
//! Two kinds of things go wrong in the carousel:
//!
//! - **Errors** (`CarouselError`) are returned to whoever asked for the
//!   navigation. Stepping through an empty collection has no valid answer,
//!   so it is refused instead of guessed.
//! - **Anomalies** (`Anomaly`) are absorbed where they happen. A controlled
//!   index that points past the end of the collection is clamped for
//!   display and reported through the log, never propagated.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    /// A step was requested against a collection of length zero.
    InvalidCollection,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::InvalidCollection => {
                write!(f, "cannot navigate an empty slide collection")
            }
        }
    }
}

impl std::error::Error for CarouselError {}

/// A non-fatal inconsistency detected while resolving the displayed slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// The owner supplied `index` for a collection of `length` slides.
    IndexOutOfRange { index: usize, length: usize },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::IndexOutOfRange { index, length } => write!(
                f,
                "controlled index {index} is outside 0..{length}, showing slide 0"
            ),
        }
    }
}
