//! # Navigation Intents
//!
//! Every Prev/Next request (button, key press, timer tick) becomes a
//! `NavigationIntent` before anything is mutated. The intent records the
//! collection length seen when it was created, which is what the owner of a
//! controlled index receives in its callback.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Prev => "Prev",
            Direction::Next => "Next",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationIntent {
    pub direction: Direction,
    /// Collection length at intent time.
    pub length: usize,
}

impl NavigationIntent {
    pub fn new(direction: Direction, length: usize) -> Self {
        Self { direction, length }
    }

    /// Relative step for this intent (`-1` or `+1`).
    pub fn step(&self) -> isize {
        crate::core::index::advance(*self)
    }
}
