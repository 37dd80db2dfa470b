//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::controller::Callbacks;
use crate::core::intent::Direction;
use crate::core::slide::{Deck, Slide};

/// Every owner notification as `(direction, step, length)`, in call order.
pub type CallLog = Rc<RefCell<Vec<(Direction, isize, usize)>>>;

/// The three-slide deck most tests run against.
pub fn three_slides() -> Vec<Slide> {
    Deck::sample().slides
}

/// Callbacks that record instead of updating anything.
pub fn recording_callbacks() -> (Callbacks, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let prev_log = Rc::clone(&log);
    let next_log = Rc::clone(&log);
    let callbacks = Callbacks::new(
        move |step, length| prev_log.borrow_mut().push((Direction::Prev, step, length)),
        move |step, length| next_log.borrow_mut().push((Direction::Next, step, length)),
    );
    (callbacks, log)
}
