//! # Carousel Controller
//!
//! Owns the navigation protocol for one carousel instance.
//!
//! ```text
//! CarouselController
//! ├── slides: Vec<S>                  // current collection (opaque)
//! ├── controlled_index: Option<usize> // Some = owner holds the index
//! ├── owned_index: usize              // used when uncontrolled
//! ├── interval: Option<Duration>      // auto-advance period
//! ├── timer: Option<TimerHandle>      // None = Idle
//! └── callbacks: Callbacks            // on_prev / on_next
//! ```
//!
//! ## Controlled vs. uncontrolled
//!
//! The mode is not stored. Every operation derives a [`ControlMode`] from
//! whether the latest render supplied an index:
//!
//! - **Uncontrolled**: Prev/Next apply the step to `owned_index` right away.
//! - **Controlled**: nothing local changes. The owner's callback receives the
//!   relative step and the collection length, and the next render brings
//!   whatever index the owner decided on.
//!
//! `owned_index` survives a stretch of controlled renders, so dropping the
//! external index resumes where the carousel last was on its own.
//!
//! ## Timer
//!
//! A positive interval arms the timer during construction. `rerender` with a
//! different interval cancels and re-arms; no interval cancels. Each tick is
//! an ordinary `request_next`. `teardown` (also run on drop) cancels for
//! good.

use log::{debug, info, warn};
use std::cell::Cell;
use std::time::Duration;

use crate::core::error::{Anomaly, CarouselError};
use crate::core::index;
use crate::core::intent::{Direction, NavigationIntent};
use crate::core::slide::VisualOverrides;
use crate::core::timer::{Clock, TimerHandle, TimerState, normalize_interval};

/// Notification sent to the owner of a controlled index: `(step, length)`.
pub type NavigationCallback = Box<dyn FnMut(isize, usize)>;

/// The owner's side of the controlled-mode contract.
pub struct Callbacks {
    pub on_prev: NavigationCallback,
    pub on_next: NavigationCallback,
}

impl Callbacks {
    pub fn new(
        on_prev: impl FnMut(isize, usize) + 'static,
        on_next: impl FnMut(isize, usize) + 'static,
    ) -> Self {
        Self {
            on_prev: Box::new(on_prev),
            on_next: Box::new(on_next),
        }
    }
}

impl Default for Callbacks {
    fn default() -> Self {
        Self::new(|_, _| {}, |_, _| {})
    }
}

/// Inputs for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselProps<S> {
    pub slides: Vec<S>,
    /// `Some` puts the carousel in controlled mode.
    pub slide_index: Option<usize>,
    /// `None` or zero disables auto-advance.
    pub auto_advance: Option<Duration>,
    pub overrides: VisualOverrides,
}

impl<S> CarouselProps<S> {
    pub fn new(slides: Vec<S>) -> Self {
        Self {
            slides,
            slide_index: None,
            auto_advance: None,
            overrides: VisualOverrides::default(),
        }
    }

    pub fn with_slide_index(mut self, index: usize) -> Self {
        self.slide_index = Some(index);
        self
    }

    pub fn with_auto_advance(mut self, interval: Duration) -> Self {
        self.auto_advance = Some(interval);
        self
    }

    pub fn with_overrides(mut self, overrides: VisualOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Who owns the index right now, and its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    Controlled { index: usize },
    Uncontrolled { index: usize },
}

pub struct CarouselController<S> {
    slides: Vec<S>,
    controlled_index: Option<usize>,
    owned_index: usize,
    interval: Option<Duration>,
    overrides: VisualOverrides,
    callbacks: Callbacks,
    clock: Box<dyn Clock>,
    timer: Option<TimerHandle>,
    torn_down: bool,
    anomaly_count: Cell<u64>,
    last_anomaly: Cell<Option<Anomaly>>,
    /// The anomaly currently on display, reported once until it clears.
    active_anomaly: Cell<Option<Anomaly>>,
}

impl<S> CarouselController<S> {
    /// Creates and activates a controller. A positive interval leaves it
    /// `AutoAdvancing` before the first render.
    pub fn new(props: CarouselProps<S>, callbacks: Callbacks, clock: Box<dyn Clock>) -> Self {
        let mut controller = Self {
            slides: props.slides,
            controlled_index: props.slide_index,
            owned_index: 0,
            interval: normalize_interval(props.auto_advance),
            overrides: props.overrides,
            callbacks,
            clock,
            timer: None,
            torn_down: false,
            anomaly_count: Cell::new(0),
            last_anomaly: Cell::new(None),
            active_anomaly: Cell::new(None),
        };
        controller.sync_timer();
        controller
    }

    /// Applies a new render pass.
    pub fn rerender(&mut self, props: CarouselProps<S>) {
        if props.slides.len() != self.slides.len() {
            debug!(
                "Slide collection changed length: {} -> {}",
                self.slides.len(),
                props.slides.len()
            );
        }
        self.slides = props.slides;
        self.overrides = props.overrides;
        self.set_slide_index(props.slide_index);
        self.set_auto_advance(props.auto_advance);
    }

    /// Replaces only the controlled index (`None` returns to uncontrolled).
    pub fn set_slide_index(&mut self, index: Option<usize>) {
        if self.controlled_index.is_some() != index.is_some() {
            debug!(
                "Control mode switched to {}",
                if index.is_some() { "controlled" } else { "uncontrolled" }
            );
        }
        self.controlled_index = index;
    }

    /// Replaces only the auto-advance interval.
    pub fn set_auto_advance(&mut self, interval: Option<Duration>) {
        self.interval = normalize_interval(interval);
        self.sync_timer();
    }

    pub fn request_prev(&mut self) -> Result<(), CarouselError> {
        self.request(Direction::Prev)
    }

    pub fn request_next(&mut self) -> Result<(), CarouselError> {
        self.request(Direction::Next)
    }

    fn request(&mut self, direction: Direction) -> Result<(), CarouselError> {
        if self.torn_down {
            warn!("Ignoring {} request on a torn-down carousel", direction.label());
            return Ok(());
        }

        let intent = NavigationIntent::new(direction, self.slides.len());
        if intent.length == 0 {
            return Err(CarouselError::InvalidCollection);
        }

        match self.mode() {
            ControlMode::Uncontrolled { index } => {
                let next = index::apply_step(index, intent.step(), intent.length)?;
                debug!("{}: {} -> {} of {}", direction.label(), index, next, intent.length);
                self.owned_index = next;
            }
            ControlMode::Controlled { index } => {
                debug!(
                    "{}: notifying owner (index {}, length {})",
                    direction.label(),
                    index,
                    intent.length
                );
                let callback = match direction {
                    Direction::Prev => &mut self.callbacks.on_prev,
                    Direction::Next => &mut self.callbacks.on_next,
                };
                (*callback)(intent.step(), intent.length);
            }
        }
        Ok(())
    }

    pub fn mode(&self) -> ControlMode {
        match self.controlled_index {
            Some(index) => ControlMode::Controlled { index },
            None => ControlMode::Uncontrolled {
                index: self.owned_index,
            },
        }
    }

    /// Index of the slide to display, always a valid position for a
    /// non-empty collection.
    ///
    /// An out-of-range controlled index is shown as `0` and recorded as an
    /// [`Anomaly::IndexOutOfRange`]. Repeated reads of the same bad index
    /// count once. A stale owned index (the collection shrank) is folded
    /// into range with the same modulo the next step uses.
    pub fn current_index(&self) -> usize {
        let length = self.slides.len();
        match self.mode() {
            ControlMode::Controlled { index } if index < length => {
                self.active_anomaly.set(None);
                index
            }
            ControlMode::Controlled { index } => {
                self.report(Anomaly::IndexOutOfRange { index, length });
                0
            }
            ControlMode::Uncontrolled { index } => {
                self.active_anomaly.set(None);
                index::apply_step(index, 0, length).unwrap_or(0)
            }
        }
    }

    /// `None` only for an empty collection.
    pub fn current_slide(&self) -> Option<&S> {
        self.slides.get(self.current_index())
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn overrides(&self) -> &VisualOverrides {
        &self.overrides
    }

    fn report(&self, anomaly: Anomaly) {
        if self.active_anomaly.get() == Some(anomaly) {
            return;
        }
        self.active_anomaly.set(Some(anomaly));
        warn!("{anomaly}");
        self.anomaly_count.set(self.anomaly_count.get() + 1);
        self.last_anomaly.set(Some(anomaly));
    }

    pub fn anomaly_count(&self) -> u64 {
        self.anomaly_count.get()
    }

    pub fn last_anomaly(&self) -> Option<Anomaly> {
        self.last_anomaly.get()
    }

    // ------------------------------------------------------------------
    // Timer lifecycle
    // ------------------------------------------------------------------

    fn sync_timer(&mut self) {
        if self.torn_down {
            return;
        }
        let armed = self.timer.as_ref().map(TimerHandle::interval);
        match (armed, self.interval) {
            (Some(current), Some(interval)) if current == interval => {}
            (current, Some(interval)) => {
                if current.is_some() {
                    info!("Auto-advance interval changed, re-arming at {:?}", interval);
                } else {
                    info!("Auto-advance armed at {:?}", interval);
                }
                self.timer = Some(TimerHandle::arm(interval, self.clock.now()));
            }
            (Some(_), None) => {
                info!("Auto-advance disabled");
                self.timer = None;
            }
            (None, None) => {}
        }
    }

    /// Delivers every tick that has fallen due, oldest first. Each tick is a
    /// `request_next`. Returns how many ticks fired.
    pub fn poll_timer(&mut self) -> Result<usize, CarouselError> {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(timer) = self.timer.as_mut()
            && timer.take_due(now)
        {
            debug!("Auto-advance tick at {:?}", now);
            self.request_next()?;
            fired += 1;
        }
        Ok(fired)
    }

    /// When the next tick is due on the controller's clock, if armed and
    /// reachable.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer
            .as_ref()
            .filter(|timer| !timer.is_unreachable())
            .map(TimerHandle::deadline)
    }

    /// Time left until the next tick, if armed.
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.clock.now()))
    }

    pub fn timer_state(&self) -> TimerState {
        match &self.timer {
            Some(timer) => TimerState::AutoAdvancing {
                interval: timer.interval(),
            },
            None => TimerState::Idle,
        }
    }

    /// Cancels the timer for good. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if self.timer.take().is_some() {
            info!("Auto-advance cancelled on teardown");
        }
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl<S> Drop for CarouselController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::slide::Slide;
    use crate::core::timer::ManualClock;
    use crate::test_support::{CallLog, recording_callbacks, three_slides};

    const TEN: Duration = Duration::from_millis(10);

    fn uncontrolled() -> CarouselController<Slide> {
        CarouselController::new(
            CarouselProps::new(three_slides()),
            Callbacks::default(),
            Box::new(ManualClock::new()),
        )
    }

    fn controlled(index: usize) -> (CarouselController<Slide>, CallLog) {
        let (callbacks, log) = recording_callbacks();
        let controller = CarouselController::new(
            CarouselProps::new(three_slides()).with_slide_index(index),
            callbacks,
            Box::new(ManualClock::new()),
        );
        (controller, log)
    }

    fn auto_advancing(interval: Duration) -> (CarouselController<Slide>, ManualClock) {
        let clock = ManualClock::new();
        let controller = CarouselController::new(
            CarouselProps::new(three_slides()).with_auto_advance(interval),
            Callbacks::default(),
            Box::new(clock.clone()),
        );
        (controller, clock)
    }

    // -- uncontrolled ------------------------------------------------------

    #[test]
    fn test_uncontrolled_starts_at_zero() {
        let carousel = uncontrolled();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.mode(), ControlMode::Uncontrolled { index: 0 });
        assert_eq!(carousel.current_slide().unwrap().description, "Slide 1");
    }

    #[test]
    fn test_uncontrolled_next_cycles_back_to_start() {
        let mut carousel = uncontrolled();
        let mut seen = Vec::new();
        for _ in 0..3 {
            carousel.request_next().unwrap();
            seen.push(carousel.current_index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_uncontrolled_prev_wraps_to_last() {
        let mut carousel = uncontrolled();
        carousel.request_prev().unwrap();
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.current_slide().unwrap().description, "Slide 3");
    }

    #[test]
    fn test_uncontrolled_does_not_call_callbacks() {
        let (callbacks, log) = recording_callbacks();
        let mut carousel = CarouselController::new(
            CarouselProps::new(three_slides()),
            callbacks,
            Box::new(ManualClock::new()),
        );
        carousel.request_next().unwrap();
        carousel.request_prev().unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_empty_collection_is_invalid() {
        let mut carousel: CarouselController<Slide> = CarouselController::new(
            CarouselProps::new(Vec::new()),
            Callbacks::default(),
            Box::new(ManualClock::new()),
        );
        assert_eq!(carousel.request_next(), Err(CarouselError::InvalidCollection));
        assert_eq!(carousel.request_prev(), Err(CarouselError::InvalidCollection));
        assert!(carousel.current_slide().is_none());
    }

    #[test]
    fn test_owned_index_survives_rerender() {
        let mut carousel = uncontrolled();
        carousel.request_next().unwrap();
        carousel.rerender(CarouselProps::new(three_slides()));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_shrunk_collection_is_refolded() {
        let mut carousel = CarouselController::new(
            CarouselProps::new((0..6).collect::<Vec<u32>>()),
            Callbacks::default(),
            Box::new(ManualClock::new()),
        );
        for _ in 0..5 {
            carousel.request_next().unwrap();
        }
        carousel.rerender(CarouselProps::new(vec![10, 11, 12]));
        // 5 mod 3
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.current_slide(), Some(&12));
        carousel.request_next().unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.anomaly_count(), 0);
    }

    // -- controlled --------------------------------------------------------

    #[test]
    fn test_controlled_reads_external_index() {
        let (mut carousel, _log) = controlled(1);
        assert_eq!(carousel.current_index(), 1);
        carousel.set_slide_index(Some(0));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_controlled_prev_notifies_owner_without_mutating() {
        let (mut carousel, log) = controlled(1);
        carousel.request_prev().unwrap();
        assert_eq!(*log.borrow(), vec![(Direction::Prev, -1, 3)]);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.mode(), ControlMode::Controlled { index: 1 });
    }

    #[test]
    fn test_controlled_next_notifies_owner() {
        let (mut carousel, log) = controlled(0);
        carousel.request_next().unwrap();
        assert_eq!(*log.borrow(), vec![(Direction::Next, 1, 3)]);
    }

    #[test]
    fn test_controlled_owner_may_pick_any_index() {
        let (mut carousel, log) = controlled(0);
        carousel.request_next().unwrap();
        assert_eq!(log.borrow().len(), 1);
        // Owner ignores the suggested step.
        carousel.set_slide_index(Some(2));
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.anomaly_count(), 0);
    }

    #[test]
    fn test_controlled_out_of_range_is_clamped_and_reported() {
        let (carousel, _log) = controlled(5);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.anomaly_count(), 1);
        assert_eq!(
            carousel.last_anomaly(),
            Some(Anomaly::IndexOutOfRange { index: 5, length: 3 })
        );
        assert_eq!(carousel.current_slide().unwrap().description, "Slide 1");
    }

    #[test]
    fn test_stale_index_counts_once_across_renders() {
        let (mut carousel, _log) = controlled(5);
        for _ in 0..3 {
            assert_eq!(carousel.current_index(), 0);
            assert!(carousel.current_slide().is_some());
        }
        assert_eq!(carousel.anomaly_count(), 1);

        carousel.set_slide_index(Some(7));
        carousel.current_index();
        carousel.current_index();
        assert_eq!(carousel.anomaly_count(), 2);
        assert_eq!(
            carousel.last_anomaly(),
            Some(Anomaly::IndexOutOfRange { index: 7, length: 3 })
        );
    }

    #[test]
    fn test_recurring_stale_index_counts_again_after_recovery() {
        let (mut carousel, _log) = controlled(5);
        carousel.current_index();
        carousel.set_slide_index(Some(1));
        assert_eq!(carousel.current_index(), 1);
        carousel.set_slide_index(Some(5));
        carousel.current_index();
        assert_eq!(carousel.anomaly_count(), 2);
    }

    #[test]
    fn test_uncontrolled_resumes_owned_index_after_controlled_stretch() {
        let mut carousel = uncontrolled();
        carousel.request_next().unwrap();
        carousel.set_slide_index(Some(2));
        assert_eq!(carousel.current_index(), 2);
        carousel.set_slide_index(None);
        assert_eq!(carousel.current_index(), 1);
    }

    // -- timer -------------------------------------------------------------

    #[test]
    fn test_positive_interval_arms_at_construction() {
        let (carousel, _clock) = auto_advancing(TEN);
        assert_eq!(carousel.timer_state(), TimerState::AutoAdvancing { interval: TEN });
        assert_eq!(carousel.next_deadline(), Some(TEN));
    }

    #[test]
    fn test_no_interval_stays_idle() {
        let carousel = uncontrolled();
        assert_eq!(carousel.timer_state(), TimerState::Idle);
        assert_eq!(carousel.next_deadline(), None);
        assert_eq!(carousel.time_until_tick(), None);
    }

    #[test]
    fn test_zero_interval_stays_idle() {
        let (carousel, _clock) = auto_advancing(Duration::ZERO);
        assert_eq!(carousel.timer_state(), TimerState::Idle);
    }

    #[test]
    fn test_huge_interval_arms_without_overflow() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(1));
        let mut carousel = CarouselController::new(
            CarouselProps::new(three_slides()).with_auto_advance(Duration::MAX),
            Callbacks::default(),
            Box::new(clock.clone()),
        );
        assert_eq!(
            carousel.timer_state(),
            TimerState::AutoAdvancing { interval: Duration::MAX }
        );
        assert_eq!(carousel.next_deadline(), None);

        clock.advance(Duration::from_secs(3600));
        assert_eq!(carousel.poll_timer(), Ok(0));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_auto_advance_moves_one_slide_per_interval() {
        let (mut carousel, clock) = auto_advancing(TEN);

        clock.advance(Duration::from_millis(9));
        assert_eq!(carousel.poll_timer(), Ok(0));
        assert_eq!(carousel.current_index(), 0);

        clock.advance(Duration::from_millis(1));
        assert_eq!(carousel.poll_timer(), Ok(1));
        assert_eq!(carousel.current_index(), 1);

        clock.advance(TEN);
        assert_eq!(carousel.poll_timer(), Ok(1));
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_missed_ticks_are_all_delivered() {
        let (mut carousel, clock) = auto_advancing(TEN);
        clock.advance(Duration::from_millis(30));
        assert_eq!(carousel.poll_timer(), Ok(3));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_tick_in_controlled_mode_notifies_owner() {
        let clock = ManualClock::new();
        let (callbacks, log) = recording_callbacks();
        let mut carousel = CarouselController::new(
            CarouselProps::new(three_slides())
                .with_slide_index(1)
                .with_auto_advance(TEN),
            callbacks,
            Box::new(clock.clone()),
        );
        clock.advance(TEN);
        carousel.poll_timer().unwrap();
        assert_eq!(*log.borrow(), vec![(Direction::Next, 1, 3)]);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_tick_uses_length_at_application_time() {
        let clock = ManualClock::new();
        let (callbacks, log) = recording_callbacks();
        let mut carousel = CarouselController::new(
            CarouselProps::new(three_slides())
                .with_slide_index(0)
                .with_auto_advance(TEN),
            callbacks,
            Box::new(clock.clone()),
        );
        let mut longer = three_slides();
        longer.push(Slide::new("https://example.com/slide4.png", "Slide 4"));
        carousel.rerender(
            CarouselProps::new(longer)
                .with_slide_index(0)
                .with_auto_advance(TEN),
        );
        clock.advance(TEN);
        carousel.poll_timer().unwrap();
        assert_eq!(*log.borrow(), vec![(Direction::Next, 1, 4)]);
    }

    #[test]
    fn test_tick_on_emptied_collection_errors() {
        let (mut carousel, clock) = auto_advancing(TEN);
        carousel.rerender(CarouselProps::new(Vec::new()).with_auto_advance(TEN));
        clock.advance(TEN);
        assert_eq!(carousel.poll_timer(), Err(CarouselError::InvalidCollection));
    }

    #[test]
    fn test_same_interval_keeps_phase() {
        let (mut carousel, clock) = auto_advancing(TEN);
        clock.advance(Duration::from_millis(6));
        carousel.rerender(CarouselProps::new(three_slides()).with_auto_advance(TEN));
        assert_eq!(carousel.next_deadline(), Some(TEN));
        clock.advance(Duration::from_millis(4));
        assert_eq!(carousel.poll_timer(), Ok(1));
    }

    #[test]
    fn test_interval_change_rearms() {
        let (mut carousel, clock) = auto_advancing(TEN);
        clock.advance(Duration::from_millis(6));
        let twenty = Duration::from_millis(20);
        carousel.set_auto_advance(Some(twenty));
        assert_eq!(carousel.timer_state(), TimerState::AutoAdvancing { interval: twenty });
        assert_eq!(carousel.next_deadline(), Some(Duration::from_millis(26)));

        clock.advance(Duration::from_millis(19));
        assert_eq!(carousel.poll_timer(), Ok(0));
        clock.advance(Duration::from_millis(1));
        assert_eq!(carousel.poll_timer(), Ok(1));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_disabling_interval_cancels() {
        let (mut carousel, clock) = auto_advancing(TEN);
        carousel.set_auto_advance(None);
        assert_eq!(carousel.timer_state(), TimerState::Idle);
        clock.advance(Duration::from_millis(100));
        assert_eq!(carousel.poll_timer(), Ok(0));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_enabling_interval_later_arms_from_now() {
        let clock = ManualClock::new();
        let mut carousel = CarouselController::new(
            CarouselProps::new(three_slides()),
            Callbacks::default(),
            Box::new(clock.clone()),
        );
        clock.advance(Duration::from_millis(50));
        carousel.set_auto_advance(Some(TEN));
        assert_eq!(carousel.next_deadline(), Some(Duration::from_millis(60)));
        assert_eq!(carousel.time_until_tick(), Some(TEN));
    }

    #[test]
    fn test_teardown_cancels_pending_ticks() {
        let clock = ManualClock::new();
        let (callbacks, log) = recording_callbacks();
        let mut carousel = CarouselController::new(
            CarouselProps::new(three_slides())
                .with_slide_index(0)
                .with_auto_advance(TEN),
            callbacks,
            Box::new(clock.clone()),
        );
        clock.advance(Duration::from_millis(5));
        carousel.teardown();
        assert_eq!(carousel.timer_state(), TimerState::Idle);
        assert!(carousel.is_torn_down());

        clock.advance(Duration::from_millis(1000));
        assert_eq!(carousel.poll_timer(), Ok(0));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_teardown_is_terminal() {
        let (mut carousel, clock) = auto_advancing(TEN);
        carousel.teardown();
        carousel.teardown();
        carousel.set_auto_advance(Some(TEN));
        assert_eq!(carousel.timer_state(), TimerState::Idle);

        carousel.request_next().unwrap();
        clock.advance(Duration::from_millis(100));
        carousel.poll_timer().unwrap();
        assert_eq!(carousel.current_index(), 0);
    }
}
