//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the carousel,
//! and translates key presses and clicks into controller requests.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Everything happens on one thread, one event at a time:
//!
//! 1. Deliver due timer ticks.
//! 2. Sync the controlled index from its owner (controlled mode only).
//! 3. Draw.
//! 4. Wait for input, but never past the timer's next deadline.
//! 5. Handle every pending input event in arrival order. Ticks that fell
//!    due while waiting go out before the event they preceded.
//!
//! ## Controlled Mode
//!
//! With `--controlled` the index lives in an `IndexOwner` outside the
//! controller. The owner's callbacks apply the step it is handed with the
//! same `apply_step` rule the controller uses on its own, and the loop feeds
//! the result back as the next render's index.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::controller::{Callbacks, CarouselController, CarouselProps};
use crate::core::index;
use crate::core::slide::{Deck, Slide};
use crate::core::timer::{Clock, SystemClock};
use crate::tui::component::EventHandler;
use crate::tui::components::{CarouselEvent, CarouselState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Longest the loop sleeps waiting for input when no tick is due sooner.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub carousel: CarouselState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            carousel: CarouselState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Holds the slide index when the carousel runs controlled.
#[derive(Debug, Clone)]
pub struct IndexOwner {
    index: Rc<Cell<usize>>,
}

impl IndexOwner {
    pub fn new(start: usize) -> Self {
        Self {
            index: Rc::new(Cell::new(start)),
        }
    }

    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Callbacks that apply the suggested step to this owner's index.
    pub fn callbacks(&self) -> Callbacks {
        let prev = Rc::clone(&self.index);
        let next = Rc::clone(&self.index);
        Callbacks::new(
            move |step, length| apply_owned_step(&prev, step, length),
            move |step, length| apply_owned_step(&next, step, length),
        )
    }
}

fn apply_owned_step(index: &Cell<usize>, step: isize, length: usize) {
    match index::apply_step(index.get(), step, length) {
        Ok(next) => index.set(next),
        Err(e) => warn!("Owner could not apply step {}: {}", step, e),
    }
}

/// Wires a controller to the resolved settings and deck.
///
/// Returns the index owner alongside when running controlled.
pub fn build_controller(
    config: &ResolvedConfig,
    deck: Deck,
) -> (CarouselController<Slide>, Option<IndexOwner>) {
    build_controller_with_clock(config, deck, Box::new(SystemClock::new()))
}

fn build_controller_with_clock(
    config: &ResolvedConfig,
    deck: Deck,
    clock: Box<dyn Clock>,
) -> (CarouselController<Slide>, Option<IndexOwner>) {
    let overrides = deck.overrides();
    let mut props = CarouselProps::new(deck.slides).with_overrides(overrides);
    props.auto_advance = config.auto_advance;

    let owner = config.controlled.then(|| IndexOwner::new(config.start_index));
    let callbacks = match &owner {
        Some(owner) => {
            props.slide_index = Some(owner.index());
            owner.callbacks()
        }
        None => Callbacks::default(),
    };

    let controller = CarouselController::new(props, callbacks, clock);
    (controller, owner)
}

pub fn run(config: ResolvedConfig, deck: Deck) -> std::io::Result<()> {
    let (mut controller, owner) = build_controller(&config, deck);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut terminal, &mut controller, &mut tui, owner.as_ref())
    });
    controller.teardown();
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    controller: &mut CarouselController<Slide>,
    tui: &mut TuiState,
    owner: Option<&IndexOwner>,
) -> std::io::Result<()> {
    loop {
        deliver_due_ticks(controller, owner);
        terminal.draw(|f| ui::draw_ui(f, controller, tui))?;

        let timeout = controller
            .time_until_tick()
            .map_or(IDLE_POLL, |until| until.min(IDLE_POLL));

        let mut pending = poll_event_timeout(timeout)?;
        while let Some(event) = pending {
            if !dispatch_event(controller, tui, owner, event) {
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Handles one input event after any tick that fell due before it.
///
/// Returns `false` once the user asked to quit.
fn dispatch_event(
    controller: &mut CarouselController<Slide>,
    tui: &mut TuiState,
    owner: Option<&IndexOwner>,
    event: TuiEvent,
) -> bool {
    deliver_due_ticks(controller, owner);
    if event == TuiEvent::Quit {
        info!("Quit requested");
        return false;
    }
    if let Some(carousel_event) = tui.carousel.handle_event(&event) {
        navigate(controller, carousel_event);
        sync_owner(controller, owner);
    }
    true
}

fn deliver_due_ticks(controller: &mut CarouselController<Slide>, owner: Option<&IndexOwner>) {
    match controller.poll_timer() {
        Ok(0) => {}
        Ok(fired) => debug!("Delivered {} auto-advance tick(s)", fired),
        Err(e) => warn!("Auto-advance tick failed: {}", e),
    }
    sync_owner(controller, owner);
}

fn navigate(controller: &mut CarouselController<Slide>, event: CarouselEvent) {
    let result = match event {
        CarouselEvent::Prev => controller.request_prev(),
        CarouselEvent::Next => controller.request_next(),
    };
    if let Err(e) = result {
        warn!("Navigation failed: {}", e);
    }
}

fn sync_owner(controller: &mut CarouselController<Slide>, owner: Option<&IndexOwner>) {
    if let Some(owner) = owner {
        controller.set_slide_index(Some(owner.index()));
    }
}
