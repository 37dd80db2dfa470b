//! # Carousel Component
//!
//! The presentation side of the carousel: current slide on top, Prev/Next
//! buttons with the position between them, and a one-line status.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CarouselState` lives in `TuiState` and remembers where the buttons
//!   were drawn, so mouse clicks can be hit-tested.
//! - `Carousel` is created each frame with borrowed state and props.
//!
//! The component never touches the controller. It turns input into
//! `CarouselEvent`s and the run loop forwards those to `request_prev` /
//! `request_next`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::intent::Direction;
use crate::core::slide::SlideProps;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{CarouselButton, CarouselSlide};
use crate::tui::event::TuiEvent;

const BUTTON_WIDTH: u16 = 10;
const BUTTON_HEIGHT: u16 = 3;

/// Persistent state for the carousel view.
#[derive(Debug, Default)]
pub struct CarouselState {
    prev_area: Rect,
    next_area: Rect,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    fn button_at(&self, column: u16, row: u16) -> Option<Direction> {
        let position = Position::new(column, row);
        if self.prev_area.contains(position) {
            Some(Direction::Prev)
        } else if self.next_area.contains(position) {
            Some(Direction::Next)
        } else {
            None
        }
    }
}

/// Events emitted by the carousel view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Prev,
    Next,
}

impl From<Direction> for CarouselEvent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Prev => CarouselEvent::Prev,
            Direction::Next => CarouselEvent::Next,
        }
    }
}

impl EventHandler for CarouselState {
    type Event = CarouselEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CarouselEvent> {
        match *event {
            TuiEvent::Prev => Some(CarouselEvent::Prev),
            TuiEvent::Next => Some(CarouselEvent::Next),
            TuiEvent::MouseClick(column, row) => self.button_at(column, row).map(Into::into),
            TuiEvent::Quit | TuiEvent::Resize => None,
        }
    }
}

/// Transient render wrapper for the carousel.
pub struct Carousel<'a> {
    state: &'a mut CarouselState,
    slide: Option<SlideProps<'a>>,
    /// Zero-based index and collection length.
    position: (usize, usize),
    status: String,
}

impl<'a> Carousel<'a> {
    pub fn new(
        state: &'a mut CarouselState,
        slide: Option<SlideProps<'a>>,
        position: (usize, usize),
        status: String,
    ) -> Self {
        Self {
            state,
            slide,
            position,
            status,
        }
    }
}

impl Component for Carousel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Controls sit right under the slide; the slide gives up rows first.
        let slide_height = self
            .slide
            .map_or(1, |props| CarouselSlide::new(props).required_height())
            .min(area.height.saturating_sub(BUTTON_HEIGHT + 1));
        let [slide_area, controls_area, status_area, _] = Layout::vertical([
            Constraint::Length(slide_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        match self.slide {
            Some(props) => CarouselSlide::new(props).render(frame, slide_area),
            None => {
                let empty = Paragraph::new("No slides")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Red));
                frame.render_widget(empty, slide_area);
            }
        }

        let [prev_area, position_area, next_area] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .areas(controls_area);

        CarouselButton::new(Direction::Prev).render(frame, prev_area);
        CarouselButton::new(Direction::Next).render(frame, next_area);
        self.state.prev_area = prev_area;
        self.state.next_area = next_area;

        let (index, length) = self.position;
        let position_text = if length == 0 {
            "0/0".to_string()
        } else {
            format!("{}/{}", index + 1, length)
        };
        // Vertically center within the button row
        let [_, position_line, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(position_area);
        frame.render_widget(
            Paragraph::new(position_text).alignment(Alignment::Center),
            position_line,
        );

        frame.render_widget(
            Paragraph::new(Line::styled(
                self.status.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
            status_area,
        );
    }
}
