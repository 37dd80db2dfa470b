//! # CarouselButton Component
//!
//! A bordered, single-label button. Stateless: the parent decides where it
//! goes and remembers that area for click hit-testing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::intent::Direction;
use crate::tui::component::Component;

pub struct CarouselButton {
    pub direction: Direction,
}

impl CarouselButton {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}

impl Component for CarouselButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let button = Paragraph::new(self.direction.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(style.add_modifier(Modifier::DIM)));
        frame.render_widget(button, area);
    }
}
