//! # CarouselSlide Component
//!
//! Renders one slide: a framed stand-in for the image (sized by the resolved
//! `img_height`), then the description and attribution underneath.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::slide::SlideProps;
use crate::tui::component::Component;

pub struct CarouselSlide<'a> {
    pub props: SlideProps<'a>,
}

impl<'a> CarouselSlide<'a> {
    pub fn new(props: SlideProps<'a>) -> Self {
        Self { props }
    }

    /// Rows this slide wants: the image frame plus two caption lines.
    pub fn required_height(&self) -> u16 {
        self.props.img_height.saturating_add(2)
    }
}

impl Component for CarouselSlide<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let slide = self.props.slide;
        let image_height = self.props.img_height.min(area.height.saturating_sub(2));
        let [image_area, description_area, attribution_area] = Layout::vertical([
            Constraint::Length(image_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let image = Paragraph::new(slide.image_url.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title("image"));
        frame.render_widget(image, image_area);

        let description = Paragraph::new(Line::styled(
            slide.description.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(description, description_area);

        if let Some(attribution) = &slide.attribution {
            let attribution = Paragraph::new(Line::styled(
                attribution.as_str(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(attribution, attribution_area);
        }
    }
}
