use std::time::Duration;

use ratatui::Frame;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::core::controller::{CarouselController, ControlMode};
use crate::core::slide::{Slide, SlideProps};
use crate::core::timer::TimerState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::Carousel;

pub fn draw_ui(frame: &mut Frame, controller: &CarouselController<Slide>, tui: &mut TuiState) {
    let outer = Block::bordered()
        .title(" Carousel ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let index = controller.current_index();
    let slide = controller
        .slides()
        .get(index)
        .map(|slide| SlideProps::resolve(slide, controller.overrides()));
    let position = (index, controller.slides().len());

    Carousel::new(&mut tui.carousel, slide, position, status_line(controller)).render(frame, inner);
}

/// One-line summary of mode and timer, shown under the buttons.
pub fn status_line(controller: &CarouselController<Slide>) -> String {
    let mode = match controller.mode() {
        ControlMode::Controlled { .. } => "controlled",
        ControlMode::Uncontrolled { .. } => "uncontrolled",
    };
    let timer = match controller.timer_state() {
        TimerState::Idle => "auto-advance off".to_string(),
        TimerState::AutoAdvancing { interval } => match controller.time_until_tick() {
            Some(remaining) => format!(
                "auto-advance every {} (next in {})",
                format_secs(interval),
                format_secs(remaining)
            ),
            None => format!("auto-advance every {}", format_secs(interval)),
        },
    };
    let mut status = format!("{mode} · {timer} · ←/→ navigate · q quit");
    let anomalies = controller.anomaly_count();
    if anomalies > 0 {
        status.push_str(&format!(" · {anomalies} index anomalies"));
    }
    status
}

fn format_secs(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f32())
}
