use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Prev,
    Next,
    Quit,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let mapped = match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(mapped)
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release events arrive when keyboard enhancement is on
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Left) | (_, KeyCode::Char('h')) => Some(TuiEvent::Prev),
        (_, KeyCode::Right) | (_, KeyCode::Char('l')) => Some(TuiEvent::Next),
        (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        _ => None,
    }
}
