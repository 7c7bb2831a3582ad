// Keyboard decoding for directional navigation

use eframe::egui::Key;

use crate::focus::types::{NavDirection, NavInput};

/// Map a key press to a navigation input.
///
/// Enter/Space are synonyms for Select, Escape/Backspace for Back. Keys that
/// return `None` are not navigation inputs and should fall through to the
/// host's default handling.
pub fn map_key(key: Key) -> Option<NavInput> {
    match key {
        Key::ArrowUp => Some(NavInput::Direction(NavDirection::Up)),
        Key::ArrowDown => Some(NavInput::Direction(NavDirection::Down)),
        Key::ArrowLeft => Some(NavInput::Direction(NavDirection::Left)),
        Key::ArrowRight => Some(NavInput::Direction(NavDirection::Right)),

        Key::Enter | Key::Space => Some(NavInput::Select),
        Key::Escape | Key::Backspace => Some(NavInput::Back),

        _ => None,
    }
}

/// Check if a key participates in navigation
pub fn is_nav_key(key: Key) -> bool {
    map_key(key).is_some()
}
