pub mod highlight;
pub mod input;
pub mod registry;

// Re-exports
pub use highlight::{
    FocusRingStyle, draw_focus_ring, draw_focus_ring_if_focused, draw_focus_ring_styled,
};
pub use input::{is_nav_key, map_key};
pub use registry::FocusRegistry;
