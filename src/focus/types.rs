//! Core types for directional (D-pad / remote) focus navigation

// =============================================================================
// Geometry
// =============================================================================

/// A rectangle in viewport coordinates, used for spatial calculations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// =============================================================================
// Input
// =============================================================================

/// Direction of navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A decoded navigation signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    /// D-pad / arrow-key move
    Direction(NavDirection),
    /// Primary activation of the focused element
    Select,
    /// Back out of the current view
    Back,
}

// =============================================================================
// Host capability
// =============================================================================

/// Capability the navigator needs from the host UI toolkit.
///
/// The host owns the set of interactive elements and the single focus
/// pointer; the navigator only reads geometry and requests focus transfers.
/// Implementing this trait on a synthetic element list is enough to unit-test
/// the whole navigation pipeline without a real screen.
pub trait FocusHost {
    /// Opaque element identity, compared by value
    type Id: Copy + PartialEq;

    /// Live set of enabled, visible, laid-out interactive elements, in
    /// discovery order. Recomputed fresh on every call; the visible set
    /// changes with every render, so callers must not cache it.
    fn focusable(&self) -> Vec<Self::Id>;

    /// Bounding rectangle of an element, if it currently has one
    fn bounds(&self, id: Self::Id) -> Option<Rect>;

    /// Element currently holding input focus, if any
    fn focused(&self) -> Option<Self::Id>;

    /// Transfer input focus to an element
    fn focus(&mut self, id: Self::Id);

    /// Simulate a primary activation (click/tap) on an element
    fn activate(&mut self, id: Self::Id);

    /// Request that an element be scrolled into the viewport, centered.
    /// Best-effort: hosts that cannot scroll may leave this as the no-op
    /// default, and a failed scroll never undoes the focus transfer.
    fn scroll_into_view(&mut self, id: Self::Id) {
        let _ = id;
    }
}
