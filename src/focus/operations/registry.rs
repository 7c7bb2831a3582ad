// egui host adapter: per-frame registry of focusable widgets
//
// Immediate mode means the focusable set is rebuilt every frame, which gives
// the navigator the "always fresh, never cached" view it expects for free.

use eframe::egui::{Align, Context, Id, Response};

use crate::focus::types::{FocusHost, Rect};

/// Registry of the interactive widgets drawn this frame.
///
/// App code calls `begin_frame` once per frame and then `register` for every
/// widget that should participate in directional navigation. Registering is
/// the tagging convention: native buttons and custom widgets (cards, carousel
/// tiles) alike are only reachable by D-pad if they were registered, in the
/// order they were drawn.
#[derive(Default)]
pub struct FocusRegistry {
    ctx: Option<Context>,
    entries: Vec<(Id, Rect)>,
    activated: Option<Id>,
    scroll_request: Option<Id>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called at the start of each frame; drops last frame's entries
    pub fn begin_frame(&mut self, ctx: &Context) {
        self.ctx = Some(ctx.clone());
        self.entries.clear();
    }

    /// Register an interactive widget for directional navigation.
    ///
    /// Disabled widgets and widgets without a laid-out rect are skipped, so
    /// they never become navigation targets. Also services a pending
    /// scroll-into-view request for this widget.
    pub fn register(&mut self, response: &Response) {
        if !response.enabled() {
            return;
        }

        let rect = response.rect;
        if !rect.is_finite() || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }

        if self.scroll_request == Some(response.id) {
            self.scroll_request = None;
            response.scroll_to_me(Some(Align::Center));
        }

        self.entries
            .push((response.id, Rect::new(rect.left(), rect.top(), rect.width(), rect.height())));
    }

    /// Consume an activation requested by the navigator for `id`.
    ///
    /// Widget code treats a `true` return like a click on itself.
    pub fn was_activated(&mut self, id: Id) -> bool {
        if self.activated == Some(id) {
            self.activated = None;
            true
        } else {
            false
        }
    }

    /// Consume whatever activation is pending, if any
    pub fn take_activated(&mut self) -> Option<Id> {
        self.activated.take()
    }
}

impl FocusHost for FocusRegistry {
    type Id = Id;

    fn focusable(&self) -> Vec<Id> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    fn bounds(&self, id: Id) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, rect)| *rect)
    }

    fn focused(&self) -> Option<Id> {
        let ctx = self.ctx.as_ref()?;
        let focused = ctx.memory(|memory| memory.focused())?;
        // Focus held by an unregistered widget (e.g. a text field outside the
        // navigation set) does not count as a navigation reference
        self.entries
            .iter()
            .any(|(id, _)| *id == focused)
            .then_some(focused)
    }

    fn focus(&mut self, id: Id) {
        if let Some(ctx) = &self.ctx {
            ctx.memory_mut(|memory| memory.request_focus(id));
        }
    }

    fn activate(&mut self, id: Id) {
        self.activated = Some(id);
    }

    fn scroll_into_view(&mut self, id: Id) {
        // Serviced on the widget's next registration; egui animates the
        // scroll itself. Harmless if the widget never shows up again.
        self.scroll_request = Some(id);
    }
}
