// Navigation orchestration: directional moves, select/back, mount auto-focus
//
// The navigator is the view-scoped subscription object: create it when a view
// mounts, feed it decoded inputs each frame, drop it on teardown. Dropping it
// cancels the pending mount auto-focus, so a dismantled view can never steal
// focus afterwards.

use std::time::{Duration, Instant};

use crate::config::NavConfig;
use crate::focus::pure::{SpatialTuning, pick_target};
use crate::focus::types::{FocusHost, NavDirection, NavInput, Rect};

type Callback = Box<dyn FnMut()>;

/// Directional focus navigator for one mounted view
pub struct Navigator {
    tuning: SpatialTuning,
    autofocus_at: Option<Instant>,
    on_select: Option<Callback>,
    on_back: Option<Callback>,
}

impl Navigator {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            tuning: SpatialTuning {
                deadzone_px: config.deadzone_px,
                cross_axis_weight: config.cross_axis_weight,
            },
            // One-shot deadline; gives the first layout pass time to settle
            // before anything is focused
            autofocus_at: Some(Instant::now() + Duration::from_millis(config.autofocus_delay_ms)),
            on_select: None,
            on_back: None,
        }
    }

    /// Set the callback invoked after a Select activation
    pub fn on_select(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Set the callback invoked on Back
    pub fn on_back(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_back = Some(Box::new(callback));
        self
    }

    /// Dispatch one decoded input
    pub fn handle_input<H: FocusHost>(&mut self, host: &mut H, input: NavInput) {
        match input {
            NavInput::Direction(direction) => self.navigate(host, direction),
            NavInput::Select => self.activate_current(host),
            NavInput::Back => self.go_back(),
        }
    }

    /// Move focus to the element a D-pad user would expect in `direction`.
    ///
    /// Reaching an edge absorbs the input silently: no wrap-around, no error.
    pub fn navigate<H: FocusHost>(&mut self, host: &mut H, direction: NavDirection) {
        let candidates = host.focusable();
        let Some(&first) = candidates.first() else {
            return;
        };

        let reference = host
            .focused()
            .filter(|id| candidates.contains(id))
            .unwrap_or(first);

        let Some(reference_rect) = host.bounds(reference) else {
            // Focus is nowhere resolvable; land on the first candidate
            host.focus(first);
            return;
        };

        let placed: Vec<(H::Id, Rect)> = candidates
            .iter()
            .filter_map(|&id| host.bounds(id).map(|rect| (id, rect)))
            .collect();
        let rects: Vec<Rect> = placed.iter().map(|(_, rect)| *rect).collect();

        if let Some(winner) = pick_target(reference_rect, &rects, direction, self.tuning) {
            let id = placed[winner].0;
            host.focus(id);
            host.scroll_into_view(id);
        }
    }

    /// Activate the focused element, then run the select callback.
    /// No-op (callback included) when nothing holds focus.
    pub fn activate_current<H: FocusHost>(&mut self, host: &mut H) {
        let Some(id) = host.focused() else {
            return;
        };
        host.activate(id);
        if let Some(callback) = self.on_select.as_mut() {
            callback();
        }
    }

    /// Run the back callback; never touches focus
    pub fn go_back(&mut self) {
        if let Some(callback) = self.on_back.as_mut() {
            callback();
        }
    }

    /// Run the one-shot mount auto-focus once its deadline has elapsed.
    ///
    /// Call every frame. If nothing in the live candidate set holds focus
    /// when the deadline passes, the first candidate gets it, so a freshly
    /// mounted view is immediately navigable without a pointer gesture.
    pub fn tick<H: FocusHost>(&mut self, host: &mut H) {
        let Some(deadline) = self.autofocus_at else {
            return;
        };
        if Instant::now() < deadline {
            return;
        }
        self.autofocus_at = None;

        let candidates = host.focusable();
        let Some(&first) = candidates.first() else {
            return;
        };
        if host.focused().filter(|id| candidates.contains(id)).is_none() {
            host.focus(first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Synthetic host: a flat element list with recorded side effects
    struct TestHost {
        elements: Vec<(u32, Option<Rect>)>,
        focused: Option<u32>,
        activated: Vec<u32>,
        scrolled: Vec<u32>,
    }

    impl TestHost {
        fn new(elements: Vec<(u32, Option<Rect>)>) -> Self {
            Self {
                elements,
                focused: None,
                activated: Vec::new(),
                scrolled: Vec::new(),
            }
        }
    }

    impl FocusHost for TestHost {
        type Id = u32;

        fn focusable(&self) -> Vec<u32> {
            self.elements.iter().map(|(id, _)| *id).collect()
        }

        fn bounds(&self, id: u32) -> Option<Rect> {
            self.elements
                .iter()
                .find(|(entry, _)| *entry == id)
                .and_then(|(_, rect)| *rect)
        }

        fn focused(&self) -> Option<u32> {
            self.focused
        }

        fn focus(&mut self, id: u32) {
            self.focused = Some(id);
        }

        fn activate(&mut self, id: u32) {
            self.activated.push(id);
        }

        fn scroll_into_view(&mut self, id: u32) {
            self.scrolled.push(id);
        }
    }

    fn navigator() -> Navigator {
        Navigator::new(&NavConfig::default())
    }

    fn rect(x: f32, y: f32) -> Option<Rect> {
        Some(Rect::new(x, y, 100.0, 40.0))
    }

    /// A (top), B (middle), C (bottom), equally wide
    fn vertical_stack() -> TestHost {
        TestHost::new(vec![(1, rect(0.0, 0.0)), (2, rect(0.0, 100.0)), (3, rect(0.0, 200.0))])
    }

    /// A top-left, B top-right, C bottom-left, D bottom-right
    fn grid_2x2() -> TestHost {
        TestHost::new(vec![
            (1, rect(0.0, 0.0)),
            (2, rect(200.0, 0.0)),
            (3, rect(0.0, 100.0)),
            (4, rect(200.0, 100.0)),
        ])
    }

    #[test]
    fn test_empty_set_is_noop() {
        let mut host = TestHost::new(vec![]);
        navigator().navigate(&mut host, NavDirection::Down);
        assert_eq!(host.focused, None);
        assert!(host.scrolled.is_empty());
    }

    #[test]
    fn test_singleton_set_is_noop_in_all_directions() {
        for dir in [
            NavDirection::Up,
            NavDirection::Down,
            NavDirection::Left,
            NavDirection::Right,
        ] {
            let mut host = TestHost::new(vec![(7, rect(50.0, 50.0))]);
            host.focused = Some(7);
            navigator().navigate(&mut host, dir);
            assert_eq!(host.focused, Some(7));
        }
    }

    #[test]
    fn test_vertical_stack_moves() {
        let mut nav = navigator();

        let mut host = vertical_stack();
        host.focused = Some(2);
        nav.navigate(&mut host, NavDirection::Up);
        assert_eq!(host.focused, Some(1));

        let mut host = vertical_stack();
        host.focused = Some(2);
        nav.navigate(&mut host, NavDirection::Down);
        assert_eq!(host.focused, Some(3));
    }

    #[test]
    fn test_vertical_stack_edges_absorb() {
        let mut nav = navigator();

        let mut host = vertical_stack();
        host.focused = Some(1);
        nav.navigate(&mut host, NavDirection::Up);
        assert_eq!(host.focused, Some(1));

        let mut host = vertical_stack();
        host.focused = Some(3);
        nav.navigate(&mut host, NavDirection::Down);
        assert_eq!(host.focused, Some(3));
    }

    #[test]
    fn test_grid_moves() {
        let mut nav = navigator();

        let mut host = grid_2x2();
        host.focused = Some(1);
        nav.navigate(&mut host, NavDirection::Right);
        assert_eq!(host.focused, Some(2));

        let mut host = grid_2x2();
        host.focused = Some(1);
        nav.navigate(&mut host, NavDirection::Down);
        assert_eq!(host.focused, Some(3));
    }

    #[test]
    fn test_grid_down_then_right_lands_on_d() {
        let mut nav = navigator();
        let mut host = grid_2x2();
        host.focused = Some(1);
        nav.navigate(&mut host, NavDirection::Down);
        nav.navigate(&mut host, NavDirection::Right);
        assert_eq!(host.focused, Some(4));
    }

    #[test]
    fn test_unfocused_falls_back_to_first_candidate() {
        let mut host = vertical_stack();
        // Nothing focused: reference is the first candidate, so Down lands
        // on the middle element
        navigator().navigate(&mut host, NavDirection::Down);
        assert_eq!(host.focused, Some(2));
    }

    #[test]
    fn test_unresolvable_reference_focuses_first() {
        let mut host = TestHost::new(vec![(1, None), (2, rect(0.0, 100.0))]);
        host.focused = Some(1);
        navigator().navigate(&mut host, NavDirection::Down);
        assert_eq!(host.focused, Some(1));
    }

    #[test]
    fn test_winner_is_scrolled_into_view() {
        let mut host = vertical_stack();
        host.focused = Some(1);
        navigator().navigate(&mut host, NavDirection::Down);
        assert_eq!(host.scrolled, vec![2]);
    }

    #[test]
    fn test_activate_with_focus_runs_callback() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let mut nav = navigator().on_select(move || seen.set(seen.get() + 1));

        let mut host = vertical_stack();
        host.focused = Some(2);
        nav.activate_current(&mut host);
        assert_eq!(host.activated, vec![2]);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_activate_without_focus_is_noop() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let mut nav = navigator().on_select(move || seen.set(seen.get() + 1));

        let mut host = vertical_stack();
        nav.activate_current(&mut host);
        assert!(host.activated.is_empty());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_go_back_runs_callback_once_per_call() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let mut nav = navigator().on_back(move || seen.set(seen.get() + 1));

        nav.go_back();
        nav.go_back();
        assert_eq!(count.get(), 2);

        // Without a callback it is still a clean no-op
        navigator().go_back();
    }

    #[test]
    fn test_autofocus_fires_after_deadline() {
        let config = NavConfig {
            autofocus_delay_ms: 0,
            ..NavConfig::default()
        };
        let mut nav = Navigator::new(&config);
        let mut host = vertical_stack();
        nav.tick(&mut host);
        assert_eq!(host.focused, Some(1));
    }

    #[test]
    fn test_autofocus_does_not_fire_early() {
        let config = NavConfig {
            autofocus_delay_ms: 60_000,
            ..NavConfig::default()
        };
        let mut nav = Navigator::new(&config);
        let mut host = vertical_stack();
        nav.tick(&mut host);
        assert_eq!(host.focused, None);
    }

    #[test]
    fn test_autofocus_respects_existing_focus() {
        let config = NavConfig {
            autofocus_delay_ms: 0,
            ..NavConfig::default()
        };
        let mut nav = Navigator::new(&config);
        let mut host = vertical_stack();
        host.focused = Some(3);
        nav.tick(&mut host);
        assert_eq!(host.focused, Some(3));
    }

    #[test]
    fn test_autofocus_is_one_shot() {
        let config = NavConfig {
            autofocus_delay_ms: 0,
            ..NavConfig::default()
        };
        let mut nav = Navigator::new(&config);
        let mut host = vertical_stack();
        nav.tick(&mut host);
        host.focused = None;
        nav.tick(&mut host);
        assert_eq!(host.focused, None);
    }
}
