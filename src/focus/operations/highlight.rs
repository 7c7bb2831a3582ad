// Focus ring rendering (egui-dependent)
//
// Custom widgets like cards do not get egui's native focus outline, so the
// demo and host apps draw this ring around whichever rect holds D-pad focus.

use eframe::egui::{Color32, Rect, Stroke, StrokeKind, Ui};

/// Focus ring styling
pub struct FocusRingStyle {
    pub stroke_width: f32,
    pub color: Color32,
    pub corner_radius: f32,
    pub padding: f32,
}

impl Default for FocusRingStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            color: Color32::from_rgb(120, 190, 255),
            corner_radius: 4.0,
            padding: 2.0,
        }
    }
}

/// Draw a focus ring around a rectangle
pub fn draw_focus_ring(ui: &Ui, rect: Rect) {
    draw_focus_ring_styled(ui, rect, &FocusRingStyle::default());
}

/// Draw a focus ring with custom styling
pub fn draw_focus_ring_styled(ui: &Ui, rect: Rect, style: &FocusRingStyle) {
    let expanded = rect.expand(style.padding);
    ui.painter().rect_stroke(
        expanded,
        style.corner_radius as u8,
        Stroke::new(style.stroke_width, style.color),
        StrokeKind::Outside,
    );
}

/// Draw a focus ring around a rect only when it holds focus
pub fn draw_focus_ring_if_focused(ui: &Ui, rect: Rect, is_focused: bool) {
    if is_focused {
        draw_focus_ring(ui, rect);
    }
}
