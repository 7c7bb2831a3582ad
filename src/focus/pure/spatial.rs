// Spatial nearest-neighbor selection for directional focus moves
//
// Pure functions over synthetic geometry; nothing here touches the UI
// toolkit, so the heuristic is testable with plain rectangles.

use crate::focus::types::{NavDirection, Rect};

/// Tunable bias for the spatial heuristic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialTuning {
    /// Minimum center offset along the primary axis for a candidate to count
    /// as a move in that direction. Prevents jitter between near-co-linear
    /// elements.
    pub deadzone_px: f32,
    /// Weight applied to the perpendicular-axis offset when scoring. Below
    /// 1.0 prefers straight-line moves over diagonal jumps while still
    /// allowing a diagonal pick when no straight candidate exists.
    pub cross_axis_weight: f32,
}

impl Default for SpatialTuning {
    fn default() -> Self {
        Self {
            deadzone_px: 10.0,
            cross_axis_weight: 0.5,
        }
    }
}

/// Check whether a candidate center lies beyond the deadzone from the
/// reference center in the given direction
pub fn is_valid_move(
    reference: (f32, f32),
    candidate: (f32, f32),
    direction: NavDirection,
    deadzone_px: f32,
) -> bool {
    match direction {
        NavDirection::Up => candidate.1 < reference.1 - deadzone_px,
        NavDirection::Down => candidate.1 > reference.1 + deadzone_px,
        NavDirection::Left => candidate.0 < reference.0 - deadzone_px,
        NavDirection::Right => candidate.0 > reference.0 + deadzone_px,
    }
}

/// Direction-weighted distance between two centers. Lower is better.
pub fn spatial_score(
    reference: (f32, f32),
    candidate: (f32, f32),
    direction: NavDirection,
    cross_axis_weight: f32,
) -> f32 {
    let dx = (candidate.0 - reference.0).abs();
    let dy = (candidate.1 - reference.1).abs();

    match direction {
        NavDirection::Up | NavDirection::Down => dy + dx * cross_axis_weight,
        NavDirection::Left | NavDirection::Right => dx + dy * cross_axis_weight,
    }
}

/// Pick the best candidate for a move in `direction` from `reference`.
///
/// Candidates that fail the deadzone check are ignored (the reference's own
/// rect, if present in the slice, always fails it). Returns the index of the
/// lowest-scoring valid candidate; ties go to the first candidate in
/// discovery order. `None` means the move is absorbed: no wrap-around.
pub fn pick_target(
    reference: Rect,
    candidates: &[Rect],
    direction: NavDirection,
    tuning: SpatialTuning,
) -> Option<usize> {
    let from = reference.center();
    let mut best: Option<(usize, f32)> = None;

    for (idx, rect) in candidates.iter().enumerate() {
        let to = rect.center();
        if !is_valid_move(from, to, direction, tuning.deadzone_px) {
            continue;
        }

        let score = spatial_score(from, to, direction, tuning.cross_axis_weight);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    best.map(|(idx, _)| idx)
}
