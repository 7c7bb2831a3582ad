pub mod spatial;

// Re-exports
pub use spatial::{SpatialTuning, is_valid_move, pick_target, spatial_score};
