//! Spatial D-pad focus navigation for egui apps.
//!
//! Pointer-free devices (TV remotes, gamepads, keyboards used as D-pads) emit
//! four directional signals plus select/back. Mapping those onto an
//! arbitrarily laid-out 2D interface needs a geometric nearest-neighbor
//! heuristic rather than a fixed tab order, because visual layout (grids,
//! carousels) rarely matches source order.
//!
//! The heuristic lives in [`focus::pure`] and works on plain rectangles; the
//! [`focus::types::FocusHost`] trait injects the host toolkit, and
//! [`focus::operations::FocusRegistry`] is the shipped egui implementation.
//! [`Navigator`] ties them together per mounted view.

pub mod config;
pub mod focus;

// Re-exports
pub use config::NavConfig;
pub use focus::{FocusHost, NavDirection, NavInput, Navigator, Rect};
