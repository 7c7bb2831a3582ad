pub mod operations;
pub mod pipelines;
pub mod pure;
pub mod types;

// Re-exports
pub use pipelines::Navigator;
pub use types::{FocusHost, NavDirection, NavInput, Rect};
