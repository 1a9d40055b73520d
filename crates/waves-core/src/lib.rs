//! Core simulation for the waves background: a seeded coherent-noise field
//! and the point-grid physics that bends a field of vertical polylines
//! toward the pointer. Platform-free; the web front-end supplies container
//! geometry, pointer positions, and frame timestamps, and reads back one
//! serialized polyline path per grid line.

pub mod constants;
pub mod grid;
pub mod lifecycle;
pub mod noise;

pub use grid::{Bounds, CursorState, GridParams, PointState, WaveGrid};
pub use lifecycle::Lifecycle;
pub use noise::NoiseField;
