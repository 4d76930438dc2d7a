pub mod angle;
pub mod vec2;

pub use angle::{degrees, normalize_degrees, radians, shortest_arc_degrees};
pub use vec2::Vec2;

/// Tolerance for distances, squared lengths, discriminants and times of impact.
pub const EPSILON: f64 = 1e-6;

/// Absolute tolerance for "point lies on circle" tests.
pub const POINT_TOLERANCE: f64 = 1e-5;
