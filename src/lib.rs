//! Continuous collision detection for a circular body moving through static
//! polyline walls, with a small thrust-and-drag integrator around it.

pub mod collision;
pub mod common;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{Contact, ContactResponse, SweepHit};
pub use common::WorldConfig;
pub use error::{GeometryError, StepError};
pub use math::Vec2;
pub use objects::{Body, ThrustCommand};
pub use shapes::{Circle, LineSegment, Polyline};
pub use world::{Level, PhysicsWorld, TickInput, TickOutput};
