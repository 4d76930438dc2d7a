pub mod aabb;
pub mod contact;
pub mod response;
pub mod scene;
pub mod spatial_grid;
pub mod sweep;

// Re-export key types
pub use aabb::AABB;
pub use contact::{Contact, SegmentRef};
pub use response::ContactResponse;
pub use scene::{nearest_contact, resolve_sweep, sweep_level, sweep_segments, SweepResult};
pub use spatial_grid::SegmentGrid;
pub use sweep::{sweep_circle_segment, BandSide, HitRegion, SegmentEnd, SweepHit};
