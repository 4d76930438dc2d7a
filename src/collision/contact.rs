use serde::{Deserialize, Serialize};

use super::sweep::{HitRegion, SweepHit};
use crate::math::Vec2;
use crate::shapes::LineSegment;

/// Identifies one wall edge inside a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentRef {
    /// Index of the polyline in the level.
    pub polyline: usize,
    /// Index of the segment within that polyline.
    pub index: usize,
    pub segment: LineSegment,
}

/// One swept-circle impact, produced per tick and consumed by contact selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Contact point on the wall.
    pub point: Vec2,
    /// Unit normal from the wall towards the circle.
    pub normal: Vec2,
    /// Circle center at the time of impact, `c0 + (c1 - c0) * t`.
    pub position: Vec2,
    /// Time of impact in `[0, 1]`.
    pub t: f64,
    pub region: HitRegion,
    /// The wall edge that was hit.
    pub segment: SegmentRef,
}

impl Contact {
    pub fn from_hit(hit: SweepHit, c0: Vec2, c1: Vec2, segment: SegmentRef) -> Self {
        Self {
            point: hit.point,
            normal: hit.normal,
            position: c0 + (c1 - c0) * hit.t,
            t: hit.t,
            region: hit.region,
            segment,
        }
    }
}
