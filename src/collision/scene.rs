//! Brute-force sweep of a moving circle against every wall of a level.

use tracing::trace;

use super::contact::{Contact, SegmentRef};
use super::sweep::sweep_circle_segment;
use crate::math::Vec2;
use crate::world::Level;

/// Every contact of one sweep plus the one chosen to resolve it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepResult {
    pub contacts: Vec<Contact>,
    pub nearest: Option<Contact>,
}

impl SweepResult {
    pub fn is_blocked(&self) -> bool {
        self.nearest.is_some()
    }
}

/// Sweeps the circle against each segment in `segments`, in order, keeping
/// every hit.
pub fn sweep_segments<I>(c0: Vec2, c1: Vec2, radius: f64, segments: I) -> Vec<Contact>
where
    I: IntoIterator<Item = SegmentRef>,
{
    segments
        .into_iter()
        .filter_map(|seg| {
            let hit = sweep_circle_segment(c0, c1, radius, seg.segment.a, seg.segment.b)?;
            trace!(
                polyline = seg.polyline,
                segment = seg.index,
                t = hit.t,
                "swept circle touches wall"
            );
            Some(Contact::from_hit(hit, c0, c1, seg))
        })
        .collect()
}

/// Sweeps the circle against all segments of `level`.
pub fn sweep_level(c0: Vec2, c1: Vec2, radius: f64, level: &Level) -> Vec<Contact> {
    sweep_segments(c0, c1, radius, level.segments().iter().copied())
}

/// The contact whose corrected position is closest to `c0`. On a straight
/// sweep this is the earliest one. The first of several equal candidates wins.
pub fn nearest_contact(c0: Vec2, contacts: &[Contact]) -> Option<&Contact> {
    contacts.iter().fold(None, |best: Option<&Contact>, contact| match best {
        Some(b) if b.position.distance_squared(c0) <= contact.position.distance_squared(c0) => Some(b),
        _ => Some(contact),
    })
}

/// Collects contacts and picks the nearest in one call.
pub fn resolve_sweep(c0: Vec2, c1: Vec2, radius: f64, segments: impl IntoIterator<Item = SegmentRef>) -> SweepResult {
    let contacts = sweep_segments(c0, c1, radius, segments);
    let nearest = nearest_contact(c0, &contacts).copied();
    SweepResult { contacts, nearest }
}
