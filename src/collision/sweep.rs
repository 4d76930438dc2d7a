//! Continuous collision of a moving circle against a static segment.
//!
//! The circle's center travels `c0 + t * (c1 - c0)` for `t` in `[0, 1]`. The
//! set of centers touching the segment is a capsule: a band of half-width
//! `radius` around the segment, plus a disk of that radius at each end. Each of
//! the three regions is solved on its own and the earliest hit wins.

use crate::math::{Vec2, EPSILON};
use crate::shapes::line_segment::clamp_parameter;

/// Which offset line of the band was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandSide {
    /// The side the segment's left-hand perpendicular points to.
    Positive,
    Negative,
}

impl BandSide {
    fn sign(self) -> f64 {
        match self {
            BandSide::Positive => 1.0,
            BandSide::Negative => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentEnd {
    Start,
    End,
}

/// Part of the capsule where the impact happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Band { side: BandSide },
    Cap { end: SegmentEnd },
}

/// Earliest impact of a swept circle on a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Time of impact in `[0, 1]`.
    pub t: f64,
    /// Contact point on the segment (the endpoint itself for a cap hit).
    pub point: Vec2,
    /// Unit normal from the obstacle towards the circle's center at impact.
    /// Zero only when the center sits exactly on an endpoint.
    pub normal: Vec2,
    pub region: HitRegion,
}

/// Sweeps a circle of `radius` from `c0` to `c1` against the segment `[s0, s1]`.
///
/// Returns the hit with the smallest time of impact, or `None` when the path
/// never touches the capsule. Ties keep the first region evaluated (band,
/// then the `s0` cap, then the `s1` cap).
pub fn sweep_circle_segment(c0: Vec2, c1: Vec2, radius: f64, s0: Vec2, s1: Vec2) -> Option<SweepHit> {
    let v = c1 - c0;
    band_hits(c0, v, radius, s0, s1)
        .into_iter()
        .chain(cap_hits(c0, v, radius, s0, SegmentEnd::Start))
        .chain(cap_hits(c0, v, radius, s1, SegmentEnd::End))
        .flatten()
        .min_by(|a, b| a.t.total_cmp(&b.t))
}

/// Hits against the two offset lines at `±radius` from the segment.
///
/// The signed distance to the segment's line is linear in `t`, so each side
/// has at most one root. A root only counts if the center then projects onto
/// the segment; otherwise it belongs to a cap.
fn band_hits(c0: Vec2, v: Vec2, radius: f64, s0: Vec2, s1: Vec2) -> [Option<SweepHit>; 2] {
    let s = s1 - s0;
    let len = s.magnitude();
    if len <= EPSILON {
        return [None, None];
    }
    let u = s / len;
    let n = u.perpendicular();

    let f0 = (c0 - s0).dot(n);
    let fv = v.dot(n);

    let project = |center: Vec2| -> Option<Vec2> {
        let lambda = (center - s0).dot(u);
        if lambda >= -EPSILON && lambda <= len + EPSILON {
            Some(s0 + u * lambda.clamp(0.0, len))
        } else {
            None
        }
    };

    if fv.abs() <= EPSILON {
        // Motion parallel to the segment: the distance never changes, so the
        // only possible hit is an existing one at t = 0.
        if f0.abs() > radius + EPSILON {
            return [None, None];
        }
        let side = if f0 >= 0.0 { BandSide::Positive } else { BandSide::Negative };
        let hit = project(c0).map(|point| SweepHit {
            t: 0.0,
            point,
            normal: n * side.sign(),
            region: HitRegion::Band { side },
        });
        return [hit, None];
    }

    [BandSide::Positive, BandSide::Negative].map(|side| {
        let t = clamp_parameter((side.sign() * radius - f0) / fv)?;
        let point = project(c0 + v * t)?;
        Some(SweepHit {
            t,
            point,
            normal: n * side.sign(),
            region: HitRegion::Band { side },
        })
    })
}

/// Hits against the disk of `radius` around one endpoint.
///
/// Solves `|c0 + t v - cap|^2 = r^2`; both roots inside the sweep are kept.
fn cap_hits(c0: Vec2, v: Vec2, radius: f64, cap: Vec2, end: SegmentEnd) -> [Option<SweepHit>; 2] {
    let m = c0 - cap;
    let a = v.dot(v);
    let b = 2.0 * m.dot(v);
    let c = m.dot(m) - radius * radius;

    let hit_at = |t: f64| SweepHit {
        t,
        point: cap,
        normal: (c0 + v * t - cap).normalize_safe(),
        region: HitRegion::Cap { end },
    };

    if a <= EPSILON {
        // Barely moving: a static overlap test.
        return if c <= EPSILON { [Some(hit_at(0.0)), None] } else { [None, None] };
    }

    let disc = b * b - 4.0 * a * c;
    if disc < -EPSILON {
        return [None, None];
    }
    let sqrt_disc = disc.max(0.0).sqrt();
    let inv_2a = 0.5 / a;
    let t0 = (-b - sqrt_disc) * inv_2a;
    let t1 = (-b + sqrt_disc) * inv_2a;

    [clamp_parameter(t0).map(hit_at), clamp_parameter(t1).map(hit_at)]
}
