use serde::{Deserialize, Serialize};

use super::Circle;
use crate::math::{Vec2, EPSILON, POINT_TOLERANCE};

/// A static wall edge from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub a: Vec2,
    pub b: Vec2,
}

/// Points where a circle's boundary crosses a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection {
    None,
    One(Vec2),
    Two(Vec2, Vec2),
}

impl CircleIntersection {
    pub fn count(&self) -> usize {
        match self {
            CircleIntersection::None => 0,
            CircleIntersection::One(_) => 1,
            CircleIntersection::Two(_, _) => 2,
        }
    }

    pub fn points(&self) -> Vec<Vec2> {
        match *self {
            CircleIntersection::None => Vec::new(),
            CircleIntersection::One(p) => vec![p],
            CircleIntersection::Two(p, q) => vec![p, q],
        }
    }
}

impl LineSegment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    pub fn length_squared(&self) -> f64 {
        self.a.distance_squared(self.b)
    }

    /// Direction vector from `a` to `b` (not normalized).
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    pub fn is_degenerate(&self) -> bool {
        self.length_squared() <= EPSILON
    }

    /// Point at parameter `t`, where `t = 0` is `a` and `t = 1` is `b`.
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.a + self.direction() * t
    }

    /// Closest point on the segment to `point` and its clamped parameter.
    pub fn closest_point(&self, point: Vec2) -> (Vec2, f64) {
        let d = self.direction();
        let length_sq = d.magnitude_squared();
        if length_sq <= EPSILON {
            return (self.a, 0.0);
        }
        let t = ((point - self.a).dot(d) / length_sq).clamp(0.0, 1.0);
        (self.point_at(t), t)
    }

    /// Static circle test: where does the circle's boundary cross `[a, b]`?
    ///
    /// Solves `|a + t(b - a) - c|^2 = r^2`. Roots within `EPSILON` outside
    /// `[0, 1]` are clamped back onto the segment, and a double root is
    /// reported once.
    pub fn intersect_circle(&self, circle: &Circle) -> CircleIntersection {
        let d = self.direction();
        let a = d.magnitude_squared();
        if a <= EPSILON {
            let dist = self.a.distance(circle.center);
            return if (dist - circle.radius).abs() <= POINT_TOLERANCE {
                CircleIntersection::One(self.a)
            } else {
                CircleIntersection::None
            };
        }

        let f = self.a - circle.center;
        let b = 2.0 * f.dot(d);
        let c = f.magnitude_squared() - circle.radius * circle.radius;
        let disc = b * b - 4.0 * a * c;

        if disc < -EPSILON {
            return CircleIntersection::None;
        }

        if disc.abs() <= EPSILON {
            let t = -b / (2.0 * a);
            return match clamp_parameter(t) {
                Some(t) => CircleIntersection::One(self.point_at(t)),
                None => CircleIntersection::None,
            };
        }

        let sqrt_disc = disc.sqrt();
        let inv_2a = 0.5 / a;
        let t0 = (-b - sqrt_disc) * inv_2a;
        let t1 = (-b + sqrt_disc) * inv_2a;
        let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };

        let first = clamp_parameter(t0).map(|t| self.point_at(t));
        let second = clamp_parameter(t1).map(|t| self.point_at(t));
        match (first, second) {
            (Some(p), Some(q)) if p.distance_squared(q) > EPSILON * EPSILON => {
                CircleIntersection::Two(p, q)
            }
            (Some(p), _) | (None, Some(p)) => CircleIntersection::One(p),
            (None, None) => CircleIntersection::None,
        }
    }
}

/// Accepts `t` within `EPSILON` of `[0, 1]` and clamps it into range.
pub(crate) fn clamp_parameter(t: f64) -> Option<f64> {
    if (-EPSILON..=1.0 + EPSILON).contains(&t) {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}
