use serde::{Deserialize, Serialize};

use super::LineSegment;
use crate::collision::AABB;
use crate::error::GeometryError;
use crate::math::Vec2;

/// An ordered chain of wall vertices; consecutive pairs form segments.
///
/// A closed polyline also joins its last vertex back to the first, the way a
/// path's close command would.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub vertices: Vec<Vec2>,
    #[serde(default)]
    pub closed: bool,
}

impl Polyline {
    pub fn open(vertices: Vec<Vec2>) -> Self {
        Self { vertices, closed: false }
    }

    pub fn closed(vertices: Vec<Vec2>) -> Self {
        Self { vertices, closed: true }
    }

    /// Checks the ingestion preconditions: at least two vertices, all finite.
    /// `index` is the polyline's position in its level, used for reporting.
    pub fn validate(&self, index: usize) -> Result<(), GeometryError> {
        if self.vertices.len() < 2 {
            return Err(GeometryError::TooFewVertices {
                polyline: index,
                count: self.vertices.len(),
            });
        }
        if let Some(vertex) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFiniteVertex { polyline: index, vertex });
        }
        Ok(())
    }

    pub fn segment_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            2 => 1,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Segments in vertex order, including the closing edge when `closed`.
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let n = self.vertices.len();
        (0..self.segment_count()).map(move |i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            vertices: self.vertices.iter().map(|&v| v * factor).collect(),
            closed: self.closed,
        }
    }

    pub fn aabb(&self) -> Option<AABB> {
        AABB::from_points(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_open_polyline_segments() {
        let line = Polyline::open(square());
        assert_eq!(line.segment_count(), 3);
        let segments: Vec<_> = line.segments().collect();
        assert_eq!(segments[0], LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)));
        assert_eq!(segments[2].b, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_closed_polyline_adds_closing_edge() {
        let line = Polyline::closed(square());
        assert_eq!(line.segment_count(), 4);
        let last = line.segments().last().unwrap();
        assert_eq!(last, LineSegment::new(Vec2::new(0.0, 10.0), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_two_vertex_closed_polyline_is_single_segment() {
        let line = Polyline::closed(vec![Vec2::ZERO, Vec2::new(1.0, 0.0)]);
        assert_eq!(line.segments().count(), 1);
    }

    #[test]
    fn test_validate() {
        assert!(Polyline::open(square()).validate(0).is_ok());
        assert_eq!(
            Polyline::open(vec![Vec2::ZERO]).validate(3),
            Err(GeometryError::TooFewVertices { polyline: 3, count: 1 })
        );
        assert_eq!(
            Polyline::open(vec![Vec2::ZERO, Vec2::new(f64::NAN, 1.0)]).validate(1),
            Err(GeometryError::NonFiniteVertex { polyline: 1, vertex: 1 })
        );
    }

    #[test]
    fn test_scaled_and_bounds() {
        let line = Polyline::open(square()).scaled(4.0);
        assert_eq!(line.vertices[2], Vec2::new(40.0, 40.0));
        let aabb = line.aabb().unwrap();
        assert_eq!(aabb.min, Vec2::ZERO);
        assert_eq!(aabb.max, Vec2::new(40.0, 40.0));
    }
}
