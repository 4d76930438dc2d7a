use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collision::{SegmentRef, AABB};
use crate::error::GeometryError;
use crate::shapes::Polyline;

/// Static level geometry: wall polylines, validated once and never mutated.
///
/// The flattened segment list is built at construction and shared by every
/// sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LevelDef", into = "LevelDef")]
pub struct Level {
    polylines: Vec<Polyline>,
    segments: Vec<SegmentRef>,
}

/// Wire form of a [`Level`], as handed over by a geometry loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub polylines: Vec<Polyline>,
}

impl Level {
    /// Validates `polylines` and flattens them into segments.
    pub fn new(polylines: Vec<Polyline>) -> Result<Self, GeometryError> {
        for (index, polyline) in polylines.iter().enumerate() {
            polyline.validate(index)?;
        }
        let segments: Vec<SegmentRef> = polylines
            .iter()
            .enumerate()
            .flat_map(|(p, polyline)| {
                polyline.segments().enumerate().map(move |(index, segment)| SegmentRef {
                    polyline: p,
                    index,
                    segment,
                })
            })
            .collect();
        debug!(polylines = polylines.len(), segments = segments.len(), "level loaded");
        Ok(Self { polylines, segments })
    }

    pub fn empty() -> Self {
        Self { polylines: Vec::new(), segments: Vec::new() }
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    /// Every wall segment, polyline by polyline, in vertex order.
    pub fn segments(&self) -> &[SegmentRef] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The same level with every vertex multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Result<Self, GeometryError> {
        Self::new(self.polylines.iter().map(|p| p.scaled(factor)).collect())
    }

    pub fn aabb(&self) -> Option<AABB> {
        self.polylines
            .iter()
            .filter_map(Polyline::aabb)
            .reduce(|mut acc, b| {
                acc.merge(&b);
                acc
            })
    }
}

impl TryFrom<LevelDef> for Level {
    type Error = GeometryError;

    fn try_from(def: LevelDef) -> Result<Self, Self::Error> {
        Level::new(def.polylines)
    }
}

impl From<Level> for LevelDef {
    fn from(level: Level) -> Self {
        LevelDef { polylines: level.polylines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn zigzag() -> Polyline {
        Polyline::open(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(20.0, 0.0),
        ])
    }

    #[test]
    fn test_level_flattens_segments() {
        let level = Level::new(vec![zigzag(), Polyline::closed(vec![
            Vec2::new(0.0, 20.0),
            Vec2::new(5.0, 20.0),
            Vec2::new(5.0, 25.0),
        ])])
        .unwrap();

        assert_eq!(level.segment_count(), 5);
        let refs: Vec<(usize, usize)> = level.segments().iter().map(|s| (s.polyline, s.index)).collect();
        assert_eq!(refs, vec![(0, 0), (0, 1), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(level.segments()[4].segment.b, Vec2::new(0.0, 20.0));
    }

    #[test]
    fn test_level_rejects_short_polyline() {
        let err = Level::new(vec![zigzag(), Polyline::open(vec![Vec2::ZERO])]).unwrap_err();
        assert_eq!(err, GeometryError::TooFewVertices { polyline: 1, count: 1 });
    }

    #[test]
    fn test_level_scaled() {
        let level = Level::new(vec![zigzag()]).unwrap().scaled(4.0).unwrap();
        assert_eq!(level.polylines()[0].vertices[1], Vec2::new(40.0, 40.0));
        assert_eq!(level.segments()[1].segment.a, Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_level_bounds() {
        let level = Level::new(vec![zigzag()]).unwrap();
        let aabb = level.aabb().unwrap();
        assert_eq!(aabb.min, Vec2::new(0.0, 0.0));
        assert_eq!(aabb.max, Vec2::new(20.0, 10.0));
        assert!(Level::empty().aabb().is_none());
    }
}
