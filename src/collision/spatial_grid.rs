// A uniform grid over the level's wall segments, used as an optional broad phase
// for the swept-circle test.

use tracing::debug;

use super::contact::SegmentRef;
use crate::collision::AABB;
use crate::error::GeometryError;
use crate::math::{Vec2, EPSILON};

/// Extra padding on the query box, relative to the sweep length, so hits the
/// solver accepts within its time tolerance are never culled.
const QUERY_SLOP: f64 = 1e-3;

/// Upper bound on the number of cells. Finer requests are coarsened.
pub const MAX_GRID_CELLS: usize = 1 << 20;

#[derive(Debug, Default, Clone)]
struct GridCell {
    segment_indices: Vec<usize>,
}

/// Buckets segment indices by the cells their bounding boxes touch.
///
/// Queries return candidates in ascending index order, so sweeping them gives
/// the same contacts, in the same order, as sweeping every segment.
#[derive(Debug, Clone)]
pub struct SegmentGrid {
    bounds: AABB,
    inv_cell_size: f64,
    num_cols: usize,
    num_rows: usize,
    cells: Vec<GridCell>,
    segment_bounds: Vec<AABB>,
}

impl SegmentGrid {
    /// Builds a grid covering every segment in `segments` with square cells of
    /// `cell_size` world units.
    ///
    /// The cell size is doubled until the grid fits in [`MAX_GRID_CELLS`].
    /// Fails if `cell_size` is not positive and finite, or if the level is too
    /// large to grid at all.
    pub fn new(segments: &[SegmentRef], cell_size: f64) -> Result<Self, GeometryError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GeometryError::InvalidCellSize(cell_size));
        }
        let segment_bounds: Vec<AABB> = segments
            .iter()
            .map(|s| AABB::new(s.segment.a, s.segment.b))
            .collect();
        let bounds = segment_bounds
            .iter()
            .copied()
            .reduce(|mut acc, b| {
                acc.merge(&b);
                acc
            })
            .unwrap_or_else(|| AABB::new(Vec2::ZERO, Vec2::ZERO));

        let width = bounds.max.x - bounds.min.x;
        let height = bounds.max.y - bounds.min.y;
        let cells_along = |extent: f64, size: f64| (extent / size).ceil().max(1.0);

        let mut effective_size = cell_size;
        while cells_along(width, effective_size) * cells_along(height, effective_size)
            > MAX_GRID_CELLS as f64
        {
            effective_size *= 2.0;
            if !effective_size.is_finite() {
                return Err(GeometryError::InvalidCellSize(cell_size));
            }
        }

        let inv_cell_size = 1.0 / effective_size;
        let num_cols = cells_along(width, effective_size) as usize;
        let num_rows = cells_along(height, effective_size) as usize;
        debug!(
            ?bounds,
            cell_size,
            effective_size,
            num_cols,
            num_rows,
            segments = segments.len(),
            "building segment grid"
        );

        let mut grid = SegmentGrid {
            bounds,
            inv_cell_size,
            num_cols,
            num_rows,
            cells: vec![GridCell::default(); num_cols * num_rows],
            segment_bounds,
        };
        for index in 0..grid.segment_bounds.len() {
            let aabb = grid.segment_bounds[index];
            grid.insert(index, &aabb);
        }
        Ok(grid)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.num_cols, self.num_rows)
    }

    #[inline]
    fn cell_coords(&self, point: Vec2) -> (isize, isize) {
        let col = ((point.x - self.bounds.min.x) * self.inv_cell_size).floor() as isize;
        let row = ((point.y - self.bounds.min.y) * self.inv_cell_size).floor() as isize;
        (col, row)
    }

    /// Inclusive cell range touched by `aabb`, clamped onto the grid.
    fn cell_range(&self, aabb: &AABB) -> (usize, usize, usize, usize) {
        let (min_col, min_row) = self.cell_coords(aabb.min);
        let (max_col, max_row) = self.cell_coords(aabb.max);
        let clamp_col = |c: isize| c.clamp(0, self.num_cols as isize - 1) as usize;
        let clamp_row = |r: isize| r.clamp(0, self.num_rows as isize - 1) as usize;
        (clamp_col(min_col), clamp_row(min_row), clamp_col(max_col), clamp_row(max_row))
    }

    fn insert(&mut self, segment_index: usize, aabb: &AABB) {
        let (min_col, min_row, max_col, max_row) = self.cell_range(aabb);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                self.cells[col + row * self.num_cols].segment_indices.push(segment_index);
            }
        }
    }

    /// Indices of segments whose bounds touch `aabb`, ascending and unique.
    pub fn query(&self, aabb: &AABB) -> Vec<usize> {
        let (min_col, min_row, max_col, max_row) = self.cell_range(aabb);
        let mut found = Vec::new();
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                found.extend(
                    self.cells[col + row * self.num_cols]
                        .segment_indices
                        .iter()
                        .copied()
                        .filter(|&i| self.segment_bounds[i].overlaps(aabb)),
                );
            }
        }
        found.sort_unstable();
        found.dedup();
        found
    }

    /// Candidate segments for a circle of `radius` swept from `c0` to `c1`.
    ///
    /// The cap test accepts a discriminant down to `-EPSILON`, which lets a
    /// slow sweep touch an endpoint from up to `sqrt(r^2 + EPSILON / 4|v|^2)`
    /// away. The margin covers that reach.
    pub fn query_sweep(&self, c0: Vec2, c1: Vec2, radius: f64) -> Vec<usize> {
        let v = c1 - c0;
        let reach = (radius * radius + EPSILON / (4.0 * v.magnitude_squared().max(EPSILON))).sqrt();
        let margin = reach + QUERY_SLOP * (1.0 + v.magnitude());
        self.query(&AABB::new(c0, c1).inflate(margin))
    }
}
