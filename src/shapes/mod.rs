pub mod circle;
pub mod line_segment;
pub mod polyline;

pub use circle::Circle;
pub use line_segment::{CircleIntersection, LineSegment};
pub use polyline::Polyline;
