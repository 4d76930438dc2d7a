use crate::error::GeometryError;
use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    /// Panics unless the radius is positive. Use [`Circle::try_new`] for
    /// untrusted input.
    pub fn new(center: Vec2, radius: f64) -> Self {
        assert!(radius > 0.0, "Circle radius must be positive");
        Self { center, radius }
    }

    pub fn try_new(center: Vec2, radius: f64) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}
