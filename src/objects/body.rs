use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::math::Vec2;
use crate::shapes::Circle;

/// Thrust adjustment requested by the controller for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThrustCommand {
    /// Double the thrust; a stopped engine restarts at 1.
    Increase,
    /// Halve the thrust; anything at or below 1 cuts the engine.
    Decrease,
    Set(f64),
}

/// The moving circular body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing angle in radians.
    pub angle: f64,
    /// Acceleration magnitude along the facing direction.
    pub thrust: f64,
    pub radius: f64,
}

impl Body {
    /// A body at rest facing +x with the engine off.
    pub fn new(position: Vec2, radius: f64) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            angle: 0.0,
            thrust: 0.0,
            radius,
        }
    }

    /// Unit vector along the facing angle.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// The body's collision shape, validated.
    pub fn circle(&self) -> Result<Circle, GeometryError> {
        Circle::try_new(self.position, self.radius)
    }

    /// Applies `command` and clamps the result into `[min, max]`.
    pub fn apply_thrust_command(&mut self, command: ThrustCommand, min: f64, max: f64) {
        let thrust = match command {
            ThrustCommand::Increase => {
                let doubled = self.thrust * 2.0;
                if doubled == 0.0 {
                    1.0
                } else {
                    doubled
                }
            }
            ThrustCommand::Decrease => {
                let halved = self.thrust * 0.5;
                if halved <= 1.0 {
                    0.0
                } else {
                    halved
                }
            }
            ThrustCommand::Set(value) => value,
        };
        self.thrust = thrust.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_body_new_is_at_rest() {
        let body = Body::new(Vec2::new(1.0, 2.0), 6.0);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.thrust, 0.0);
        assert_eq!(body.speed(), 0.0);
        assert_eq!(body.circle().unwrap().radius, 6.0);
    }

    #[test]
    fn test_body_direction() {
        let mut body = Body::new(Vec2::ZERO, 1.0);
        body.angle = PI / 2.0;
        assert!((body.direction() - Vec2::new(0.0, 1.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_invalid_radius_is_rejected() {
        assert_eq!(
            Body::new(Vec2::ZERO, -2.0).circle(),
            Err(GeometryError::InvalidRadius(-2.0))
        );
    }

    #[test]
    fn test_thrust_increase_and_decrease() {
        let mut body = Body::new(Vec2::ZERO, 1.0);
        body.apply_thrust_command(ThrustCommand::Increase, 0.0, 10000.0);
        assert_eq!(body.thrust, 1.0);
        body.apply_thrust_command(ThrustCommand::Increase, 0.0, 10000.0);
        assert_eq!(body.thrust, 2.0);
        body.apply_thrust_command(ThrustCommand::Decrease, 0.0, 10000.0);
        assert_eq!(body.thrust, 0.0);

        body.thrust = 40.0;
        body.apply_thrust_command(ThrustCommand::Decrease, 0.0, 10000.0);
        assert_eq!(body.thrust, 20.0);
    }

    #[test]
    fn test_thrust_is_clamped() {
        let mut body = Body::new(Vec2::ZERO, 1.0);
        body.thrust = 8000.0;
        body.apply_thrust_command(ThrustCommand::Increase, 0.0, 10000.0);
        assert_eq!(body.thrust, 10000.0);
        body.apply_thrust_command(ThrustCommand::Set(-5.0), 0.0, 10000.0);
        assert_eq!(body.thrust, 0.0);
    }
}
