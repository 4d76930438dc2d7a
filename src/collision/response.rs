//! What happens to the body's velocity after its position was clamped at a contact.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Velocity policy applied after a contact.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactResponse {
    /// Leave the velocity untouched; only the position is corrected.
    #[default]
    None,
    /// Reflect about the contact normal and scale by `restitution`.
    Bounce { restitution: f64 },
    /// Drop the velocity component along the normal.
    Slide,
}

impl ContactResponse {
    /// Returns the velocity after a contact with unit `normal`.
    pub fn apply(&self, velocity: Vec2, normal: Vec2) -> Vec2 {
        match *self {
            ContactResponse::None => velocity,
            ContactResponse::Bounce { restitution } => velocity.reflect(normal) * restitution,
            ContactResponse::Slide => velocity - normal * velocity.dot(normal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_none_keeps_velocity() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(ContactResponse::None.apply(v, Vec2::new(0.0, 1.0)), v);
    }

    #[test]
    fn test_bounce_reflects_and_damps() {
        let v = Vec2::new(3.0, -4.0);
        let out = ContactResponse::Bounce { restitution: 0.8 }.apply(v, Vec2::new(0.0, 1.0));
        assert!((out - Vec2::new(2.4, 3.2)).magnitude() < EPSILON);
    }

    #[test]
    fn test_slide_removes_normal_component() {
        let v = Vec2::new(3.0, -4.0);
        let out = ContactResponse::Slide.apply(v, Vec2::new(0.0, 1.0));
        assert!((out - Vec2::new(3.0, 0.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_zero_normal_is_harmless() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(ContactResponse::Slide.apply(v, Vec2::ZERO), v);
        assert_eq!(ContactResponse::Bounce { restitution: 1.0 }.apply(v, Vec2::ZERO), v);
    }
}
