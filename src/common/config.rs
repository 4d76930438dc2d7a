//! Tunable parameters of the simulation.

use serde::{Deserialize, Serialize};

use crate::collision::ContactResponse;

/// Parameters of a [`PhysicsWorld`](crate::world::PhysicsWorld).
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// `k` in the quadratic drag `-k |v| v` (0 disables drag).
    pub drag_coefficient: f64,
    /// Distance the body is pushed out along the contact normal after a hit,
    /// so the next tick does not start in contact.
    pub contact_margin: f64,
    /// Maximum steering rate in degrees per second.
    pub max_turn_rate_deg: f64,
    pub thrust_min: f64,
    pub thrust_max: f64,
    pub response: ContactResponse,
    /// Cell size of the segment grid. `None` sweeps every segment.
    pub broad_phase_cell_size: Option<f64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            drag_coefficient: 0.02,
            contact_margin: 0.5,
            max_turn_rate_deg: 360.0,
            thrust_min: 0.0,
            thrust_max: 10000.0,
            response: ContactResponse::None,
            broad_phase_cell_size: None,
        }
    }
}
