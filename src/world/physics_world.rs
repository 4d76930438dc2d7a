use tracing::debug;

use crate::{
    collision::{resolve_sweep, Contact, SegmentGrid, SweepResult},
    common::WorldConfig,
    error::{GeometryError, StepError},
    integration::integrator,
    math::Vec2,
    objects::{Body, ThrustCommand},
    world::Level,
};

/// Controller input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// Seconds since the previous tick.
    pub dt: f64,
    /// Desired heading in degrees; `None` holds the current heading.
    pub target_angle_deg: Option<f64>,
    pub thrust: Option<ThrustCommand>,
}

impl TickInput {
    pub fn coast(dt: f64) -> Self {
        Self { dt, ..Self::default() }
    }
}

/// Body state after a tick, plus the contacts found along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing angle in radians.
    pub angle: f64,
    /// Every contact detected this tick, in level order.
    pub contacts: Vec<Contact>,
    /// The contact used to correct the position, if any.
    pub resolved: Option<Contact>,
}

/// Owns the level, the moving body and the tuning for one simulation.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    level: Level,
    pub body: Body,
    pub config: WorldConfig,
    grid: Option<SegmentGrid>,
    // Contacts detected during the last step
    contacts: Vec<Contact>,
}

impl PhysicsWorld {
    /// Creates a world after checking the body's radius and the broad phase
    /// cell size.
    pub fn new(level: Level, body: Body, config: WorldConfig) -> Result<Self, GeometryError> {
        body.circle()?;
        let grid = config
            .broad_phase_cell_size
            .map(|cell_size| SegmentGrid::new(level.segments(), cell_size))
            .transpose()?;
        Ok(Self {
            level,
            body,
            config,
            grid,
            contacts: Vec::new(),
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Contacts detected during the last step.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Sweeps the body's circle from `c0` to `c1` against the level.
    pub fn sweep(&self, c0: Vec2, c1: Vec2) -> SweepResult {
        let radius = self.body.radius;
        let segments = self.level.segments();
        match &self.grid {
            Some(grid) => resolve_sweep(
                c0,
                c1,
                radius,
                grid.query_sweep(c0, c1, radius).into_iter().map(|i| segments[i]),
            ),
            None => resolve_sweep(c0, c1, radius, segments.iter().copied()),
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Steers, applies the thrust command, integrates, then sweeps from the
    /// old to the tentative position. On contact the body stops at the
    /// nearest impact, pushed out by `contact_margin` along the normal, and
    /// the configured response adjusts its velocity. A zero `dt` changes
    /// nothing.
    ///
    /// `body` is public, so its radius is checked again on every tick.
    pub fn step(&mut self, input: TickInput) -> Result<TickOutput, StepError> {
        let dt = input.dt;
        if !dt.is_finite() || dt < 0.0 {
            return Err(StepError::InvalidTimeStep(dt));
        }
        self.body.circle()?;
        if dt == 0.0 {
            self.contacts.clear();
            return Ok(self.output(None));
        }

        if let Some(target) = input.target_angle_deg {
            integrator::steer(&mut self.body, target, self.config.max_turn_rate_deg, dt);
        }
        if let Some(command) = input.thrust {
            self.body
                .apply_thrust_command(command, self.config.thrust_min, self.config.thrust_max);
        }

        let c0 = self.body.position;
        let c1 = integrator::integrate(&mut self.body, dt, self.config.drag_coefficient);

        let SweepResult { contacts, nearest } = self.sweep(c0, c1);
        self.contacts = contacts;

        match nearest {
            Some(contact) => {
                self.body.position = contact.position + contact.normal * self.config.contact_margin;
                self.body.velocity = self.config.response.apply(self.body.velocity, contact.normal);
                debug!(
                    polyline = contact.segment.polyline,
                    segment = contact.segment.index,
                    t = contact.t,
                    candidates = self.contacts.len(),
                    "movement clamped at contact"
                );
            }
            None => self.body.position = c1,
        }

        Ok(self.output(nearest))
    }

    fn output(&self, resolved: Option<Contact>) -> TickOutput {
        TickOutput {
            position: self.body.position,
            velocity: self.body.velocity,
            angle: self.body.angle,
            contacts: self.contacts.clone(),
            resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::ContactResponse;
    use crate::shapes::Polyline;
    const EPSILON: f64 = 1e-9;

    fn floor_world(config: WorldConfig) -> PhysicsWorld {
        let floor = Polyline::open(vec![Vec2::new(-100.0, 50.0), Vec2::new(100.0, 50.0)]);
        let mut body = Body::new(Vec2::new(0.0, 0.0), 10.0);
        body.velocity = Vec2::new(0.0, 100.0);
        let config = WorldConfig { drag_coefficient: 0.0, ..config };
        PhysicsWorld::new(Level::new(vec![floor]).unwrap(), body, config).unwrap()
    }

    #[test]
    fn test_world_rejects_bad_radius() {
        let body = Body::new(Vec2::ZERO, 0.0);
        let err = PhysicsWorld::new(Level::empty(), body, WorldConfig::default()).unwrap_err();
        assert_eq!(err, GeometryError::InvalidRadius(0.0));
    }

    #[test]
    fn test_world_rejects_bad_cell_size() {
        let body = Body::new(Vec2::ZERO, 5.0);
        for cell_size in [0.0, -1.0, f64::NAN] {
            let config = WorldConfig {
                broad_phase_cell_size: Some(cell_size),
                ..WorldConfig::default()
            };
            let err = PhysicsWorld::new(Level::empty(), body, config).unwrap_err();
            assert!(matches!(err, GeometryError::InvalidCellSize(_)));
        }
    }

    #[test]
    fn test_step_rechecks_body_radius() {
        let mut world = floor_world(WorldConfig::default());
        let before = world.body;
        world.body.radius = 0.0;
        assert_eq!(
            world.step(TickInput::coast(0.1)),
            Err(StepError::InvalidBody(GeometryError::InvalidRadius(0.0)))
        );
        assert_eq!(world.body.position, before.position);
        assert_eq!(world.body.velocity, before.velocity);
    }

    #[test]
    fn test_step_rejects_negative_dt() {
        let mut world = floor_world(WorldConfig::default());
        assert_eq!(world.step(TickInput::coast(-0.1)), Err(StepError::InvalidTimeStep(-0.1)));
        assert!(world.step(TickInput::coast(f64::NAN)).is_err());
    }

    #[test]
    fn test_unobstructed_step_moves_to_tentative_position() {
        let mut world = floor_world(WorldConfig::default());
        let out = world.step(TickInput::coast(0.1)).unwrap();
        assert!((out.position - Vec2::new(0.0, 10.0)).magnitude() < EPSILON);
        assert!(out.contacts.is_empty());
        assert!(out.resolved.is_none());
    }

    #[test]
    fn test_blocked_step_stops_at_contact_plus_margin() {
        let mut world = floor_world(WorldConfig::default());
        let out = world.step(TickInput::coast(1.0)).unwrap();

        let contact = out.resolved.expect("expected the floor to block the body");
        assert!((contact.t - 0.4).abs() < EPSILON);
        // Center stops at y = 40, then backs off by the margin
        assert!((out.position - Vec2::new(0.0, 39.5)).magnitude() < EPSILON);
        // Default response leaves velocity alone
        assert_eq!(out.velocity, Vec2::new(0.0, 100.0));
        assert_eq!(world.contacts().len(), out.contacts.len());
    }

    #[test]
    fn test_bounce_response_reflects_velocity() {
        let config = WorldConfig {
            response: ContactResponse::Bounce { restitution: 0.8 },
            ..WorldConfig::default()
        };
        let mut world = floor_world(config);
        let out = world.step(TickInput::coast(1.0)).unwrap();
        assert!((out.velocity - Vec2::new(0.0, -80.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_zero_dt_step_is_noop() {
        let mut world = floor_world(WorldConfig::default());
        world.step(TickInput::coast(1.0)).unwrap();
        let before = world.body;

        let input = TickInput {
            dt: 0.0,
            target_angle_deg: Some(180.0),
            thrust: Some(ThrustCommand::Set(500.0)),
        };
        let out = world.step(input).unwrap();

        assert_eq!(world.body, before);
        assert_eq!(out.position, before.position);
        assert_eq!(out.velocity, before.velocity);
        assert!(out.contacts.is_empty());
    }

    #[test]
    fn test_grid_and_brute_force_agree() {
        let brute = floor_world(WorldConfig::default());
        let gridded = floor_world(WorldConfig {
            broad_phase_cell_size: Some(25.0),
            ..WorldConfig::default()
        });

        for (c0, c1) in [
            (Vec2::new(0.0, 0.0), Vec2::new(0.0, 100.0)),
            (Vec2::new(-150.0, 40.0), Vec2::new(150.0, 60.0)),
            (Vec2::new(95.0, 0.0), Vec2::new(120.0, 80.0)),
            (Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)),
        ] {
            assert_eq!(brute.sweep(c0, c1), gridded.sweep(c0, c1));
        }
    }

    #[test]
    fn test_grid_and_brute_force_agree_on_slow_graze() {
        // A crawl of 0.0011 units passes 6.015 from the wall's start point;
        // the cap test still accepts it for a radius of 6.
        let wall = Polyline::open(vec![Vec2::new(0.0, 6.015), Vec2::new(0.0, 100.0)]);
        let level = Level::new(vec![wall]).unwrap();
        let body = Body::new(Vec2::ZERO, 6.0);
        let brute = PhysicsWorld::new(level.clone(), body, WorldConfig::default()).unwrap();
        let gridded = PhysicsWorld::new(
            level,
            body,
            WorldConfig {
                broad_phase_cell_size: Some(10.0),
                ..WorldConfig::default()
            },
        )
        .unwrap();

        let (c0, c1) = (Vec2::new(-0.00055, 0.0), Vec2::new(0.00055, 0.0));
        let expected = brute.sweep(c0, c1);
        assert_eq!(expected.contacts.len(), 1);
        assert_eq!(expected, gridded.sweep(c0, c1));
    }
}
