use crate::math::{degrees, normalize_degrees, radians, shortest_arc_degrees, Vec2};
use crate::objects::Body;

/// Advances the body's velocity by one explicit Euler step and returns the
/// tentative new center.
///
/// Acceleration is `thrust` along the facing direction plus quadratic drag
/// `-k |v| v`. The body's position is left alone; the caller sweeps from the
/// current position to the returned one and commits the corrected result.
pub fn integrate(body: &mut Body, dt: f64, drag_coefficient: f64) -> Vec2 {
    if dt <= 0.0 {
        return body.position;
    }

    let acceleration = body.direction() * body.thrust;

    // Drag may at most cancel the current velocity, large steps would
    // otherwise flip its direction.
    let drag_fraction = (drag_coefficient * body.speed() * dt).min(1.0);
    let drag_delta = body.velocity * -drag_fraction;

    body.velocity = body.velocity + acceleration * dt + drag_delta;
    body.position + body.velocity * dt
}

/// Turns the body towards `target_deg` along the shortest arc, by at most
/// `max_rate_deg` degrees per second.
pub fn steer(body: &mut Body, target_deg: f64, max_rate_deg: f64, dt: f64) {
    if dt <= 0.0 {
        return;
    }
    let current = normalize_degrees(degrees(body.angle));
    let diff = shortest_arc_degrees(current, normalize_degrees(target_deg));
    let max_step = max_rate_deg * dt;
    body.angle = wrap_angle(body.angle + radians(diff.clamp(-max_step, max_step)));
}

/// Wraps an angle in radians to the range [-PI, PI].
fn wrap_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}
