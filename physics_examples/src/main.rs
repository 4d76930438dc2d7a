use std::env;

use anyhow::{bail, Result};
use circle_sweep::*;
use circle_sweep::collision::sweep_circle_segment;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let example = args.get(1).map(String::as_str).unwrap_or("cave");

    tracing::info!("Running example: {}", example);

    match example {
        "perpendicular" => run_single_sweep_example(Vec2::new(0.0, 0.0)),
        "cap" => run_single_sweep_example(Vec2::new(55.0, 0.0)),
        "corridor" => run_corridor_example(),
        "cave" => run_cave_example(),
        _ => bail!(
            "Unknown example: {}. Available examples: perpendicular, cap, corridor, cave",
            example
        ),
    }
}

// One sweep straight up against the wall (-50,50)-(50,50)
fn run_single_sweep_example(start: Vec2) -> Result<()> {
    let end = start + Vec2::new(0.0, 100.0);
    match sweep_circle_segment(start, end, 10.0, Vec2::new(-50.0, 50.0), Vec2::new(50.0, 50.0)) {
        Some(hit) => tracing::info!(
            "Impact at t={:.4} region={:?} point=({:.2}, {:.2}) normal=({:.3}, {:.3})",
            hit.t,
            hit.region,
            hit.point.x,
            hit.point.y,
            hit.normal.x,
            hit.normal.y
        ),
        None => tracing::info!("No impact"),
    }
    Ok(())
}

// A fast body fired down a closed corridor
fn run_corridor_example() -> Result<()> {
    let level = Level::new(vec![Polyline::closed(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(400.0, 0.0),
        Vec2::new(400.0, 40.0),
        Vec2::new(0.0, 40.0),
    ])])?;
    let mut body = Body::new(Vec2::new(20.0, 20.0), 6.0);
    body.velocity = Vec2::new(3000.0, 150.0);
    let config = WorldConfig {
        response: ContactResponse::Bounce { restitution: 0.8 },
        ..WorldConfig::default()
    };
    let mut world = PhysicsWorld::new(level, body, config)?;

    let dt = 1.0 / 30.0;
    for frame in 0..90 {
        let out = world.step(TickInput::coast(dt))?;
        if let Some(contact) = out.resolved {
            tracing::info!(
                "Frame {}: hit polyline {} segment {} at t={:.3}, {} candidate(s)",
                frame,
                contact.segment.polyline,
                contact.segment.index,
                contact.t,
                out.contacts.len()
            );
        }
        if frame % 15 == 0 {
            tracing::info!(
                "Frame {}: position ({:.2}, {:.2}) speed {:.2}",
                frame,
                out.position.x,
                out.position.y,
                out.velocity.magnitude()
            );
        }
    }
    tracing::info!("Corridor simulation finished.");
    Ok(())
}

// A thrusting body steering through a scaled zig-zag cave
fn run_cave_example() -> Result<()> {
    let level = create_cave(40)?.scaled(4.0)?;
    let body = Body::new(Vec2::new(40.0, 120.0), 6.0);
    let config = WorldConfig {
        broad_phase_cell_size: Some(64.0),
        ..WorldConfig::default()
    };
    let mut world = PhysicsWorld::new(level, body, config)?;
    tracing::info!("Simulating cave with {} wall segments", world.level().segment_count());

    let dt = 1.0 / 30.0;
    for frame in 0..300 {
        let input = TickInput {
            dt,
            target_angle_deg: Some(if (frame / 45) % 2 == 0 { 15.0 } else { 345.0 }),
            thrust: if frame == 0 { Some(ThrustCommand::Set(40.0)) } else { None },
        };
        let out = world.step(input)?;
        if frame % 30 == 0 {
            tracing::info!(
                "Frame {}: position ({:.2}, {:.2}) angle {:.1} deg, {} contact(s)",
                frame,
                out.position.x,
                out.position.y,
                math::degrees(out.angle),
                out.contacts.len()
            );
        }
    }
    tracing::info!("Cave simulation finished.");
    Ok(())
}

fn create_cave(teeth: usize) -> Result<Level> {
    let floor: Vec<Vec2> = (0..=teeth)
        .map(|i| Vec2::new(i as f64 * 20.0, if i % 2 == 0 { 0.0 } else { 12.0 }))
        .collect();
    let ceiling: Vec<Vec2> = (0..=teeth)
        .map(|i| Vec2::new(i as f64 * 20.0, if i % 2 == 0 { 60.0 } else { 48.0 }))
        .collect();
    Ok(Level::new(vec![Polyline::open(floor), Polyline::open(ceiling)])?)
}
