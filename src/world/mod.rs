pub mod level;
pub mod physics_world;

pub use level::{Level, LevelDef};
pub use physics_world::{PhysicsWorld, TickInput, TickOutput};
