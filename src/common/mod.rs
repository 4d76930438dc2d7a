pub mod config;

pub use config::WorldConfig;
