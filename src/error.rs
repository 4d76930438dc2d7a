use thiserror::Error;

/// Raised when level geometry or a body shape is rejected at ingestion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("polyline {polyline} has {count} vertices, at least 2 are required")]
    TooFewVertices { polyline: usize, count: usize },
    #[error("polyline {polyline} has a non-finite coordinate at vertex {vertex}")]
    NonFiniteVertex { polyline: usize, vertex: usize },
    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("broad phase cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepError {
    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f64),
    #[error("body shape is invalid: {0}")]
    InvalidBody(#[from] GeometryError),
}
