//! Error types for fugue-pso
//!
//! Every failure in this crate is a configuration or usage error reported
//! synchronously to the caller. Nothing is retried internally.

use thiserror::Error;

/// Error type for swarm initialization and update operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SwarmError {
    /// A bound pair whose lower end exceeds its upper end, or has a non-finite end
    #[error("Invalid bounds for {quantity}: lower ({lower}) must be <= upper ({upper})")]
    InvalidBounds {
        quantity: String,
        lower: f64,
        upper: f64,
    },

    /// Velocity computation needs a neighbourhood best that was never assigned
    #[error("Particle has no neighbourhood best")]
    MissingNeighbourhoodBest,

    /// A particle handle that does not resolve in the swarm
    #[error("Unknown particle handle: {0}")]
    UnknownParticle(usize),

    /// Vectors of incompatible length
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A solution representation the problem cannot evaluate
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Any other misconfiguration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl SwarmError {
    /// Build an `InvalidBounds` error for the named quantity
    pub fn invalid_bounds(quantity: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self::InvalidBounds {
            quantity: quantity.into(),
            lower,
            upper,
        }
    }
}

/// Result type alias for swarm operations
pub type SwarmResult<T> = Result<T, SwarmError>;
