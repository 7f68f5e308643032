//! Particle initialization
//!
//! This module provides position initializers and the parameter-inclusive
//! strategy that initializes positions and control parameters together.

pub mod bounded_random;
pub mod config;
pub mod constant;
pub mod parameter_inclusive;
pub mod traits;

pub use config::ParameterInclusiveConfig;
pub use parameter_inclusive::ParameterInclusiveInitializer;

pub mod prelude {
    pub use super::bounded_random::*;
    pub use super::config::*;
    pub use super::constant::*;
    pub use super::parameter_inclusive::*;
    pub use super::traits::*;
}
