//! Particles and the swarm arena
//!
//! This module provides the `ParameterizedParticle`, the `Slot` selector used
//! by initialization, and the `Swarm` that owns particles and resolves
//! neighbourhood handles.

pub mod particle;
pub mod swarm;

pub mod prelude {
    pub use super::particle::*;
    pub use super::swarm::*;
}
