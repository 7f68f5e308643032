//! # fugue-pso
//!
//! Particle swarm optimization with self-adapting control parameters.
//!
//! Every particle carries its own inertia weight, social and cognitive
//! acceleration coefficients and velocity clamp. These are initialized
//! together with the particle's position and move through parameter space the
//! same way the position moves through the search space.
//!
//! ## Core Concepts
//!
//! - **Control parameters**: a value plus the best value seen, a velocity and
//!   a flag marking values the user pinned
//! - **Parameter-inclusive initialization**: one strategy fills a particle's
//!   position, best position or velocity slot and the matching parameter
//!   fields, leaving pinned parameters alone
//! - **Bare-bones parameter velocity**: each parameter moves to a random
//!   point between its personal best and the neighbourhood best's value
//! - **Swarm arena**: particles are owned by a [`Swarm`](particle::swarm::Swarm)
//!   and refer to their neighbourhood best by handle
//!
//! ## Quick Start
//!
//! ```rust
//! use fugue_pso::prelude::*;
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), SwarmError> {
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let config = ParameterInclusiveConfig::new()
//!     .with_fixed(ParameterKind::Inertia, 0.729)
//!     .with_position_bounds(-15.0, 3.0);
//! let template = ParameterInclusiveInitializer::from_config(config);
//!
//! let mut swarm = Swarm::new();
//! for _ in 0..10 {
//!     let mut strategy = template.clone();
//!     let mut particle = ParameterizedParticle::new(2);
//!     for slot in Slot::ALL {
//!         strategy.initialize(slot, &mut particle, &mut rng)?;
//!     }
//!     swarm.push(particle);
//! }
//! for id in swarm.ids().collect::<Vec<_>>() {
//!     swarm.set_neighbourhood_best(id, ParticleId(0))?;
//! }
//!
//! let updates = swarm.compute_velocities(&BareBonesVelocity::new(), 7)?;
//! swarm.apply_velocities(updates)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fitness;
pub mod guide;
pub mod initialization;
pub mod parameter;
pub mod particle;
pub mod random;
pub mod velocity;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::guide::prelude::*;
    pub use crate::initialization::prelude::*;
    pub use crate::parameter::prelude::*;
    pub use crate::particle::prelude::*;
    pub use crate::random::prelude::*;
    pub use crate::velocity::prelude::*;
}
