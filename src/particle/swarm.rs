//! Swarm arena
//!
//! The swarm owns its particles. Neighbourhood relations are `ParticleId`
//! handles into this arena, so self-references and cycles need no ownership.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{SwarmError, SwarmResult};
use crate::particle::particle::{ParameterizedParticle, ParticleId};
use crate::velocity::traits::{VelocityProvider, VelocityUpdate};

/// A collection of particles addressed by `ParticleId`
#[derive(Clone, Debug, Default)]
pub struct Swarm {
    particles: Vec<ParameterizedParticle>,
    iteration: usize,
}

impl Swarm {
    /// Create an empty swarm
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a swarm from existing particles
    ///
    /// Handles are assigned in order, starting at 0.
    pub fn from_particles(particles: Vec<ParameterizedParticle>) -> Self {
        Self {
            particles,
            iteration: 0,
        }
    }

    /// Add a particle and return its handle
    pub fn push(&mut self, particle: ParameterizedParticle) -> ParticleId {
        self.particles.push(particle);
        ParticleId(self.particles.len() - 1)
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Check if the swarm has no particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iteration counter maintained by the outer loop
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Advance the iteration counter by one
    pub fn increment_iteration(&mut self) {
        self.iteration += 1;
    }

    /// Particle behind `id`
    pub fn get(&self, id: ParticleId) -> SwarmResult<&ParameterizedParticle> {
        self.particles
            .get(id.index())
            .ok_or(SwarmError::UnknownParticle(id.index()))
    }

    /// Mutable particle behind `id`
    pub fn get_mut(&mut self, id: ParticleId) -> SwarmResult<&mut ParameterizedParticle> {
        self.particles
            .get_mut(id.index())
            .ok_or(SwarmError::UnknownParticle(id.index()))
    }

    /// Iterate over particles in handle order
    pub fn iter(&self) -> impl Iterator<Item = &ParameterizedParticle> {
        self.particles.iter()
    }

    /// Iterate mutably over particles in handle order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ParameterizedParticle> {
        self.particles.iter_mut()
    }

    /// Handles of all particles
    pub fn ids(&self) -> impl Iterator<Item = ParticleId> {
        (0..self.particles.len()).map(ParticleId)
    }

    /// All particles as a slice
    pub fn particles(&self) -> &[ParameterizedParticle] {
        &self.particles
    }

    /// Link `particle` to `best`; both handles must resolve
    pub fn set_neighbourhood_best(
        &mut self,
        particle: ParticleId,
        best: ParticleId,
    ) -> SwarmResult<()> {
        self.get(best)?;
        self.get_mut(particle)?.set_neighbourhood_best(best);
        Ok(())
    }

    /// Resolve the neighbourhood best of `particle`
    ///
    /// `particle` does not have to live in this swarm; only its handle does.
    pub fn neighbourhood_best_of(
        &self,
        particle: &ParameterizedParticle,
    ) -> SwarmResult<&ParameterizedParticle> {
        let id = particle
            .neighbourhood_best()
            .ok_or(SwarmError::MissingNeighbourhoodBest)?;
        self.get(id)
    }

    /// Compute velocity updates for every particle against this snapshot
    ///
    /// The swarm is only read, so all updates see the same generation. Each
    /// particle gets its own RNG seeded from `seed` and its index, which makes
    /// the result independent of scheduling. The first error aborts the batch.
    #[cfg(feature = "parallel")]
    pub fn compute_velocities<V>(
        &self,
        provider: &V,
        seed: u64,
    ) -> SwarmResult<Vec<VelocityUpdate>>
    where
        V: VelocityProvider,
    {
        self.particles
            .par_iter()
            .enumerate()
            .map(|(i, particle)| {
                let mut rng = particle_rng(seed, i);
                provider.compute_velocity(particle, self, &mut rng)
            })
            .collect()
    }

    /// Compute velocity updates for every particle against this snapshot
    ///
    /// Sequential fallback when the `parallel` feature is disabled.
    #[cfg(not(feature = "parallel"))]
    pub fn compute_velocities<V>(
        &self,
        provider: &V,
        seed: u64,
    ) -> SwarmResult<Vec<VelocityUpdate>>
    where
        V: VelocityProvider,
    {
        self.particles
            .iter()
            .enumerate()
            .map(|(i, particle)| {
                let mut rng = particle_rng(seed, i);
                provider.compute_velocity(particle, self, &mut rng)
            })
            .collect()
    }

    /// Store a batch produced by [`compute_velocities`](Self::compute_velocities)
    pub fn apply_velocities(&mut self, updates: Vec<VelocityUpdate>) -> SwarmResult<()> {
        if updates.len() != self.particles.len() {
            return Err(SwarmError::DimensionMismatch {
                expected: self.particles.len(),
                actual: updates.len(),
            });
        }
        for (particle, update) in self.particles.iter_mut().zip(updates) {
            update.apply_to(particle);
        }
        Ok(())
    }
}

/// Golden-ratio multiplier spreading particle indices over the seed space
const INDEX_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

fn particle_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (index as u64).wrapping_mul(INDEX_MIX))
}
