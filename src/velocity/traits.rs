//! Velocity provider traits
//!
//! A velocity provider computes a new velocity for the position vector and,
//! by the same rule, a scalar velocity for each control parameter.

use std::collections::BTreeMap;
use std::fmt::Debug;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SwarmResult;
use crate::parameter::control::ParameterKind;
use crate::particle::particle::ParameterizedParticle;
use crate::particle::swarm::Swarm;

/// Velocities computed for the four control parameters
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterVelocities {
    pub inertia: f64,
    pub social_acceleration: f64,
    pub cognitive_acceleration: f64,
    pub vmax: f64,
}

impl ParameterVelocities {
    /// Velocity of the given parameter
    pub fn get(&self, kind: ParameterKind) -> f64 {
        match kind {
            ParameterKind::Inertia => self.inertia,
            ParameterKind::SocialAcceleration => self.social_acceleration,
            ParameterKind::CognitiveAcceleration => self.cognitive_acceleration,
            ParameterKind::Vmax => self.vmax,
        }
    }

    /// Set the velocity of the given parameter
    pub fn set(&mut self, kind: ParameterKind, velocity: f64) {
        match kind {
            ParameterKind::Inertia => self.inertia = velocity,
            ParameterKind::SocialAcceleration => self.social_acceleration = velocity,
            ParameterKind::CognitiveAcceleration => self.cognitive_acceleration = velocity,
            ParameterKind::Vmax => self.vmax = velocity,
        }
    }

    /// Look up a velocity by its reported name, e.g. `"InertiaVelocity"`
    pub fn by_name(&self, name: &str) -> Option<f64> {
        ParameterKind::from_velocity_name(name).map(|kind| self.get(kind))
    }

    /// `(kind, velocity)` pairs in update order
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKind, f64)> + '_ {
        ParameterKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Name-keyed view: `InertiaVelocity`, `SocialAccelerationVelocity`,
    /// `CognitiveAccelerationVelocity`, `VmaxVelocity`
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.iter()
            .map(|(kind, velocity)| (kind.velocity_name(), velocity))
            .collect()
    }

    /// Store each velocity in the matching parameter of `particle`
    pub fn apply_to(&self, particle: &mut ParameterizedParticle) {
        for (kind, velocity) in self.iter() {
            particle.parameter_mut(kind).set_velocity(velocity);
        }
    }
}

/// Result of one velocity computation
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityUpdate {
    /// New velocity of the position vector
    pub position: Vec<f64>,
    /// New velocities of the control parameters
    pub parameters: ParameterVelocities,
}

impl VelocityUpdate {
    /// Store both velocities on `particle`
    pub fn apply_to(&self, particle: &mut ParameterizedParticle) {
        particle.set_velocity(self.position.clone());
        self.parameters.apply_to(particle);
    }
}

/// Computes particle velocities
///
/// Providers only read the particle and the swarm; storing the result is the
/// caller's decision.
pub trait VelocityProvider: Clone + Debug + Send + Sync {
    /// Velocity of the position vector
    fn position_velocity<R: Rng + ?Sized>(
        &self,
        particle: &ParameterizedParticle,
        swarm: &Swarm,
        rng: &mut R,
    ) -> SwarmResult<Vec<f64>>;

    /// Velocities of the four control parameters
    fn parameter_velocities<R: Rng + ?Sized>(
        &self,
        particle: &ParameterizedParticle,
        swarm: &Swarm,
        rng: &mut R,
    ) -> SwarmResult<ParameterVelocities>;

    /// Both velocities at once
    fn compute_velocity<R: Rng + ?Sized>(
        &self,
        particle: &ParameterizedParticle,
        swarm: &Swarm,
        rng: &mut R,
    ) -> SwarmResult<VelocityUpdate> {
        let position = self.position_velocity(particle, swarm, rng)?;
        let parameters = self.parameter_velocities(particle, swarm, rng)?;
        Ok(VelocityUpdate {
            position,
            parameters,
        })
    }
}
