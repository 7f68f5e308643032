//! Parameterized particles
//!
//! A particle carries its position, velocity and best position together with
//! the four control parameters that govern its own movement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parameter::control::{ControlParameter, ParameterKind};

/// Handle of a particle inside a [`Swarm`](crate::particle::swarm::Swarm)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub usize);

impl ParticleId {
    /// Position of the particle in its swarm
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The particle sub-state an initialization call targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Current position and current parameter values
    CandidateSolution,
    /// Best position and parameter best values
    BestPosition,
    /// Velocity and parameter velocities
    Velocity,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::CandidateSolution, Slot::BestPosition, Slot::Velocity];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CandidateSolution => "candidate solution",
            Self::BestPosition => "best position",
            Self::Velocity => "velocity",
        })
    }
}

/// A particle whose control parameters are optimized with its position
///
/// The neighbourhood best is a handle into the owning swarm and is never
/// carried over by `clone`.
#[derive(Debug, PartialEq)]
pub struct ParameterizedParticle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    inertia: ControlParameter,
    social_acceleration: ControlParameter,
    cognitive_acceleration: ControlParameter,
    vmax: ControlParameter,
    neighbourhood_best: Option<ParticleId>,
    fitness: Option<f64>,
}

impl ParameterizedParticle {
    /// Create a particle at the origin of a `dimension`-dimensional space
    pub fn new(dimension: usize) -> Self {
        Self::from_position(vec![0.0; dimension])
    }

    /// Create a particle at `position`, remembering it as its best
    pub fn from_position(position: Vec<f64>) -> Self {
        let dimension = position.len();
        Self {
            best_position: position.clone(),
            position,
            velocity: vec![0.0; dimension],
            inertia: ControlParameter::default(),
            social_acceleration: ControlParameter::default(),
            cognitive_acceleration: ControlParameter::default(),
            vmax: ControlParameter::default(),
            neighbourhood_best: None,
            fitness: None,
        }
    }

    /// Number of dimensions of the candidate solution
    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    /// Current candidate solution
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Current velocity vector
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Best position found so far
    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// Replace the candidate solution
    pub fn set_position(&mut self, position: Vec<f64>) {
        self.position = position;
    }

    /// Replace the velocity vector
    pub fn set_velocity(&mut self, velocity: Vec<f64>) {
        self.velocity = velocity;
    }

    /// Replace the best position
    pub fn set_best_position(&mut self, best_position: Vec<f64>) {
        self.best_position = best_position;
    }

    /// The vector stored in `slot`
    pub fn slot(&self, slot: Slot) -> &[f64] {
        match slot {
            Slot::CandidateSolution => &self.position,
            Slot::BestPosition => &self.best_position,
            Slot::Velocity => &self.velocity,
        }
    }

    /// Mutable access to the vector stored in `slot`
    pub fn slot_mut(&mut self, slot: Slot) -> &mut Vec<f64> {
        match slot {
            Slot::CandidateSolution => &mut self.position,
            Slot::BestPosition => &mut self.best_position,
            Slot::Velocity => &mut self.velocity,
        }
    }

    /// Inertia weight
    pub fn inertia(&self) -> &ControlParameter {
        &self.inertia
    }

    /// Social acceleration coefficient
    pub fn social_acceleration(&self) -> &ControlParameter {
        &self.social_acceleration
    }

    /// Cognitive acceleration coefficient
    pub fn cognitive_acceleration(&self) -> &ControlParameter {
        &self.cognitive_acceleration
    }

    /// Velocity clamp
    pub fn vmax(&self) -> &ControlParameter {
        &self.vmax
    }

    /// Replace the inertia weight
    pub fn set_inertia(&mut self, parameter: ControlParameter) {
        self.inertia = parameter;
    }

    /// Replace the social acceleration coefficient
    pub fn set_social_acceleration(&mut self, parameter: ControlParameter) {
        self.social_acceleration = parameter;
    }

    /// Replace the cognitive acceleration coefficient
    pub fn set_cognitive_acceleration(&mut self, parameter: ControlParameter) {
        self.cognitive_acceleration = parameter;
    }

    /// Replace the velocity clamp
    pub fn set_vmax(&mut self, parameter: ControlParameter) {
        self.vmax = parameter;
    }

    /// Control parameter of the given kind
    pub fn parameter(&self, kind: ParameterKind) -> &ControlParameter {
        match kind {
            ParameterKind::Inertia => &self.inertia,
            ParameterKind::SocialAcceleration => &self.social_acceleration,
            ParameterKind::CognitiveAcceleration => &self.cognitive_acceleration,
            ParameterKind::Vmax => &self.vmax,
        }
    }

    /// Mutable control parameter of the given kind
    pub fn parameter_mut(&mut self, kind: ParameterKind) -> &mut ControlParameter {
        match kind {
            ParameterKind::Inertia => &mut self.inertia,
            ParameterKind::SocialAcceleration => &mut self.social_acceleration,
            ParameterKind::CognitiveAcceleration => &mut self.cognitive_acceleration,
            ParameterKind::Vmax => &mut self.vmax,
        }
    }

    /// Replace the control parameter of the given kind
    pub fn set_parameter(&mut self, kind: ParameterKind, parameter: ControlParameter) {
        *self.parameter_mut(kind) = parameter;
    }

    /// Handle of the neighbourhood best, if linked
    pub fn neighbourhood_best(&self) -> Option<ParticleId> {
        self.neighbourhood_best
    }

    /// Point at the particle whose best position guides this one
    ///
    /// The handle may name this particle itself.
    pub fn set_neighbourhood_best(&mut self, best: ParticleId) {
        self.neighbourhood_best = Some(best);
    }

    /// Remove the neighbourhood link
    pub fn clear_neighbourhood_best(&mut self) {
        self.neighbourhood_best = None;
    }

    /// Last fitness assigned by the outer loop (None if not yet evaluated)
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Store the fitness of the current position
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Remember the current position and parameter values as the best ones
    pub fn remember_best(&mut self) {
        self.best_position.clone_from(&self.position);
        for kind in ParameterKind::ALL {
            let parameter = self.parameter_mut(kind);
            parameter.set_best_value(parameter.value());
        }
    }
}

impl Clone for ParameterizedParticle {
    /// Deep copy without the neighbourhood relation
    fn clone(&self) -> Self {
        Self {
            position: self.position.clone(),
            velocity: self.velocity.clone(),
            best_position: self.best_position.clone(),
            inertia: self.inertia.clone(),
            social_acceleration: self.social_acceleration.clone(),
            cognitive_acceleration: self.cognitive_acceleration.clone(),
            vmax: self.vmax.clone(),
            neighbourhood_best: None,
            fitness: self.fitness,
        }
    }
}

impl Default for ParameterizedParticle {
    fn default() -> Self {
        Self::new(0)
    }
}
