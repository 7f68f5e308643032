//! Guide providers
//!
//! A guide is the reference point a velocity update steers towards: the
//! particle's own memory (local guide) or the memory of its neighbourhood best
//! (global guide). Guides exist for the position vector and, with the same
//! meaning, for each control parameter's `best_value`.

use std::fmt::Debug;

use crate::error::SwarmResult;
use crate::parameter::control::ParameterKind;
use crate::particle::particle::ParameterizedParticle;
use crate::particle::swarm::Swarm;

/// Resolves a reference position for a particle
///
/// Implementations read particle state only and never mutate it.
pub trait GuideProvider: Clone + Debug + Send + Sync {
    /// Reference position for the position-velocity update
    fn position_guide<'a>(
        &self,
        particle: &'a ParameterizedParticle,
        swarm: &'a Swarm,
    ) -> SwarmResult<&'a [f64]>;

    /// Reference value for the velocity update of one control parameter
    fn parameter_guide(
        &self,
        particle: &ParameterizedParticle,
        swarm: &Swarm,
        kind: ParameterKind,
    ) -> SwarmResult<f64>;
}

/// The particle's own best position and parameter best values
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PersonalBestGuide;

impl GuideProvider for PersonalBestGuide {
    fn position_guide<'a>(
        &self,
        particle: &'a ParameterizedParticle,
        _swarm: &'a Swarm,
    ) -> SwarmResult<&'a [f64]> {
        Ok(particle.best_position())
    }

    fn parameter_guide(
        &self,
        particle: &ParameterizedParticle,
        _swarm: &Swarm,
        kind: ParameterKind,
    ) -> SwarmResult<f64> {
        Ok(particle.parameter(kind).best_value())
    }
}

/// Best position and parameter best values of the neighbourhood best
///
/// Fails with `MissingNeighbourhoodBest` when the particle was never linked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NeighbourhoodBestGuide;

impl GuideProvider for NeighbourhoodBestGuide {
    fn position_guide<'a>(
        &self,
        particle: &'a ParameterizedParticle,
        swarm: &'a Swarm,
    ) -> SwarmResult<&'a [f64]> {
        Ok(swarm.neighbourhood_best_of(particle)?.best_position())
    }

    fn parameter_guide(
        &self,
        particle: &ParameterizedParticle,
        swarm: &Swarm,
        kind: ParameterKind,
    ) -> SwarmResult<f64> {
        Ok(swarm
            .neighbourhood_best_of(particle)?
            .parameter(kind)
            .best_value())
    }
}

pub mod prelude {
    pub use super::{GuideProvider, NeighbourhoodBestGuide, PersonalBestGuide};
}
