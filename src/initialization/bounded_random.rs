//! Bounded random initialization
//!
//! Fills every dimension of a slot with an independent draw from one bound
//! pair.

use rand::Rng;

use crate::error::SwarmResult;
use crate::initialization::traits::{BoundsConfigurable, PositionInitializer};
use crate::parameter::bounds::ParameterBounds;
use crate::parameter::control::ControlParameter;
use crate::particle::particle::{ParameterizedParticle, Slot};
use crate::random::{ProbabilityDistribution, UniformDistribution};

/// Position initializer drawing each dimension from `[lower, upper]`
#[derive(Clone, Debug, PartialEq)]
pub struct BoundedRandomInitializer<D = UniformDistribution> {
    bounds: ParameterBounds,
    distribution: D,
}

impl BoundedRandomInitializer {
    /// Uniform initializer over `bounds`
    pub fn new(bounds: impl Into<ParameterBounds>) -> Self {
        Self::with_distribution(bounds, UniformDistribution)
    }
}

impl Default for BoundedRandomInitializer {
    fn default() -> Self {
        Self::new(ParameterBounds::default())
    }
}

impl<D: ProbabilityDistribution> BoundedRandomInitializer<D> {
    /// Initializer over `bounds` with an explicit distribution
    pub fn with_distribution(bounds: impl Into<ParameterBounds>, distribution: D) -> Self {
        Self {
            bounds: bounds.into(),
            distribution,
        }
    }

    /// Current bound pair
    pub fn bounds(&self) -> &ParameterBounds {
        &self.bounds
    }

    /// Replace the bound pair
    pub fn set_bounds(&mut self, bounds: ParameterBounds) {
        self.bounds = bounds;
    }

    /// Distribution the values are drawn from
    pub fn distribution(&self) -> &D {
        &self.distribution
    }
}

impl<D: ProbabilityDistribution> BoundsConfigurable for BoundedRandomInitializer<D> {
    fn set_lower_bound(&mut self, bound: ControlParameter) {
        self.bounds.set_lower(bound);
    }

    fn set_upper_bound(&mut self, bound: ControlParameter) {
        self.bounds.set_upper(bound);
    }
}

impl<D: ProbabilityDistribution> PositionInitializer for BoundedRandomInitializer<D> {
    fn initialize<R: Rng + ?Sized>(
        &self,
        slot: Slot,
        particle: &mut ParameterizedParticle,
        rng: &mut R,
    ) -> SwarmResult<()> {
        self.bounds.validate("position")?;
        let (lower, upper) = (self.bounds.min(), self.bounds.max());
        let values = (0..particle.dimension())
            .map(|_| self.distribution.sample(rng, lower, upper))
            .collect();
        *particle.slot_mut(slot) = values;
        Ok(())
    }

    fn bounds_configurable(&mut self) -> Option<&mut dyn BoundsConfigurable> {
        Some(self)
    }
}
