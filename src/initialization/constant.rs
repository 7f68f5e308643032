//! Constant initialization

use rand::Rng;

use crate::error::SwarmResult;
use crate::initialization::traits::PositionInitializer;
use crate::particle::particle::{ParameterizedParticle, Slot};

/// Position initializer writing the same value to every dimension
///
/// Commonly used to start velocities at zero. It takes no bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConstantInitializer {
    value: f64,
}

impl ConstantInitializer {
    /// Initializer writing `value` everywhere
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Value written to every dimension
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl PositionInitializer for ConstantInitializer {
    fn initialize<R: Rng + ?Sized>(
        &self,
        slot: Slot,
        particle: &mut ParameterizedParticle,
        _rng: &mut R,
    ) -> SwarmResult<()> {
        let dimension = particle.dimension();
        *particle.slot_mut(slot) = vec![self.value; dimension];
        Ok(())
    }
}
