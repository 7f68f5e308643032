//! Initializer traits
//!
//! This module defines the position initializer trait and the optional
//! capability through which an orchestrating strategy can hand its bounds to a
//! delegate.

use std::fmt::Debug;

use rand::Rng;

use crate::error::SwarmResult;
use crate::parameter::control::ControlParameter;
use crate::particle::particle::{ParameterizedParticle, Slot};

/// Capability of initializers that sample from a configurable bound pair
pub trait BoundsConfigurable {
    fn set_lower_bound(&mut self, bound: ControlParameter);

    fn set_upper_bound(&mut self, bound: ControlParameter);
}

/// Initializes one vector slot of a particle
pub trait PositionInitializer: Clone + Debug + Send + Sync {
    /// Overwrite the vector in `slot`
    ///
    /// Implementations validate their configuration before writing, so an
    /// error leaves the particle unchanged.
    fn initialize<R: Rng + ?Sized>(
        &self,
        slot: Slot,
        particle: &mut ParameterizedParticle,
        rng: &mut R,
    ) -> SwarmResult<()>;

    /// The bounds capability, if this initializer has one
    fn bounds_configurable(&mut self) -> Option<&mut dyn BoundsConfigurable> {
        None
    }
}
