//! Control parameters
//!
//! A control parameter is a scalar coefficient of the particle update rule that
//! is optimized alongside the position. It mirrors the three slots of a
//! position vector: its current `value`, a remembered `best_value` and its own
//! `velocity`.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SwarmResult;
use crate::parameter::bounds::ParameterBounds;
use crate::random::ProbabilityDistribution;

/// The four self-adapting control parameters a particle carries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Inertia weight (w)
    Inertia,
    /// Social acceleration coefficient (c2)
    SocialAcceleration,
    /// Cognitive acceleration coefficient (c1)
    CognitiveAcceleration,
    /// Velocity clamp
    Vmax,
}

impl ParameterKind {
    /// All kinds, in update order
    pub const ALL: [ParameterKind; 4] = [
        ParameterKind::Inertia,
        ParameterKind::SocialAcceleration,
        ParameterKind::CognitiveAcceleration,
        ParameterKind::Vmax,
    ];

    /// Lower-case name used in logs and error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Inertia => "inertia",
            Self::SocialAcceleration => "social acceleration",
            Self::CognitiveAcceleration => "cognitive acceleration",
            Self::Vmax => "vmax",
        }
    }

    /// Key under which this parameter's velocity is reported
    pub fn velocity_name(self) -> &'static str {
        match self {
            Self::Inertia => "InertiaVelocity",
            Self::SocialAcceleration => "SocialAccelerationVelocity",
            Self::CognitiveAcceleration => "CognitiveAccelerationVelocity",
            Self::Vmax => "VmaxVelocity",
        }
    }

    /// Inverse of [`velocity_name`](Self::velocity_name)
    pub fn from_velocity_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.velocity_name() == name)
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scalar quantity that is either adaptive or pinned by the user
///
/// Once `set_by_user` is true the value is pinned: [`update_parameter`] and
/// [`resample`] leave it alone. The flag is only cleared by replacing the whole
/// parameter.
///
/// [`update_parameter`]: ControlParameter::update_parameter
/// [`resample`]: ControlParameter::resample
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlParameter {
    value: f64,
    best_value: f64,
    velocity: f64,
    set_by_user: bool,
}

impl ControlParameter {
    /// Value given to parameters nobody configured
    pub const DEFAULT_VALUE: f64 = 0.1;

    /// Create an adaptive parameter with an initial value
    pub fn new(value: f64) -> Self {
        Self {
            value,
            best_value: value,
            velocity: 0.0,
            set_by_user: false,
        }
    }

    /// Create a parameter pinned to `value`
    pub fn constant(value: f64) -> Self {
        let mut parameter = Self::new(value);
        parameter.set_by_user = true;
        parameter
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Best value remembered for this parameter
    pub fn best_value(&self) -> f64 {
        self.best_value
    }

    /// The parameter's own velocity
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Whether a caller pinned the value
    pub fn was_set_by_user(&self) -> bool {
        self.set_by_user
    }

    /// Pin the parameter to `value`
    pub fn mark_user_set(&mut self, value: f64) {
        self.value = value;
        self.set_by_user = true;
    }

    /// Automatic write of the current value
    ///
    /// Returns `false` and leaves the value unchanged if the parameter is pinned.
    pub fn update_parameter(&mut self, value: f64) -> bool {
        if self.set_by_user {
            return false;
        }
        self.value = value;
        true
    }

    /// Record the best value seen so far
    pub fn set_best_value(&mut self, best_value: f64) {
        self.best_value = best_value;
    }

    /// Set the velocity of this parameter
    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    /// Draw a value from `bounds` without touching this parameter
    pub fn sample<D, R>(
        &self,
        distribution: &D,
        bounds: &ParameterBounds,
        rng: &mut R,
    ) -> SwarmResult<f64>
    where
        D: ProbabilityDistribution,
        R: Rng + ?Sized,
    {
        bounds.sample(distribution, rng, "control parameter")
    }

    /// Replace the value with a fresh sample unless the parameter is pinned
    ///
    /// Returns whether the value changed hands. Bounds are only validated for
    /// adaptive parameters, since a pinned one never samples.
    pub fn resample<D, R>(
        &mut self,
        distribution: &D,
        bounds: &ParameterBounds,
        rng: &mut R,
    ) -> SwarmResult<bool>
    where
        D: ProbabilityDistribution,
        R: Rng + ?Sized,
    {
        if self.set_by_user {
            return Ok(false);
        }
        let value = self.sample(distribution, bounds, rng)?;
        Ok(self.update_parameter(value))
    }
}

impl Default for ControlParameter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VALUE)
    }
}

impl From<f64> for ControlParameter {
    /// Values handed over directly by a caller are pinned
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}
