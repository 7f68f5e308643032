//! Parameter-inclusive initialization
//!
//! Initializes a particle's vector slots through a delegate position
//! initializer and, in the same call, its four control parameters. Parameters
//! the user pinned keep their value through every call; the others are
//! resampled from their own bound pair each time.
//!
//! A particle is typically built with three calls, one per [`Slot`]. Each call
//! resamples the strategy's parameters once and then writes them where the
//! slot says:
//!
//! | Slot | Written on the particle |
//! |---|---|
//! | `CandidateSolution` | the four parameters, replaced wholesale |
//! | `BestPosition` | each parameter's `best_value` |
//! | `Velocity` | each parameter's `velocity` |

use rand::Rng;

use crate::error::SwarmResult;
use crate::initialization::bounded_random::BoundedRandomInitializer;
use crate::initialization::config::ParameterInclusiveConfig;
use crate::initialization::traits::PositionInitializer;
use crate::parameter::bounds::ParameterBounds;
use crate::parameter::control::{ControlParameter, ParameterKind};
use crate::particle::particle::{ParameterizedParticle, Slot};
use crate::random::{ProbabilityDistribution, UniformDistribution};

/// Initialization strategy covering positions and control parameters
///
/// Cloning yields a fully independent strategy, which is how a configured
/// template is stamped out across a swarm.
#[derive(Clone, Debug)]
pub struct ParameterInclusiveInitializer<P = BoundedRandomInitializer, D = UniformDistribution> {
    config: ParameterInclusiveConfig,
    delegate: P,
    distribution: D,
}

impl ParameterInclusiveInitializer {
    /// Default configuration with a uniform bounded delegate
    pub fn new() -> Self {
        Self::from_config(ParameterInclusiveConfig::default())
    }

    /// Strategy over `config` with a uniform bounded delegate
    pub fn from_config(config: ParameterInclusiveConfig) -> Self {
        let delegate = BoundedRandomInitializer::new(config.position_bounds());
        Self::with_delegate(config, delegate, UniformDistribution)
    }
}

impl Default for ParameterInclusiveInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, D> ParameterInclusiveInitializer<P, D>
where
    P: PositionInitializer,
    D: ProbabilityDistribution,
{
    /// Strategy with an explicit delegate and parameter distribution
    pub fn with_delegate(config: ParameterInclusiveConfig, delegate: P, distribution: D) -> Self {
        Self {
            config,
            delegate,
            distribution,
        }
    }

    /// Initialize `slot` of `particle`
    ///
    /// Bounds are validated before anything is written; on error neither the
    /// particle nor this strategy has changed.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        slot: Slot,
        particle: &mut ParameterizedParticle,
        rng: &mut R,
    ) -> SwarmResult<()> {
        self.validate_parameter_bounds()?;

        let mut delegate = self.delegate.clone();
        if let Some(configurable) = delegate.bounds_configurable() {
            configurable.set_lower_bound(self.config.lower_bound.clone());
            configurable.set_upper_bound(self.config.upper_bound.clone());
        }
        delegate.initialize(slot, particle, rng)?;
        self.delegate = delegate;

        self.initialize_parameters(rng)?;

        match slot {
            Slot::CandidateSolution => {
                for kind in ParameterKind::ALL {
                    particle.set_parameter(kind, self.config.parameter(kind).clone());
                }
            }
            Slot::BestPosition => {
                for kind in ParameterKind::ALL {
                    let value = self.config.parameter(kind).value();
                    particle.parameter_mut(kind).set_best_value(value);
                }
            }
            Slot::Velocity => {
                for kind in ParameterKind::ALL {
                    let value = self.config.parameter(kind).value();
                    particle.parameter_mut(kind).set_velocity(value);
                }
            }
        }

        tracing::debug!(
            %slot,
            inertia = self.config.inertia.value(),
            social = self.config.social_acceleration.value(),
            cognitive = self.config.cognitive_acceleration.value(),
            vmax = self.config.vmax.value(),
            "initialized particle"
        );
        Ok(())
    }

    /// Every bound pair that will be sampled must be valid
    fn validate_parameter_bounds(&self) -> SwarmResult<()> {
        for kind in ParameterKind::ALL {
            if !self.config.parameter(kind).was_set_by_user() {
                self.config.bounds(kind).validate(kind.name())?;
            }
        }
        Ok(())
    }

    fn initialize_parameters<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SwarmResult<()> {
        for kind in ParameterKind::ALL {
            let bounds = self.config.bounds(kind).clone();
            let parameter = self.config.parameter_mut(kind);
            if !parameter.resample(&self.distribution, &bounds, rng)? {
                tracing::trace!(parameter = kind.name(), "keeping user-set value");
            }
        }
        Ok(())
    }

    /// Current configuration
    pub fn config(&self) -> &ParameterInclusiveConfig {
        &self.config
    }

    /// Consume the strategy and return its configuration
    pub fn into_config(self) -> ParameterInclusiveConfig {
        self.config
    }

    /// Parameter of the given kind
    pub fn parameter(&self, kind: ParameterKind) -> &ControlParameter {
        self.config.parameter(kind)
    }

    /// Replace the parameter of the given kind
    ///
    /// Pass [`ControlParameter::constant`] to pin it, or
    /// [`ControlParameter::new`] to let it adapt.
    pub fn set_parameter(&mut self, kind: ParameterKind, parameter: ControlParameter) {
        *self.config.parameter_mut(kind) = parameter;
    }

    /// Inertia weight handed to particles
    pub fn inertia(&self) -> &ControlParameter {
        &self.config.inertia
    }

    /// Replace the inertia weight
    pub fn set_inertia(&mut self, parameter: ControlParameter) {
        self.config.inertia = parameter;
    }

    /// Social acceleration handed to particles
    pub fn social_acceleration(&self) -> &ControlParameter {
        &self.config.social_acceleration
    }

    /// Replace the social acceleration
    pub fn set_social_acceleration(&mut self, parameter: ControlParameter) {
        self.config.social_acceleration = parameter;
    }

    /// Cognitive acceleration handed to particles
    pub fn cognitive_acceleration(&self) -> &ControlParameter {
        &self.config.cognitive_acceleration
    }

    /// Replace the cognitive acceleration
    pub fn set_cognitive_acceleration(&mut self, parameter: ControlParameter) {
        self.config.cognitive_acceleration = parameter;
    }

    /// Velocity clamp handed to particles
    pub fn vmax(&self) -> &ControlParameter {
        &self.config.vmax
    }

    /// Replace the velocity clamp
    pub fn set_vmax(&mut self, parameter: ControlParameter) {
        self.config.vmax = parameter;
    }

    /// Sampling range of the given parameter
    pub fn parameter_bounds(&self, kind: ParameterKind) -> &ParameterBounds {
        self.config.bounds(kind)
    }

    /// Replace the sampling range of the given parameter
    pub fn set_parameter_bounds(&mut self, kind: ParameterKind, bounds: ParameterBounds) {
        *self.config.bounds_mut(kind) = bounds;
    }

    /// Lower end of the given parameter's sampling range
    pub fn lower_bound_of(&self, kind: ParameterKind) -> &ControlParameter {
        self.config.bounds(kind).lower()
    }

    /// Replace the lower end of the given parameter's sampling range
    pub fn set_lower_bound_of(&mut self, kind: ParameterKind, bound: ControlParameter) {
        self.config.bounds_mut(kind).set_lower(bound);
    }

    /// Upper end of the given parameter's sampling range
    pub fn upper_bound_of(&self, kind: ParameterKind) -> &ControlParameter {
        self.config.bounds(kind).upper()
    }

    /// Replace the upper end of the given parameter's sampling range
    pub fn set_upper_bound_of(&mut self, kind: ParameterKind, bound: ControlParameter) {
        self.config.bounds_mut(kind).set_upper(bound);
    }

    /// Lower end of the position bounds
    pub fn lower_bound(&self) -> &ControlParameter {
        &self.config.lower_bound
    }

    /// Replace the lower end of the position bounds
    pub fn set_lower_bound(&mut self, bound: ControlParameter) {
        self.config.lower_bound = bound;
    }

    /// Upper end of the position bounds
    pub fn upper_bound(&self) -> &ControlParameter {
        &self.config.upper_bound
    }

    /// Replace the upper end of the position bounds
    pub fn set_upper_bound(&mut self, bound: ControlParameter) {
        self.config.upper_bound = bound;
    }

    /// Initializer used for the vector slots
    pub fn delegate(&self) -> &P {
        &self.delegate
    }

    /// Replace the position initializer
    pub fn set_delegate(&mut self, delegate: P) {
        self.delegate = delegate;
    }

    /// Distribution the parameters are sampled from
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    /// Replace the parameter distribution
    pub fn set_distribution(&mut self, distribution: D) {
        self.distribution = distribution;
    }
}
