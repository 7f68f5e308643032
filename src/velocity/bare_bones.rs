//! Bare-bones velocity
//!
//! The bare-bones rule drops the inertia and acceleration terms of the
//! classic update. For each dimension two random coefficients `r₁, r₂` are
//! drawn and their mean sets how far the result moves from the local guide
//! `l` towards the global guide `g`:
//!
//! ```text
//! v = l + ((r₁ + r₂) / 2)·(g - l)
//! ```
//!
//! With coefficients in `(0, 1)` `v` lies strictly between two distinct
//! guides. Control parameters use the same rule, with each parameter's own
//! `best_value` as `l` and the neighbourhood best's `best_value` as `g`.
//!
//! Kennedy's original formulation also perturbs `v` with a Gaussian of
//! deviation `|l - g|`; that step is opt-in through
//! [`BareBonesVelocity::with_gaussian_spread`].

use rand::Rng;

use crate::error::{SwarmError, SwarmResult};
use crate::guide::{GuideProvider, NeighbourhoodBestGuide, PersonalBestGuide};
use crate::parameter::bounds::ParameterBounds;
use crate::parameter::control::ParameterKind;
use crate::particle::particle::ParameterizedParticle;
use crate::particle::swarm::Swarm;
use crate::random::{GaussianDistribution, ProbabilityDistribution, UniformDistribution};
use crate::velocity::traits::{ParameterVelocities, VelocityProvider};

/// Bare-bones velocity provider
#[derive(Clone, Debug)]
pub struct BareBonesVelocity<
    L = PersonalBestGuide,
    G = NeighbourhoodBestGuide,
    D = UniformDistribution,
> {
    local_guide: L,
    global_guide: G,
    distribution: D,
    coefficient_bounds: ParameterBounds,
    gaussian_spread: bool,
}

impl BareBonesVelocity {
    /// Personal best against neighbourhood best, uniform coefficients in [0, 1]
    pub fn new() -> Self {
        Self::with_guides(PersonalBestGuide, NeighbourhoodBestGuide, UniformDistribution)
    }
}

impl Default for BareBonesVelocity {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, G, D> BareBonesVelocity<L, G, D>
where
    L: GuideProvider,
    G: GuideProvider,
    D: ProbabilityDistribution,
{
    /// Create a provider with explicit guides and coefficient distribution
    pub fn with_guides(local_guide: L, global_guide: G, distribution: D) -> Self {
        Self {
            local_guide,
            global_guide,
            distribution,
            coefficient_bounds: ParameterBounds::unit(),
            gaussian_spread: false,
        }
    }

    /// Range the two random coefficients are drawn from
    ///
    /// Upper ends above 1 let the result overshoot the global guide.
    pub fn with_coefficient_bounds(mut self, bounds: impl Into<ParameterBounds>) -> Self {
        self.coefficient_bounds = bounds.into();
        self
    }

    /// Perturb the weighted mean with a Gaussian of deviation `|l - g|`
    pub fn with_gaussian_spread(mut self, enabled: bool) -> Self {
        self.gaussian_spread = enabled;
        self
    }

    /// Guide providing the local reference
    pub fn local_guide(&self) -> &L {
        &self.local_guide
    }

    /// Guide providing the global reference
    pub fn global_guide(&self) -> &G {
        &self.global_guide
    }

    /// Distribution the coefficients are drawn from
    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    /// Replace the coefficient distribution
    pub fn set_distribution(&mut self, distribution: D) {
        self.distribution = distribution;
    }

    /// Current coefficient range
    pub fn coefficient_bounds(&self) -> &ParameterBounds {
        &self.coefficient_bounds
    }

    /// Whether the Gaussian perturbation is enabled
    pub fn gaussian_spread(&self) -> bool {
        self.gaussian_spread
    }

    fn validate(&self) -> SwarmResult<()> {
        self.coefficient_bounds.validate("velocity coefficients")?;
        if self.coefficient_bounds.min() < 0.0 {
            return Err(SwarmError::Configuration(format!(
                "velocity coefficients must be non-negative, lower bound is {}",
                self.coefficient_bounds.min()
            )));
        }
        Ok(())
    }

    /// Combine one local and one global guide value
    fn combine<R: Rng + ?Sized>(&self, local: f64, global: f64, rng: &mut R) -> f64 {
        let (low, high) = (self.coefficient_bounds.min(), self.coefficient_bounds.max());
        let r1 = self.distribution.sample(rng, low, high);
        let r2 = self.distribution.sample(rng, low, high);
        let step = (r1 + r2) / 2.0;
        let v = local + step * (global - local);

        if self.gaussian_spread {
            GaussianDistribution.sample(rng, v, (local - global).abs())
        } else {
            v
        }
    }
}

impl<L, G, D> VelocityProvider for BareBonesVelocity<L, G, D>
where
    L: GuideProvider,
    G: GuideProvider,
    D: ProbabilityDistribution,
{
    fn position_velocity<R: Rng + ?Sized>(
        &self,
        particle: &ParameterizedParticle,
        swarm: &Swarm,
        rng: &mut R,
    ) -> SwarmResult<Vec<f64>> {
        self.validate()?;
        let local = self.local_guide.position_guide(particle, swarm)?;
        let global = self.global_guide.position_guide(particle, swarm)?;
        if local.len() != global.len() {
            return Err(SwarmError::DimensionMismatch {
                expected: local.len(),
                actual: global.len(),
            });
        }

        Ok(local
            .iter()
            .zip(global.iter())
            .map(|(&l, &g)| self.combine(l, g, rng))
            .collect())
    }

    fn parameter_velocities<R: Rng + ?Sized>(
        &self,
        particle: &ParameterizedParticle,
        swarm: &Swarm,
        rng: &mut R,
    ) -> SwarmResult<ParameterVelocities> {
        self.validate()?;
        let mut velocities = ParameterVelocities::default();
        for kind in ParameterKind::ALL {
            let local = self.local_guide.parameter_guide(particle, swarm, kind)?;
            let global = self.global_guide.parameter_guide(particle, swarm, kind)?;
            velocities.set(kind, self.combine(local, global, rng));
        }
        tracing::trace!(?velocities, "computed control parameter velocities");
        Ok(velocities)
    }
}
