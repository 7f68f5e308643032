//! Bound pairs
//!
//! A bound pair is itself made of two control parameters, so bounds can be
//! configured the same way as the quantities they constrain.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{SwarmError, SwarmResult};
use crate::parameter::control::ControlParameter;
use crate::random::ProbabilityDistribution;

/// Lower and upper bound for one tunable quantity (inclusive)
///
/// `lower <= upper` is not enforced on construction; it is checked by
/// [`validate`](Self::validate) whenever the pair is sampled, and an inverted
/// pair is rejected with [`SwarmError::InvalidBounds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBounds {
    lower: ControlParameter,
    upper: ControlParameter,
}

impl ParameterBounds {
    /// Lower bound used when nothing is configured
    pub const DEFAULT_LOWER: f64 = 0.1;
    /// Upper bound used when nothing is configured
    pub const DEFAULT_UPPER: f64 = 0.9;

    /// Create a bound pair from two parameters
    pub fn new(lower: ControlParameter, upper: ControlParameter) -> Self {
        Self { lower, upper }
    }

    /// Create a bound pair of two pinned values
    pub fn constant(lower: f64, upper: f64) -> Self {
        Self::new(ControlParameter::constant(lower), ControlParameter::constant(upper))
    }

    /// Create unit bounds [0, 1]
    pub fn unit() -> Self {
        Self::constant(0.0, 1.0)
    }

    /// Lower bound parameter
    pub fn lower(&self) -> &ControlParameter {
        &self.lower
    }

    /// Upper bound parameter
    pub fn upper(&self) -> &ControlParameter {
        &self.upper
    }

    /// Replace the lower bound parameter
    pub fn set_lower(&mut self, lower: ControlParameter) {
        self.lower = lower;
    }

    /// Replace the upper bound parameter
    pub fn set_upper(&mut self, upper: ControlParameter) {
        self.upper = upper;
    }

    /// Current value of the lower bound
    pub fn min(&self) -> f64 {
        self.lower.value()
    }

    /// Current value of the upper bound
    pub fn max(&self) -> f64 {
        self.upper.value()
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Get the center point
    pub fn center(&self) -> f64 {
        (self.min() + self.max()) / 2.0
    }

    /// Check if a value is within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Reject non-finite, inverted or unrepresentably wide pairs
    pub fn validate(&self, quantity: &str) -> SwarmResult<()> {
        let (lower, upper) = (self.min(), self.max());
        if lower <= upper && (upper - lower).is_finite() {
            Ok(())
        } else {
            tracing::warn!(quantity, lower, upper, "rejecting invalid bound pair");
            Err(SwarmError::invalid_bounds(quantity, lower, upper))
        }
    }

    /// Validate, then draw one value in `[min, max]`
    pub fn sample<D, R>(&self, distribution: &D, rng: &mut R, quantity: &str) -> SwarmResult<f64>
    where
        D: ProbabilityDistribution,
        R: Rng + ?Sized,
    {
        self.validate(quantity)?;
        Ok(distribution.sample(rng, self.min(), self.max()))
    }
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self::constant(Self::DEFAULT_LOWER, Self::DEFAULT_UPPER)
    }
}

impl From<(f64, f64)> for ParameterBounds {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::constant(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::UniformDistribution;

    #[test]
    fn test_bounds_default() {
        let b = ParameterBounds::default();
        assert_eq!(b.min(), 0.1);
        assert_eq!(b.max(), 0.9);
        assert!(b.lower().was_set_by_user());
    }

    #[test]
    fn test_bounds_range_and_center() {
        let b = ParameterBounds::from((-2.0, 6.0));
        assert_eq!(b.range(), 8.0);
        assert_eq!(b.center(), 2.0);
    }

    #[test]
    fn test_bounds_contains() {
        let b = ParameterBounds::from((-5.0, 5.0));
        assert!(b.contains(0.0));
        assert!(b.contains(-5.0));
        assert!(b.contains(5.0));
        assert!(!b.contains(-5.1));
        assert!(!b.contains(5.1));
    }

    #[test]
    fn test_bounds_validate() {
        assert!(ParameterBounds::from((0.1, 0.9)).validate("x").is_ok());
        assert!(ParameterBounds::from((0.5, 0.5)).validate("x").is_ok());
        assert_eq!(
            ParameterBounds::from((0.9, 0.1)).validate("inertia"),
            Err(SwarmError::invalid_bounds("inertia", 0.9, 0.1))
        );
        assert!(ParameterBounds::from((f64::NEG_INFINITY, 1.0))
            .validate("x")
            .is_err());
        assert!(ParameterBounds::from((0.0, f64::NAN)).validate("x").is_err());
    }

    #[test]
    fn test_bounds_width_overflow_rejected() {
        let b = ParameterBounds::from((-f64::MAX, f64::MAX));
        assert_eq!(
            b.validate("position"),
            Err(SwarmError::invalid_bounds("position", -f64::MAX, f64::MAX))
        );
        let mut rng = rand::thread_rng();
        assert!(b.sample(&UniformDistribution, &mut rng, "position").is_err());

        let half = ParameterBounds::from((0.0, f64::MAX));
        let v = half.sample(&UniformDistribution, &mut rng, "position").unwrap();
        assert!(half.contains(v));
    }

    #[test]
    fn test_bounds_follow_parameter_updates() {
        let mut b = ParameterBounds::new(ControlParameter::new(0.0), ControlParameter::new(1.0));
        let mut upper = b.upper().clone();
        upper.update_parameter(0.25);
        b.set_upper(upper);
        assert_eq!(b.max(), 0.25);
    }

    #[test]
    fn test_bounds_sample() {
        let mut rng = rand::thread_rng();
        let b = ParameterBounds::from((-3.0, 4.0));
        for _ in 0..500 {
            let v = b.sample(&UniformDistribution, &mut rng, "position").unwrap();
            assert!(b.contains(v));
        }
    }
}
