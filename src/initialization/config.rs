//! Parameter-inclusive initialization configuration
//!
//! All defaults and overrides of the strategy live in this one struct, so an
//! experiment template is visible at a single call site and can be stored as
//! JSON.

use serde::{Deserialize, Serialize};

use crate::error::{SwarmError, SwarmResult};
use crate::parameter::bounds::ParameterBounds;
use crate::parameter::control::{ControlParameter, ParameterKind};

/// Configuration of [`ParameterInclusiveInitializer`](super::ParameterInclusiveInitializer)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterInclusiveConfig {
    /// Inertia weight handed to particles
    pub inertia: ControlParameter,
    /// Social acceleration handed to particles
    pub social_acceleration: ControlParameter,
    /// Cognitive acceleration handed to particles
    pub cognitive_acceleration: ControlParameter,
    /// Velocity clamp handed to particles
    pub vmax: ControlParameter,
    /// Sampling range of the inertia weight
    pub inertia_bounds: ParameterBounds,
    /// Sampling range of the social acceleration
    pub social_bounds: ParameterBounds,
    /// Sampling range of the cognitive acceleration
    pub cognitive_bounds: ParameterBounds,
    /// Sampling range of the velocity clamp
    pub vmax_bounds: ParameterBounds,
    /// Lower end of the position bounds given to the delegate initializer
    pub lower_bound: ControlParameter,
    /// Upper end of the position bounds given to the delegate initializer
    pub upper_bound: ControlParameter,
}

impl Default for ParameterInclusiveConfig {
    fn default() -> Self {
        Self {
            inertia: ControlParameter::default(),
            social_acceleration: ControlParameter::default(),
            cognitive_acceleration: ControlParameter::default(),
            vmax: ControlParameter::default(),
            inertia_bounds: ParameterBounds::default(),
            social_bounds: ParameterBounds::default(),
            cognitive_bounds: ParameterBounds::default(),
            vmax_bounds: ParameterBounds::default(),
            lower_bound: ControlParameter::constant(ParameterBounds::DEFAULT_LOWER),
            upper_bound: ControlParameter::constant(ParameterBounds::DEFAULT_UPPER),
        }
    }
}

impl ParameterInclusiveConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> SwarmResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SwarmError::Configuration(format!("Failed to parse configuration: {e}")))
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json(&self) -> SwarmResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SwarmError::Configuration(format!("Failed to serialize configuration: {e}"))
        })
    }

    /// Parameter of the given kind
    pub fn parameter(&self, kind: ParameterKind) -> &ControlParameter {
        match kind {
            ParameterKind::Inertia => &self.inertia,
            ParameterKind::SocialAcceleration => &self.social_acceleration,
            ParameterKind::CognitiveAcceleration => &self.cognitive_acceleration,
            ParameterKind::Vmax => &self.vmax,
        }
    }

    /// Mutable parameter of the given kind
    pub fn parameter_mut(&mut self, kind: ParameterKind) -> &mut ControlParameter {
        match kind {
            ParameterKind::Inertia => &mut self.inertia,
            ParameterKind::SocialAcceleration => &mut self.social_acceleration,
            ParameterKind::CognitiveAcceleration => &mut self.cognitive_acceleration,
            ParameterKind::Vmax => &mut self.vmax,
        }
    }

    /// Sampling range of the given parameter
    pub fn bounds(&self, kind: ParameterKind) -> &ParameterBounds {
        match kind {
            ParameterKind::Inertia => &self.inertia_bounds,
            ParameterKind::SocialAcceleration => &self.social_bounds,
            ParameterKind::CognitiveAcceleration => &self.cognitive_bounds,
            ParameterKind::Vmax => &self.vmax_bounds,
        }
    }

    /// Mutable sampling range of the given parameter
    pub fn bounds_mut(&mut self, kind: ParameterKind) -> &mut ParameterBounds {
        match kind {
            ParameterKind::Inertia => &mut self.inertia_bounds,
            ParameterKind::SocialAcceleration => &mut self.social_bounds,
            ParameterKind::CognitiveAcceleration => &mut self.cognitive_bounds,
            ParameterKind::Vmax => &mut self.vmax_bounds,
        }
    }

    /// Position bound pair assembled from `lower_bound` and `upper_bound`
    pub fn position_bounds(&self) -> ParameterBounds {
        ParameterBounds::new(self.lower_bound.clone(), self.upper_bound.clone())
    }

    /// Set the parameter of the given kind
    pub fn with_parameter(mut self, kind: ParameterKind, parameter: ControlParameter) -> Self {
        *self.parameter_mut(kind) = parameter;
        self
    }

    /// Pin the parameter of the given kind to `value`
    pub fn with_fixed(self, kind: ParameterKind, value: f64) -> Self {
        self.with_parameter(kind, ControlParameter::constant(value))
    }

    /// Set the sampling range of the given parameter
    pub fn with_bounds(mut self, kind: ParameterKind, bounds: impl Into<ParameterBounds>) -> Self {
        *self.bounds_mut(kind) = bounds.into();
        self
    }

    /// Set the same sampling range for all four parameters
    pub fn with_all_bounds(mut self, bounds: impl Into<ParameterBounds>) -> Self {
        let bounds = bounds.into();
        for kind in ParameterKind::ALL {
            *self.bounds_mut(kind) = bounds.clone();
        }
        self
    }

    /// Set the position bounds
    pub fn with_position_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = ControlParameter::constant(lower);
        self.upper_bound = ControlParameter::constant(upper);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParameterInclusiveConfig::default();
        for kind in ParameterKind::ALL {
            assert_eq!(config.parameter(kind).value(), 0.1);
            assert!(!config.parameter(kind).was_set_by_user());
            assert_eq!(config.bounds(kind).min(), 0.1);
            assert_eq!(config.bounds(kind).max(), 0.9);
        }
        assert_eq!(config.position_bounds(), ParameterBounds::from((0.1, 0.9)));
    }

    #[test]
    fn test_builder() {
        let config = ParameterInclusiveConfig::new()
            .with_fixed(ParameterKind::Inertia, 0.729)
            .with_bounds(ParameterKind::Vmax, (1.0, 4.0))
            .with_position_bounds(-5.0, 5.0);

        assert!(config.inertia.was_set_by_user());
        assert_eq!(config.inertia.value(), 0.729);
        assert_eq!(config.vmax_bounds.max(), 4.0);
        assert_eq!(config.social_bounds.max(), 0.9);
        assert_eq!(config.lower_bound.value(), -5.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = ParameterInclusiveConfig::new()
            .with_fixed(ParameterKind::SocialAcceleration, 1.49)
            .with_all_bounds((0.0, 2.0));
        let json = config.to_json().unwrap();
        assert_eq!(ParameterInclusiveConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let json = r#"{ "vmax": { "value": 2.0, "best_value": 2.0, "velocity": 0.0, "set_by_user": true } }"#;
        let config = ParameterInclusiveConfig::from_json(json).unwrap();
        assert!(config.vmax.was_set_by_user());
        assert_eq!(config.vmax.value(), 2.0);
        assert_eq!(config.inertia, ControlParameter::default());
    }

    #[test]
    fn test_json_invalid() {
        let err = ParameterInclusiveConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SwarmError::Configuration(_)));
    }
}
