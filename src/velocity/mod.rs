//! Velocity updates
//!
//! This module provides the `VelocityProvider` trait and the bare-bones
//! provider that updates positions and control parameters by one rule.

pub mod bare_bones;
pub mod traits;

pub mod prelude {
    pub use super::bare_bones::*;
    pub use super::traits::*;
}
