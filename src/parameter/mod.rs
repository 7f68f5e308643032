//! Self-adapting control parameters
//!
//! This module provides the scalar `ControlParameter`, the `ParameterBounds`
//! pair that constrains its sampling, and the `ParameterKind` naming the four
//! parameters a particle carries.

pub mod bounds;
pub mod control;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::control::*;
}
