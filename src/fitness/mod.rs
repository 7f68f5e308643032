//! Problems and benchmarks
//!
//! This module provides the problem abstraction consumed by the outer
//! optimization loop and a few benchmark functions.

pub mod benchmarks;
pub mod traits;

pub mod prelude {
    pub use super::benchmarks::*;
    pub use super::traits::*;
}
