//! Problem traits
//!
//! The swarm kernel never evaluates anything itself; the outer loop hands
//! candidate solutions to a [`Problem`] and stores the result on the particle.

use std::fmt;

use crate::error::{SwarmError, SwarmResult};

/// An objective mapping a position vector to a scalar fitness
///
/// Fitness is minimized: lower values are better.
pub trait Problem: Send + Sync {
    /// Expected length of a solution, or `None` for any length
    fn dimension(&self) -> Option<usize>;

    /// Evaluate a solution that already passed [`check_solution`]
    fn evaluate_unchecked(&self, solution: &[f64]) -> f64;

    /// Evaluate `solution`, rejecting shapes the problem cannot handle
    fn evaluate(&self, solution: &[f64]) -> SwarmResult<f64> {
        check_solution(self.dimension(), solution)?;
        Ok(self.evaluate_unchecked(solution))
    }
}

/// Check a solution's length and that every component is finite
pub fn check_solution(dimension: Option<usize>, solution: &[f64]) -> SwarmResult<()> {
    if let Some(expected) = dimension {
        if solution.len() != expected {
            return Err(SwarmError::DimensionMismatch {
                expected,
                actual: solution.len(),
            });
        }
    }
    if let Some(index) = solution.iter().position(|x| !x.is_finite()) {
        return Err(SwarmError::TypeMismatch {
            expected: "finite real vector".to_string(),
            actual: format!("non-finite component at index {index}"),
        });
    }
    Ok(())
}

/// Problem backed by a closure
pub struct FnProblem<F>
where
    F: Fn(&[f64]) -> f64,
{
    f: F,
    dimension: Option<usize>,
}

impl<F> FnProblem<F>
where
    F: Fn(&[f64]) -> f64,
{
    /// Wrap a closure accepting solutions of any length
    pub fn new(f: F) -> Self {
        Self { f, dimension: None }
    }

    /// Wrap a closure accepting only `dimension`-long solutions
    pub fn with_dimension(dimension: usize, f: F) -> Self {
        Self {
            f,
            dimension: Some(dimension),
        }
    }
}

impl<F> fmt::Debug for FnProblem<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem")
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}

impl<F> Problem for FnProblem<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    fn evaluate_unchecked(&self, solution: &[f64]) -> f64 {
        (self.f)(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_problem_any_length() {
        let problem = FnProblem::new(|x: &[f64]| x.iter().sum());
        assert_eq!(problem.evaluate(&[1.0, 2.0]).unwrap(), 3.0);
        assert_eq!(problem.evaluate(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
        assert_eq!(problem.evaluate(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_fn_problem_dimension_checked() {
        let problem = FnProblem::with_dimension(2, |x: &[f64]| x[0] * x[1]);
        assert_eq!(problem.evaluate(&[3.0, 4.0]).unwrap(), 12.0);
        assert_eq!(
            problem.evaluate(&[3.0]).unwrap_err(),
            SwarmError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_non_finite_solution_rejected() {
        let problem = FnProblem::new(|x: &[f64]| x.iter().sum());
        let err = problem.evaluate(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, SwarmError::TypeMismatch { .. }));
        assert!(err.to_string().contains("index 1"));
    }
}
