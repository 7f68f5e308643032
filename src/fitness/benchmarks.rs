//! Benchmark functions
//!
//! Standard test functions for exercising the swarm. All are minimized.

use crate::fitness::traits::Problem;

/// Trait for benchmark functions
pub trait BenchmarkFunction: Problem {
    /// Name of the benchmark function
    fn name(&self) -> &'static str;

    /// Search space bounds (min, max)
    fn bounds(&self) -> (f64, f64);

    /// Optimal (minimum) fitness value
    fn optimal_fitness(&self) -> f64;

    /// Optimal solution (if known)
    fn optimal_solution(&self) -> Option<Vec<f64>>;
}

/// Sphere function: f(x) = Σxᵢ²
///
/// Unimodal, convex, separable. Optimum at origin.
#[derive(Clone, Debug)]
pub struct Sphere {
    dimension: usize,
}

impl Sphere {
    /// Create a new Sphere function
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Problem for Sphere {
    fn dimension(&self) -> Option<usize> {
        Some(self.dimension)
    }

    fn evaluate_unchecked(&self, x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }
}

impl BenchmarkFunction for Sphere {
    fn name(&self) -> &'static str {
        "Sphere"
    }

    fn bounds(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }

    fn optimal_fitness(&self) -> f64 {
        0.0
    }

    fn optimal_solution(&self) -> Option<Vec<f64>> {
        Some(vec![0.0; self.dimension])
    }
}

/// Bukin function N.4: f(x) = 100·x₂² + 0.01·|x₁ + 10|
///
/// Two-dimensional, non-differentiable along x₁ = -10. Optimum at (-10, 0).
#[derive(Clone, Copy, Debug, Default)]
pub struct Bukin4;

impl Bukin4 {
    /// Create a new Bukin N.4 function
    pub fn new() -> Self {
        Self
    }
}

impl Problem for Bukin4 {
    fn dimension(&self) -> Option<usize> {
        Some(2)
    }

    fn evaluate_unchecked(&self, x: &[f64]) -> f64 {
        100.0 * x[1] * x[1] + 0.01 * (x[0] + 10.0).abs()
    }
}

impl BenchmarkFunction for Bukin4 {
    fn name(&self) -> &'static str {
        "Bukin4"
    }

    /// The domain is x₁ ∈ [-15, -5], x₂ ∈ [-3, 3]; this is the enclosing box
    fn bounds(&self) -> (f64, f64) {
        (-15.0, 3.0)
    }

    fn optimal_fitness(&self) -> f64 {
        0.0
    }

    fn optimal_solution(&self) -> Option<Vec<f64>> {
        Some(vec![-10.0, 0.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwarmError;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_at_optimum() {
        let sphere = Sphere::new(3);
        assert_relative_eq!(sphere.evaluate(&[0.0, 0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_sphere_non_optimum() {
        let sphere = Sphere::new(3);
        // 1 + 4 + 9
        assert_relative_eq!(sphere.evaluate(&[1.0, 2.0, 3.0]).unwrap(), 14.0);
    }

    #[test]
    fn test_sphere_metadata() {
        let sphere = Sphere::new(5);
        assert_eq!(sphere.name(), "Sphere");
        assert_eq!(sphere.dimension(), Some(5));
        assert_eq!(sphere.bounds(), (-5.12, 5.12));
        assert_relative_eq!(sphere.optimal_fitness(), 0.0);
        assert_eq!(sphere.optimal_solution(), Some(vec![0.0; 5]));
    }

    #[test]
    fn test_bukin4_values() {
        let bukin = Bukin4::new();
        assert_relative_eq!(bukin.evaluate(&[1.0, 2.0]).unwrap(), 400.11, epsilon = 1e-10);
        assert_relative_eq!(bukin.evaluate(&[-10.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_bukin4_optimum_matches_metadata() {
        let bukin = Bukin4::new();
        let optimum = bukin.optimal_solution().unwrap();
        assert_relative_eq!(bukin.evaluate(&optimum).unwrap(), bukin.optimal_fitness());
    }

    #[test]
    fn test_bukin4_rejects_wrong_dimension() {
        let bukin = Bukin4::new();
        assert_eq!(
            bukin.evaluate(&[1.0, 2.0, 3.0]).unwrap_err(),
            SwarmError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_benchmarks_as_trait_objects() {
        let problems: Vec<Box<dyn BenchmarkFunction>> =
            vec![Box::new(Sphere::new(2)), Box::new(Bukin4::new())];
        for problem in &problems {
            let optimum = problem.optimal_solution().unwrap();
            assert_relative_eq!(problem.evaluate(&optimum).unwrap(), problem.optimal_fitness());
        }
    }
}
