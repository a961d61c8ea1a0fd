use std::f64::consts::PI;

use crate::distribution::domaingrid::DomainGrid;

/// φ(z) = (2π)^(-1/2) · e^(-z²/2)
pub fn standard_normal_density(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * PI).sqrt()
}

/// Standard normal density sampled at every grid point.
#[derive(Debug, Clone)]
pub struct DensityTable {
    values: Vec<f64>
}

impl DensityTable {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value(&self, i: usize) -> f64 {
        self.values[i]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub fn evaluate_density(grid: &DomainGrid) -> DensityTable {
    let values = grid
        .points()
        .iter()
        .map(|&z| standard_normal_density(z))
        .collect();
    DensityTable { values }
}
