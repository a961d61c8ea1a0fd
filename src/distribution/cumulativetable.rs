use serde::Deserialize;

use crate::distribution::densitytable::DensityTable;
use crate::distribution::domaingrid::DomainGrid;

/// Running-sum rule used to accumulate the density into Φ.
///
/// `Rectangle` reproduces the reference figures (Σ_{k≤i} φ_k·h); `Trapezoid`
/// starts at 0 and shifts the fourth decimal of displayed values slightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationRule {
    #[default]
    Rectangle,
    Trapezoid
}

/// Monotone approximation of Φ at every grid point, bounded in [0, 1].
#[derive(Debug, Clone)]
pub struct CumulativeTable {
    rule: IntegrationRule,
    values: Vec<f64>
}

impl CumulativeTable {
    pub fn rule(&self) -> IntegrationRule {
        self.rule
    }

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

pub fn integrate_cumulative(grid: &DomainGrid,
                            density: &DensityTable,
                            rule: IntegrationRule) -> CumulativeTable {
    let h = grid.step();
    let phi = density.values();
    let mut values = Vec::with_capacity(phi.len());
    let mut running = 0.0_f64;

    for (i, &p) in phi.iter().enumerate() {
        let term = match rule {
            IntegrationRule::Rectangle => p * h,
            IntegrationRule::Trapezoid => {
                if i == 0 { 0.0 } else { 0.5 * (phi[i - 1] + p) * h }
            }
        };
        running += term;
        values.push(running.min(1.0));
    }

    CumulativeTable { rule, values }
}
