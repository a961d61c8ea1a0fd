use tracing::info;

use crate::distribution::cumulativetable::{
    integrate_cumulative,
    CumulativeTable,
    IntegrationRule
};
use crate::distribution::densitytable::{
    evaluate_density,
    standard_normal_density,
    DensityTable
};
use crate::distribution::domaingrid::{
    build_grid,
    DomainGrid,
    GridError
};
use crate::distribution::intervalprober::{
    IntervalProber,
    ProbeResult
};
use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::tabulatedcurve::TabulatedCurve;

/// Grid, density and cumulative tables of the standard normal, built once and
/// read-only afterwards.
pub struct NormalDistribution {
    grid: DomainGrid,
    density: DensityTable,
    cumulative: CumulativeTable
}

impl NormalDistribution {
    pub fn new(half_width: f64,
               step: f64,
               rule: IntegrationRule) -> Result<NormalDistribution, GridError> {
        let grid = build_grid(half_width, step)?;
        let density = evaluate_density(&grid);
        let cumulative = integrate_cumulative(&grid, &density, rule);
        info!(
            half_width,
            step,
            points = grid.len(),
            rule = ?cumulative.rule(),
            "built standard normal tables"
        );
        Ok(NormalDistribution { grid, density, cumulative })
    }

    pub fn grid(&self) -> &DomainGrid {
        &self.grid
    }

    pub fn density(&self) -> &DensityTable {
        &self.density
    }

    pub fn cumulative(&self) -> &CumulativeTable {
        &self.cumulative
    }

    pub fn prober(&self) -> IntervalProber<'_> {
        IntervalProber::new(&self.grid, &self.cumulative)
    }

    pub fn probe(&self, a: f64, b: f64) -> ProbeResult {
        self.prober().probe(a, b)
    }

    pub fn density_curve(&self) -> TabulatedCurve<'_> {
        TabulatedCurve::new(self.grid.points(), self.density.values())
            .expect("density table is index-aligned with a non-empty grid")
    }

    pub fn cumulative_curve(&self) -> TabulatedCurve<'_> {
        TabulatedCurve::new(self.grid.points(), self.cumulative.values())
            .expect("cumulative table is index-aligned with a non-empty grid")
    }
}

/// Φ from the table (same snapping as the prober), φ from the closed form.
impl Curve for NormalDistribution {
    fn value(&self, x: f64) -> f64 {
        self.prober().cdf(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        standard_normal_density(x)
    }
}
