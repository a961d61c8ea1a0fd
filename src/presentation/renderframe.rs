use crate::distribution::cumulativetable::CumulativeTable;
use crate::distribution::densitytable::DensityTable;
use crate::distribution::domaingrid::DomainGrid;
use crate::distribution::intervalprober::ProbeResult;
use crate::distribution::normaldistribution::NormalDistribution;
use crate::interval::interval::Interval;
use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use crate::math::curve::nonparametriccurve::tabulatedcurve::TabulatedCurve;

/// Read-only snapshot handed to a rendering surface after each interaction.
pub struct RenderFrame<'a> {
    distribution: &'a NormalDistribution,
    interval: Interval,
    result: ProbeResult
}

impl<'a> RenderFrame<'a> {
    pub fn new(distribution: &'a NormalDistribution,
               interval: Interval,
               result: ProbeResult) -> RenderFrame<'a> {
        RenderFrame { distribution, interval, result }
    }

    pub fn grid(&self) -> &'a DomainGrid {
        self.distribution.grid()
    }

    pub fn density(&self) -> &'a DensityTable {
        self.distribution.density()
    }

    pub fn cumulative(&self) -> &'a CumulativeTable {
        self.distribution.cumulative()
    }

    pub fn density_curve(&self) -> TabulatedCurve<'a> {
        self.distribution.density_curve()
    }

    pub fn cumulative_curve(&self) -> TabulatedCurve<'a> {
        self.distribution.cumulative_curve()
    }

    /// Canonical interval, literal values.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn result(&self) -> &ProbeResult {
        &self.result
    }

    /// Density points under the shaded area, between the probed bounds.
    /// Empty when a crossed pair was probed as is.
    pub fn shaded_region(&self) -> Vec<Point2D> {
        let (lo, hi) = self.result.probed_bounds();
        self.density_curve().points_between(lo, hi)
    }

    /// (a, Φ(a)) and (b, Φ(b)) on the cumulative curve.
    pub fn cdf_markers(&self) -> [Point2D; 2] {
        [
            Point2D::new(self.result.a(), self.result.phi_a()),
            Point2D::new(self.result.b(), self.result.phi_b())
        ]
    }
}

/// Anything that draws the density and cumulative plots.
pub trait RenderingSurface {
    fn render(&mut self, frame: &RenderFrame<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::cumulativetable::IntegrationRule;

    #[test]
    fn test_shaded_region_and_markers() {
        let dist = NormalDistribution::new(3.0, 0.5, IntegrationRule::Rectangle).unwrap();
        let result = dist.probe(-1.0, 0.5);
        let frame = RenderFrame::new(&dist, Interval::new(-1.0, 0.5), result);
        let xs: Vec<f64> = frame.shaded_region().iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5]);
        let [lo, hi] = frame.cdf_markers();
        assert_eq!(lo, Point2D::new(-1.0, result.phi_a()));
        assert_eq!(hi, Point2D::new(0.5, result.phi_b()));
    }

    #[test]
    fn test_crossed_bounds_shade_nothing() {
        let dist = NormalDistribution::new(3.0, 0.5, IntegrationRule::Rectangle).unwrap();
        let frame = RenderFrame::new(&dist, Interval::new(1.0, -1.0), dist.probe(1.0, -1.0));
        assert!(frame.shaded_region().is_empty());
        assert_eq!(frame.grid().len(), 12);
    }

    #[test]
    fn test_swapped_result_shades_sorted_bounds() {
        let dist = NormalDistribution::new(3.0, 0.5, IntegrationRule::Rectangle).unwrap();
        let result = dist.probe(-1.0, 1.0).with_literal_bounds(1.0, -1.0);
        let frame = RenderFrame::new(&dist, Interval::new(1.0, -1.0), result);
        let xs: Vec<f64> = frame.shaded_region().iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        let [a, b] = frame.cdf_markers();
        assert_eq!(a, Point2D::new(1.0, dist.prober().cdf(1.0)));
        assert_eq!(b, Point2D::new(-1.0, dist.prober().cdf(-1.0)));
    }
}
