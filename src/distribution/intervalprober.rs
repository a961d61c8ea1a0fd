use crate::distribution::cumulativetable::CumulativeTable;
use crate::distribution::domaingrid::DomainGrid;

/// Result of probing [a, b]. `a` and `b` are the literal bounds that were
/// asked for, not the grid points they snapped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeResult {
    a: f64,
    b: f64,
    phi_a: f64,
    phi_b: f64,
    prob: f64,
    swapped: bool
}

impl ProbeResult {
    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn phi_a(&self) -> f64 {
        self.phi_a
    }

    pub fn phi_b(&self) -> f64 {
        self.phi_b
    }

    /// Φ(b) − Φ(a); negative when a > b.
    pub fn prob(&self) -> f64 {
        self.prob
    }

    /// True when `prob` was taken as Φ(a) − Φ(b) because the literal pair
    /// is crossed and was probed in sorted order.
    pub fn is_swapped(&self) -> bool {
        self.swapped
    }

    /// Bounds in the order their Φ values were subtracted, as (lower, upper).
    pub fn probed_bounds(&self) -> (f64, f64) {
        if self.swapped {
            (self.b, self.a)
        } else {
            (self.a, self.b)
        }
    }

    /// Relabels a result probed over the sorted form of `(a, b)` with the
    /// literal pair, keeping each Φ attached to its own bound.
    pub fn with_literal_bounds(self, a: f64, b: f64) -> ProbeResult {
        let swapped = a > b && self.a == b && self.b == a;
        if swapped {
            ProbeResult { a, b, phi_a: self.phi_b, phi_b: self.phi_a, prob: self.prob, swapped }
        } else {
            self
        }
    }
}

/// Table lookup of Φ and interval probability.
///
/// A bound snaps to the first grid point at or above it, so results carry a
/// discretization bias of at most one step. Bounds below the grid read 0 and
/// bounds at or past its upper end read 1. Interval probability is always
/// the difference of two table lookups; the density is never re-integrated
/// per query.
pub struct IntervalProber<'a> {
    grid: &'a DomainGrid,
    cumulative: &'a CumulativeTable
}

impl<'a> IntervalProber<'a> {
    pub fn new(grid: &'a DomainGrid, cumulative: &'a CumulativeTable) -> IntervalProber<'a> {
        IntervalProber { grid, cumulative }
    }

    pub fn cdf(&self, bound: f64) -> f64 {
        let i = self.grid.insertion_index(bound);
        if i == 0 {
            0.0
        } else if i >= self.cumulative.len() {
            1.0
        } else {
            self.cumulative.value(i)
        }
    }

    pub fn probe(&self, a: f64, b: f64) -> ProbeResult {
        let phi_a = self.cdf(a);
        let phi_b = self.cdf(b);
        let prob = phi_b - phi_a;
        tracing::debug!(a, b, phi_a, phi_b, prob, "probed interval");
        ProbeResult { a, b, phi_a, phi_b, prob, swapped: false }
    }
}
