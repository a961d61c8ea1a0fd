use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};

/// Index-aligned view over a sample grid and one table of values.
pub struct TabulatedCurve<'a> {
    xs: &'a [f64],
    ys: &'a [f64]
}

impl<'a> TabulatedCurve<'a> {
    /// Returns `None` when the two slices are not index-aligned or are empty.
    pub fn new(xs: &'a [f64], ys: &'a [f64]) -> Option<TabulatedCurve<'a>> {
        if xs.is_empty() || xs.len() != ys.len() {
            return None;
        }
        Some(TabulatedCurve { xs, ys })
    }

    /// Points whose abscissa lies in the closed range [lo, hi].
    pub fn points_between(&self, lo: f64, hi: f64) -> Vec<Point2D> {
        let start = self.xs.partition_point(|&x| x < lo);
        let end = self.xs.partition_point(|&x| x <= hi);
        if start >= end {
            return Vec::new();
        }
        (start..end).map(|i| self.point(i)).collect()
    }
}

impl NonparametricCurve for TabulatedCurve<'_> {
    fn len(&self) -> usize {
        self.xs.len()
    }

    fn point(&self, i: usize) -> Point2D {
        Point2D::new(self.xs[i], self.ys[i])
    }
}
