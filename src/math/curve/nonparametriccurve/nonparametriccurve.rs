#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// A curve known only at a finite, ordered set of abscissas.
pub trait NonparametricCurve {
    fn len(&self) -> usize;

    fn point(&self, i: usize) -> Point2D;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn points(&self) -> Vec<Point2D> {
        (0..self.len()).map(|i| self.point(i)).collect()
    }

    fn min_x(&self) -> f64 {
        self.point(0).x()
    }

    fn max_x(&self) -> f64 {
        self.point(self.len() - 1).x()
    }
}
