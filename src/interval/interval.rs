use serde::Deserialize;

/// The canonical pair of bounds. Ordering is not enforced here; see
/// `OrderingPolicy` for how a crossed pair is handled.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Interval {
    a: f64,
    b: f64
}

impl Interval {
    pub fn new(a: f64, b: f64) -> Interval {
        Interval { a, b }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn set_a(&mut self, a: f64) {
        self.a = a;
    }

    pub fn set_b(&mut self, b: f64) {
        self.b = b;
    }

    pub fn is_ordered(&self) -> bool {
        self.a <= self.b
    }

    /// Bounds in ascending order.
    pub fn sorted(&self) -> (f64, f64) {
        if self.is_ordered() {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::new(-1.96, 1.96)
    }
}
