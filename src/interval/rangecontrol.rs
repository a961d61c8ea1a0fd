use serde::Deserialize;

/// Bounds and granularity of the paired range control.
///
/// The control can only display values inside [min, max] with a ≤ b, so
/// anything mirrored into it or emitted from it passes through `constrain`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "RangeControlJsonProp")]
pub struct RangeControl {
    min: f64,
    max: f64,
    step: f64
}

#[derive(Deserialize)]
struct RangeControlJsonProp {
    min: f64,
    max: f64,
    step: f64
}

impl From<RangeControlJsonProp> for RangeControl {
    fn from(prop: RangeControlJsonProp) -> Self {
        RangeControl::new(prop.min, prop.max, prop.step)
    }
}

impl RangeControl {
    pub fn new(min: f64, max: f64, step: f64) -> RangeControl {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        RangeControl { min, max, step }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Finite extent with min < max and a positive finite step.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min < self.max
            && self.step.is_finite()
            && self.step > 0.0
    }

    /// Never panics, even on an invalid extent; NaN stays NaN.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            return x;
        }
        x.max(self.min).min(self.max)
    }

    /// Nearest position the handle can rest on, counted in steps from `min`.
    pub fn snap(&self, x: f64) -> f64 {
        if self.step <= 0.0 || !x.is_finite() {
            return self.clamp(x);
        }
        let steps = ((self.clamp(x) - self.min) / self.step).round();
        self.clamp(f64::mul_add(steps, self.step, self.min))
    }

    /// Clamp both handles into the control's extent and order them.
    pub fn constrain(&self, a: f64, b: f64) -> (f64, f64) {
        let a = self.clamp(a);
        let b = self.clamp(b);
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl Default for RangeControl {
    fn default() -> Self {
        RangeControl::new(-6.0, 6.0, 0.01)
    }
}
