/// A real function of one variable that can be sampled anywhere on the real
/// line, together with its first derivative.
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}
