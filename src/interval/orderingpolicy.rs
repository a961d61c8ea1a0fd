use serde::Deserialize;

use crate::interval::interval::Interval;

/// What to do when a single-field edit leaves the canonical pair with a > b.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Keep the crossed pair and report Φ(b) − Φ(a), which is negative.
    #[default]
    AllowNegative,
    /// Keep the crossed pair but probe it as (min, max).
    Swap,
    /// Pin the edited bound onto the other one, so the pair never crosses.
    Clamp
}

impl OrderingPolicy {
    /// Value to store for a new lower bound, given the current upper bound.
    pub fn admit_a(&self, a: f64, b: f64) -> f64 {
        match self {
            OrderingPolicy::Clamp if a > b => b,
            _ => a
        }
    }

    /// Value to store for a new upper bound, given the current lower bound.
    pub fn admit_b(&self, a: f64, b: f64) -> f64 {
        match self {
            OrderingPolicy::Clamp if b < a => a,
            _ => b
        }
    }

    /// Bounds to hand to the prober for a canonical interval.
    pub fn probe_bounds(&self, interval: &Interval) -> (f64, f64) {
        match self {
            OrderingPolicy::Swap => interval.sorted(),
            _ => (interval.a(), interval.b())
        }
    }
}
