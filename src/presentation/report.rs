use std::fmt;

use crate::distribution::intervalprober::ProbeResult;
use crate::math::round::format_fixed;
use crate::presentation::renderframe::{
    RenderFrame,
    RenderingSurface
};

const BOUND_DIGITS: u32 = 2;
const PROBABILITY_DIGITS: u32 = 4;

/// The two formula lines shown under the plots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityReport {
    probability_line: String,
    cdf_line: String
}

impl ProbabilityReport {
    pub fn from_result(result: &ProbeResult) -> ProbabilityReport {
        let a = format_fixed(result.a(), BOUND_DIGITS);
        let b = format_fixed(result.b(), BOUND_DIGITS);
        let phi_a = format_fixed(result.phi_a(), PROBABILITY_DIGITS);
        let phi_b = format_fixed(result.phi_b(), PROBABILITY_DIGITS);
        let prob = format_fixed(result.prob(), PROBABILITY_DIGITS);
        let cdf_line = if result.is_swapped() {
            format!("Φ({a}) - Φ({b}) = {phi_a} - {phi_b} = {prob}")
        } else {
            format!("Φ({b}) - Φ({a}) = {phi_b} - {phi_a} = {prob}")
        };
        ProbabilityReport {
            probability_line: format!("P({a} ≤ Z ≤ {b}) = {prob}"),
            cdf_line
        }
    }

    pub fn probability_line(&self) -> &str {
        &self.probability_line
    }

    pub fn cdf_line(&self) -> &str {
        &self.cdf_line
    }
}

impl fmt::Display for ProbabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.probability_line)?;
        write!(f, "{}", self.cdf_line)
    }
}

/// Surface that keeps the report of every frame it is handed.
#[derive(Debug, Default)]
pub struct TextSurface {
    reports: Vec<ProbabilityReport>
}

impl TextSurface {
    pub fn new() -> TextSurface {
        TextSurface::default()
    }

    pub fn reports(&self) -> &[ProbabilityReport] {
        &self.reports
    }

    pub fn last(&self) -> Option<&ProbabilityReport> {
        self.reports.last()
    }
}

impl RenderingSurface for TextSurface {
    fn render(&mut self, frame: &RenderFrame<'_>) {
        self.reports.push(ProbabilityReport::from_result(frame.result()));
    }
}
