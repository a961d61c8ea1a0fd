use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::distribution::cumulativetable::IntegrationRule;
use crate::distribution::domaingrid::{
    validate_domain,
    GridError
};
use crate::interval::interval::Interval;
use crate::interval::orderingpolicy::OrderingPolicy;
use crate::interval::rangecontrol::RangeControl;

pub const DEFAULT_HALF_WIDTH: f64 = 6.0;
pub const DEFAULT_STEP: f64 = 0.001;
pub const DEFAULT_CONTROL_STEP: f64 = 0.01;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration: {0}")]
    IOError(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidDomainError(#[from] GridError),
    #[error("invalid range control: extent [{min}, {max}] must be finite and non-empty, step {step} positive and finite")]
    InvalidRangeControlError {
        min: f64,
        max: f64,
        step: f64
    }
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigurationJsonProp {
    half_width: f64,
    step: f64,
    default_interval: Interval,
    integration_rule: IntegrationRule,
    ordering_policy: OrderingPolicy,
    range_control: Option<RangeControl>
}

impl Default for ConfigurationJsonProp {
    fn default() -> Self {
        ConfigurationJsonProp {
            half_width: DEFAULT_HALF_WIDTH,
            step: DEFAULT_STEP,
            default_interval: Interval::default(),
            integration_rule: IntegrationRule::default(),
            ordering_policy: OrderingPolicy::default(),
            range_control: None
        }
    }
}

/// Everything that distinguishes one variant of the calculator from another.
///
/// A JSON file may set any subset of the fields; the rest keep their
/// defaults. When no range control is given it spans [-L, L] in steps of 0.01.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfiguration {
    half_width: f64,
    step: f64,
    default_interval: Interval,
    integration_rule: IntegrationRule,
    ordering_policy: OrderingPolicy,
    range_control: RangeControl
}

impl EngineConfiguration {
    pub fn new() -> EngineConfiguration {
        EngineConfiguration::default()
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn default_interval(&self) -> Interval {
        self.default_interval
    }

    pub fn integration_rule(&self) -> IntegrationRule {
        self.integration_rule
    }

    pub fn ordering_policy(&self) -> OrderingPolicy {
        self.ordering_policy
    }

    pub fn range_control(&self) -> RangeControl {
        self.range_control
    }

    /// Sets L and h; the range control is re-derived to span [-L, L].
    pub fn with_domain(mut self, half_width: f64, step: f64) -> Self {
        self.half_width = half_width;
        self.step = step;
        self.range_control = RangeControl::new(-half_width, half_width, self.range_control.step());
        self
    }

    pub fn with_default_interval(mut self, interval: Interval) -> Self {
        self.default_interval = interval;
        self
    }

    pub fn with_integration_rule(mut self, rule: IntegrationRule) -> Self {
        self.integration_rule = rule;
        self
    }

    pub fn with_ordering_policy(mut self, policy: OrderingPolicy) -> Self {
        self.ordering_policy = policy;
        self
    }

    pub fn with_range_control(mut self, range_control: RangeControl) -> Self {
        self.range_control = range_control;
        self
    }

    /// Rejects an unusable domain or range control before any table is built.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_domain(self.half_width, self.step)?;
        if !self.range_control.is_valid() {
            return Err(ConfigurationError::InvalidRangeControlError {
                min: self.range_control.min(),
                max: self.range_control.max(),
                step: self.range_control.step()
            });
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<EngineConfiguration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Self::from_json_prop(json_prop)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<EngineConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Self::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<EngineConfiguration, ConfigurationError> {
        let range_control = json_prop.range_control.unwrap_or_else(|| {
            RangeControl::new(-json_prop.half_width, json_prop.half_width, DEFAULT_CONTROL_STEP)
        });
        let config = EngineConfiguration {
            half_width: json_prop.half_width,
            step: json_prop.step,
            default_interval: json_prop.default_interval,
            integration_rule: json_prop.integration_rule,
            ordering_policy: json_prop.ordering_policy,
            range_control
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for EngineConfiguration {
    fn default() -> Self {
        EngineConfiguration {
            half_width: DEFAULT_HALF_WIDTH,
            step: DEFAULT_STEP,
            default_interval: Interval::default(),
            integration_rule: IntegrationRule::default(),
            ordering_policy: OrderingPolicy::default(),
            range_control: RangeControl::new(-DEFAULT_HALF_WIDTH, DEFAULT_HALF_WIDTH, DEFAULT_CONTROL_STEP)
        }
    }
}
