use tracing::{
    debug,
    debug_span
};
use uuid::Uuid;

use crate::configuration::{
    ConfigurationError,
    EngineConfiguration
};
use crate::distribution::intervalprober::ProbeResult;
use crate::distribution::normaldistribution::NormalDistribution;
use crate::interval::intervalcontroller::{
    IntervalController,
    Reconciliation
};
use crate::interval::updateevent::UpdateEvent;
use crate::presentation::renderframe::{
    RenderFrame,
    RenderingSurface
};

/// One user's calculator: immutable tables plus the canonical interval.
///
/// Every interaction runs to completion in order: the controller reconciles
/// the event, the current bounds are probed, then the surface renders.
pub struct Session {
    id: Uuid,
    configuration: EngineConfiguration,
    distribution: NormalDistribution,
    controller: IntervalController
}

impl Session {
    pub fn new(configuration: EngineConfiguration) -> Result<Session, ConfigurationError> {
        configuration.validate()?;
        let distribution = NormalDistribution::new(
            configuration.half_width(),
            configuration.step(),
            configuration.integration_rule()
        )?;
        let controller = IntervalController::new(
            configuration.default_interval(),
            configuration.range_control(),
            configuration.ordering_policy()
        );
        Ok(Session {
            id: Uuid::new_v4(),
            configuration,
            distribution,
            controller
        })
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn configuration(&self) -> &EngineConfiguration {
        &self.configuration
    }

    pub fn distribution(&self) -> &NormalDistribution {
        &self.distribution
    }

    pub fn controller(&self) -> &IntervalController {
        &self.controller
    }

    /// Probe of the canonical interval under the configured ordering policy.
    /// The result always carries the literal canonical bounds.
    pub fn current(&self) -> ProbeResult {
        let interval = self.controller.interval();
        let (lo, hi) = self.controller.probe_bounds();
        self.distribution.probe(lo, hi).with_literal_bounds(interval.a(), interval.b())
    }

    pub fn render(&self, surface: &mut dyn RenderingSurface) -> ProbeResult {
        let result = self.current();
        let frame = RenderFrame::new(&self.distribution, self.controller.interval(), result);
        surface.render(&frame);
        result
    }

    pub fn dispatch(&mut self,
                    event: UpdateEvent,
                    surface: &mut dyn RenderingSurface) -> (Reconciliation, ProbeResult) {
        let span = debug_span!("interaction", session = %self.id, source = ?event.source());
        let _guard = span.enter();

        let reconciliation = self.controller.apply(event);
        let result = self.render(surface);
        debug!(prob = result.prob(), "rendered interaction");
        (reconciliation, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::domaingrid::GridError;
    use crate::interval::orderingpolicy::OrderingPolicy;
    use crate::interval::rangecontrol::RangeControl;
    use crate::presentation::report::TextSurface;

    #[test]
    fn test_session_renders_after_each_event() {
        let mut session = Session::new(EngineConfiguration::new()).unwrap();
        let mut surface = TextSurface::new();
        session.render(&mut surface);
        session.dispatch(UpdateEvent::range(-1.0, 1.0), &mut surface);
        session.dispatch(UpdateEvent::field_b(2.0), &mut surface);
        assert_eq!(surface.reports().len(), 3);
        assert_eq!(surface.last().unwrap().probability_line(), "P(-1.00 ≤ Z ≤ 2.00) = 0.8185");
    }

    #[test]
    fn test_invalid_configuration_fails_at_startup() {
        let config = EngineConfiguration::new().with_domain(-6.0, 0.001);
        assert!(matches!(
            Session::new(config),
            Err(ConfigurationError::InvalidDomainError(GridError::InvalidDomainError { .. }))
        ));
    }

    #[test]
    fn test_swap_policy_reports_literal_bounds() {
        let config = EngineConfiguration::new().with_ordering_policy(OrderingPolicy::Swap);
        let mut session = Session::new(config).unwrap();
        let mut surface = TextSurface::new();
        let (_, result) = session.dispatch(UpdateEvent::field_a(3.0), &mut surface);
        assert!(result.prob() > 0.0);
        assert_eq!(session.controller().interval().a(), 3.0);
        assert_eq!((result.a(), result.b()), (3.0, 1.96));
        let report = surface.last().unwrap();
        assert_eq!(report.probability_line(), "P(3.00 ≤ Z ≤ 1.96) = 0.0236");
        assert_eq!(report.cdf_line(), "Φ(3.00) - Φ(1.96) = 0.9987 - 0.9750 = 0.0236");
    }

    #[test]
    fn test_invalid_range_control_fails_at_startup() {
        let config = EngineConfiguration::new().with_range_control(RangeControl::new(f64::NAN, 6.0, 0.01));
        assert!(matches!(
            Session::new(config),
            Err(ConfigurationError::InvalidRangeControlError { .. })
        ));
    }

    #[test]
    fn test_oversized_grid_fails_at_startup() {
        let config = EngineConfiguration::new().with_domain(1e300, 1.0);
        assert!(matches!(
            Session::new(config),
            Err(ConfigurationError::InvalidDomainError(GridError::GridTooLargeError { .. }))
        ));
    }
}
