use proptest::prelude::*;

use normalprob::configuration::EngineConfiguration;
use normalprob::interval::interval::Interval;
use normalprob::interval::intervalcontroller::{
    ControllerState,
    IntervalController
};
use normalprob::interval::orderingpolicy::OrderingPolicy;
use normalprob::interval::rangecontrol::RangeControl;
use normalprob::interval::updateevent::{
    read_events,
    MirrorUpdate,
    UpdateEvent
};
use normalprob::presentation::report::TextSurface;
use normalprob::session::Session;

fn controller(policy: OrderingPolicy) -> IntervalController {
    IntervalController::new(Interval::default(), RangeControl::default(), policy)
}

/// Pushes every mirror update into its widget and feeds the echo back, the
/// way a UI toolkit would. Returns how many echoes caused further updates.
fn settle(controller: &mut IntervalController, updates: &[MirrorUpdate]) -> usize {
    updates
        .iter()
        .map(|update| controller.apply(update.echo()))
        .filter(|echo| echo.changed() || !echo.mirror_updates().is_empty())
        .count()
}

#[test]
fn interleaved_controls_stay_in_sync() {
    let mut controller = controller(OrderingPolicy::AllowNegative);
    let script = [
        UpdateEvent::range(-1.0, 1.0),
        UpdateEvent::field_a(-0.25),
        UpdateEvent::field_b(3.5),
        UpdateEvent::range(0.5, 2.0),
        UpdateEvent::field_b(8.0),
    ];
    for event in script {
        let reconciliation = controller.apply(event);
        assert_eq!(settle(&mut controller, reconciliation.mirror_updates()), 0);
        assert_eq!(controller.state(), ControllerState::Idle);

        let interval = controller.interval();
        let mirrors = controller.mirrors();
        assert_eq!(mirrors.field_a(), interval.a());
        assert_eq!(mirrors.field_b(), interval.b());
        assert_eq!(mirrors.range(), controller.range_control().constrain(interval.a(), interval.b()));
    }
    // a field may hold a value the range control cannot show
    assert_eq!(controller.interval(), Interval::new(0.5, 8.0));
    assert_eq!(controller.mirrors().range(), (0.5, 6.0));
}

#[test]
fn scripted_session_from_json_lines() {
    let script = r#"
# drag the range control, then type exact values
{"source": "range", "a": -1.0, "b": 1.0}
{"source": "fieldA", "value": -2.0}
{"source": "fieldB", "value": 2.0, "origin": "mirror"}
{"source": "fieldB", "value": 2.0}
"#;
    let events = read_events(script.as_bytes()).unwrap();
    assert_eq!(events.len(), 4);

    let mut session = Session::new(EngineConfiguration::new()).unwrap();
    let mut surface = TextSurface::new();
    let mut results = Vec::new();
    for event in events {
        let (_, result) = session.dispatch(event, &mut surface);
        results.push(result);
    }
    // the mirror echo left b at 1.0
    assert_eq!(results[2].b(), 1.0);
    assert_eq!(session.controller().interval(), Interval::new(-2.0, 2.0));
    assert_eq!(surface.last().unwrap().probability_line(), "P(-2.00 ≤ Z ≤ 2.00) = 0.9545");
}

proptest! {
    /// Range update then reading both field mirrors returns the same values.
    #[test]
    fn range_update_round_trips_to_fields(x in -6.0f64..=6.0, y in -6.0f64..=6.0) {
        let (a, b) = if x <= y { (x, y) } else { (y, x) };
        let mut controller = controller(OrderingPolicy::AllowNegative);
        controller.apply(UpdateEvent::range(a, b));
        prop_assert_eq!(controller.mirrors().field_a(), a);
        prop_assert_eq!(controller.mirrors().field_b(), b);
        prop_assert_eq!(controller.interval(), Interval::new(a, b));
    }

    /// Editing one field never touches the other canonical bound.
    #[test]
    fn scalar_update_preserves_other_bound(start_b in -6.0f64..6.0, a in -20.0f64..20.0) {
        let mut controller = controller(OrderingPolicy::AllowNegative);
        controller.apply(UpdateEvent::field_b(start_b));
        let before = controller.interval().b().to_bits();
        controller.apply(UpdateEvent::field_a(a));
        prop_assert_eq!(controller.interval().b().to_bits(), before);
        prop_assert_eq!(controller.interval().a(), a);
    }

    /// Under Clamp the canonical pair never crosses.
    #[test]
    fn clamp_policy_keeps_order(values in proptest::collection::vec((any::<bool>(), -8.0f64..8.0), 1..20)) {
        let mut controller = controller(OrderingPolicy::Clamp);
        for (lower, value) in values {
            let event = if lower { UpdateEvent::field_a(value) } else { UpdateEvent::field_b(value) };
            controller.apply(event);
            prop_assert!(controller.interval().is_ordered());
        }
    }
}
