use tracing::{
    debug,
    warn
};

use crate::interval::interval::Interval;
use crate::interval::orderingpolicy::OrderingPolicy;
use crate::interval::rangecontrol::RangeControl;
use crate::interval::updateevent::{
    InputSource,
    MirrorUpdate,
    UpdateEvent,
    UpdateOrigin
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Reconciling
}

/// Last values the controller pushed into (or accepted from) each control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlMirrors {
    range: (f64, f64),
    field_a: f64,
    field_b: f64
}

impl ControlMirrors {
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn field_a(&self) -> f64 {
        self.field_a
    }

    pub fn field_b(&self) -> f64 {
        self.field_b
    }
}

/// Outcome of one input event.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    source: InputSource,
    changed: bool,
    mirror_updates: Vec<MirrorUpdate>
}

impl Reconciliation {
    fn unchanged(source: InputSource) -> Reconciliation {
        Reconciliation { source, changed: false, mirror_updates: Vec::new() }
    }

    pub fn source(&self) -> InputSource {
        self.source
    }

    /// Whether the canonical interval moved.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Values to push into controls. Pushing them fires echo events, which
    /// the controller recognises by their `Mirror` origin and drops.
    pub fn mirror_updates(&self) -> &[MirrorUpdate] {
        &self.mirror_updates
    }
}

/// Owner of the canonical interval.
///
/// Three controls write to it: the range control, which moves both bounds at
/// once, and two fields that each move one bound. Each event is reconciled to
/// completion, after which every control other than the one that produced the
/// event has been told the new canonical values.
pub struct IntervalController {
    interval: Interval,
    mirrors: ControlMirrors,
    range_control: RangeControl,
    ordering_policy: OrderingPolicy,
    state: ControllerState
}

impl IntervalController {
    pub fn new(initial: Interval,
               range_control: RangeControl,
               ordering_policy: OrderingPolicy) -> IntervalController {
        let mirrors = ControlMirrors {
            range: range_control.constrain(initial.a(), initial.b()),
            field_a: initial.a(),
            field_b: initial.b()
        };
        IntervalController {
            interval: initial,
            mirrors,
            range_control,
            ordering_policy,
            state: ControllerState::Idle
        }
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn mirrors(&self) -> &ControlMirrors {
        &self.mirrors
    }

    pub fn range_control(&self) -> &RangeControl {
        &self.range_control
    }

    pub fn ordering_policy(&self) -> OrderingPolicy {
        self.ordering_policy
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Bounds the prober should see for the current canonical interval.
    pub fn probe_bounds(&self) -> (f64, f64) {
        self.ordering_policy.probe_bounds(&self.interval)
    }

    pub fn apply(&mut self, event: UpdateEvent) -> Reconciliation {
        self.state = ControllerState::Reconciling;
        let reconciliation = self.reconcile(event);
        self.state = ControllerState::Idle;
        let targets: Vec<InputSource> = reconciliation.mirror_updates().iter().map(MirrorUpdate::target).collect();
        debug!(
            source = ?reconciliation.source(),
            changed = reconciliation.changed(),
            mirrored = ?targets,
            a = self.interval.a(),
            b = self.interval.b(),
            "reconciled update"
        );
        reconciliation
    }

    fn reconcile(&mut self, event: UpdateEvent) -> Reconciliation {
        let source = event.source();

        if event.origin() == UpdateOrigin::Mirror {
            debug!(?source, "dropping mirror echo");
            return Reconciliation::unchanged(source);
        }

        if event.has_nan() {
            warn!(?source, "ignoring non-numeric input");
            let mut reconciliation = Reconciliation::unchanged(source);
            reconciliation.mirror_updates.push(self.restore(source));
            return reconciliation;
        }

        let before = self.interval;
        let mut updates = Vec::new();

        match event {
            UpdateEvent::Range { a: raw_a, b: raw_b, .. } => {
                let (a, b) = self.range_control.constrain(raw_a, raw_b);
                self.mirrors.range = (a, b);
                if (a, b) != (raw_a, raw_b) {
                    updates.push(MirrorUpdate::Range { a, b });
                }
                self.interval = Interval::new(a, b);
                if self.interval != before {
                    self.mirrors.field_a = a;
                    self.mirrors.field_b = b;
                    updates.push(MirrorUpdate::FieldA(a));
                    updates.push(MirrorUpdate::FieldB(b));
                }
            },
            UpdateEvent::FieldA { value, .. } => {
                let admitted = self.ordering_policy.admit_a(value, before.b());
                self.interval.set_a(admitted);
                self.mirrors.field_a = admitted;
                if admitted.to_bits() != value.to_bits() {
                    updates.push(MirrorUpdate::FieldA(admitted));
                }
                if let Some(update) = self.resync_range() {
                    updates.push(update);
                }
            },
            UpdateEvent::FieldB { value, .. } => {
                let admitted = self.ordering_policy.admit_b(before.a(), value);
                self.interval.set_b(admitted);
                self.mirrors.field_b = admitted;
                if admitted.to_bits() != value.to_bits() {
                    updates.push(MirrorUpdate::FieldB(admitted));
                }
                if let Some(update) = self.resync_range() {
                    updates.push(update);
                }
            }
        }

        Reconciliation {
            source,
            changed: self.interval != before,
            mirror_updates: updates
        }
    }

    fn resync_range(&mut self) -> Option<MirrorUpdate> {
        let range = self.range_control.constrain(self.interval.a(), self.interval.b());
        if range == self.mirrors.range {
            return None;
        }
        self.mirrors.range = range;
        Some(MirrorUpdate::Range { a: range.0, b: range.1 })
    }

    fn restore(&self, source: InputSource) -> MirrorUpdate {
        match source {
            InputSource::Range => {
                let (a, b) = self.mirrors.range;
                MirrorUpdate::Range { a, b }
            },
            InputSource::FieldA => MirrorUpdate::FieldA(self.mirrors.field_a),
            InputSource::FieldB => MirrorUpdate::FieldB(self.mirrors.field_b)
        }
    }
}

impl Default for IntervalController {
    fn default() -> Self {
        IntervalController::new(Interval::default(), RangeControl::default(), OrderingPolicy::default())
    }
}
