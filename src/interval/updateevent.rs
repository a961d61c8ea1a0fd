use std::io::BufRead;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Range,
    FieldA,
    FieldB
}

/// Whether an event came from a person or is a widget echoing a value the
/// controller pushed into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrigin {
    #[default]
    User,
    Mirror
}

/// One raw event from the input surface, e.g.
/// `{"source": "range", "a": -1.0, "b": 2.0}` or `{"source": "fieldA", "value": 0.5}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "source")]
pub enum UpdateEvent {
    #[serde(rename = "range")]
    Range {
        a: f64,
        b: f64,
        #[serde(default)]
        origin: UpdateOrigin
    },
    #[serde(rename = "fieldA")]
    FieldA {
        value: f64,
        #[serde(default)]
        origin: UpdateOrigin
    },
    #[serde(rename = "fieldB")]
    FieldB {
        value: f64,
        #[serde(default)]
        origin: UpdateOrigin
    }
}

impl UpdateEvent {
    pub fn range(a: f64, b: f64) -> UpdateEvent {
        UpdateEvent::Range { a, b, origin: UpdateOrigin::User }
    }

    pub fn field_a(value: f64) -> UpdateEvent {
        UpdateEvent::FieldA { value, origin: UpdateOrigin::User }
    }

    pub fn field_b(value: f64) -> UpdateEvent {
        UpdateEvent::FieldB { value, origin: UpdateOrigin::User }
    }

    pub fn source(&self) -> InputSource {
        match self {
            UpdateEvent::Range { .. } => InputSource::Range,
            UpdateEvent::FieldA { .. } => InputSource::FieldA,
            UpdateEvent::FieldB { .. } => InputSource::FieldB
        }
    }

    pub fn origin(&self) -> UpdateOrigin {
        match self {
            UpdateEvent::Range { origin, .. }
            | UpdateEvent::FieldA { origin, .. }
            | UpdateEvent::FieldB { origin, .. } => *origin
        }
    }

    pub fn has_nan(&self) -> bool {
        match self {
            UpdateEvent::Range { a, b, .. } => a.is_nan() || b.is_nan(),
            UpdateEvent::FieldA { value, .. } | UpdateEvent::FieldB { value, .. } => value.is_nan()
        }
    }
}

/// A value the controller pushes into one control so it shows canonical state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MirrorUpdate {
    Range { a: f64, b: f64 },
    FieldA(f64),
    FieldB(f64)
}

impl MirrorUpdate {
    pub fn target(&self) -> InputSource {
        match self {
            MirrorUpdate::Range { .. } => InputSource::Range,
            MirrorUpdate::FieldA(_) => InputSource::FieldA,
            MirrorUpdate::FieldB(_) => InputSource::FieldB
        }
    }

    /// The change notification a widget fires after being set programmatically.
    pub fn echo(&self) -> UpdateEvent {
        let origin = UpdateOrigin::Mirror;
        match *self {
            MirrorUpdate::Range { a, b } => UpdateEvent::Range { a, b, origin },
            MirrorUpdate::FieldA(value) => UpdateEvent::FieldA { value, origin },
            MirrorUpdate::FieldB(value) => UpdateEvent::FieldB { value, origin }
        }
    }
}

#[derive(Debug, Error)]
pub enum EventParseError {
    #[error("event line {line}: {source}")]
    JsonParseError {
        line: usize,
        #[source]
        source: serde_json::Error
    },
    #[error("failed to read events: {0}")]
    IOError(#[from] std::io::Error)
}

/// Reads one JSON event per line; blank lines and lines starting with `#` are skipped.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<UpdateEvent>, EventParseError> {
    let mut events = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event: UpdateEvent = serde_json::from_str(trimmed)
            .map_err(|source| EventParseError::JsonParseError { line: i + 1, source })?;
        events.push(event);
    }
    Ok(events)
}
