use serde::{Deserialize, Serialize};

use crate::limits::{MAX_SPAN_DURATION_MS, MAX_VALID_TIMESTAMP_MS, MIN_VALID_TIMESTAMP_MS};
use crate::model::{Driver, Ms, Span, Trip, Vehicle};

use super::EngineError;

/// Wall-clock time for callers that don't inject their own.
pub fn now_ms() -> Ms {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as Ms
}

pub(crate) fn validate_span(span: &Span) -> Result<(), EngineError> {
    if span.end <= span.start {
        return Err(EngineError::InvalidSpan {
            start: span.start,
            end: span.end,
        });
    }
    if span.start < MIN_VALID_TIMESTAMP_MS || span.end > MAX_VALID_TIMESTAMP_MS {
        return Err(EngineError::LimitExceeded("timestamp out of range"));
    }
    if span.duration_ms() > MAX_SPAN_DURATION_MS {
        return Err(EngineError::LimitExceeded("span too wide"));
    }
    Ok(())
}

/// Hard conflicts block the request; the kind strings are a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    DriverConflict,
    VehicleConflict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    /// Presentation only; assert on `kind`, not on this.
    pub message: String,
    /// The trips already occupying the window.
    pub trips: Vec<Trip>,
}

pub(crate) fn driver_conflict(driver: &Driver, trips: Vec<Trip>) -> Conflict {
    Conflict {
        kind: ConflictKind::DriverConflict,
        message: format!(
            "driver {} is not available during this time period",
            driver.name
        ),
        trips,
    }
}

pub(crate) fn vehicle_conflict(vehicle: &Vehicle, trips: Vec<Trip>) -> Conflict {
    Conflict {
        kind: ConflictKind::VehicleConflict,
        message: format!(
            "vehicle {} is not available during this time period",
            vehicle.display_name()
        ),
        trips,
    }
}
