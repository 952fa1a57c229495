mod availability;
mod conflict;
mod error;
mod queries;
mod warnings;

pub use availability::{is_available, overlapping_trips};
pub use conflict::{Conflict, ConflictKind, now_ms};
pub use error::EngineError;
pub use queries::{BusyPeriod, DaySummary};
pub use warnings::{Warning, WarningKind, check_warnings};

use serde::Serialize;
use tracing::debug;
use ulid::Ulid;

use crate::model::{Driver, Ms, Span, Trip, Vehicle};
use crate::observability;
use crate::store::{ResourceRef, TripStore};

use conflict::validate_span;

/// Outcome of [`Validator::validate_trip`]. Advisory: the caller decides
/// whether to persist, halt, or surface the messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty. Warnings never block.
    pub valid: bool,
    pub errors: Vec<Conflict>,
    pub warnings: Vec<Warning>,
}

impl ValidationResult {
    pub fn has_error(&self, kind: ConflictKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.iter().any(|w| w.kind == kind)
    }
}

/// Raw per-resource conflict lists, without classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictReport {
    pub driver_conflicts: Vec<Trip>,
    pub vehicle_conflicts: Vec<Trip>,
}

/// Scheduling validator over a [`TripStore`] collaborator. Owns no state;
/// every operation is a pure computation plus store queries, with `now`
/// injected by the caller.
pub struct Validator<'a, S: TripStore> {
    store: &'a S,
}

impl<'a, S: TripStore> Validator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Classify a (driver, vehicle, window) scheduling request.
    ///
    /// Both resource checks run unconditionally: a request can be
    /// double-booked on the driver and the vehicle at once. Pass the trip
    /// being edited as `exclude_trip` so it does not conflict with itself.
    pub fn validate_trip(
        &self,
        driver: &Driver,
        vehicle: &Vehicle,
        window: &Span,
        exclude_trip: Option<&Trip>,
        now: Ms,
    ) -> Result<ValidationResult, EngineError> {
        validate_span(window)?;
        let exclude = exclude_trip.map(|t| t.id);

        let mut errors = Vec::new();

        let driver_conflicts =
            self.store
                .find_overlapping_trips(ResourceRef::Driver(driver.id), window, exclude);
        if !driver_conflicts.is_empty() {
            debug!(driver = %driver.id, conflicts = driver_conflicts.len(), "driver double-booked");
            errors.push(conflict::driver_conflict(driver, driver_conflicts));
        }

        let vehicle_conflicts = self.store.find_overlapping_trips(
            ResourceRef::Vehicle(vehicle.id),
            window,
            exclude,
        );
        if !vehicle_conflicts.is_empty() {
            debug!(vehicle = %vehicle.id, conflicts = vehicle_conflicts.len(), "vehicle double-booked");
            errors.push(conflict::vehicle_conflict(vehicle, vehicle_conflicts));
        }

        // Warnings are computed even for invalid requests.
        let warnings = warnings::check_warnings(driver, vehicle, window, now);

        let valid = errors.is_empty();
        metrics::counter!(
            observability::VALIDATIONS_TOTAL,
            "outcome" => if valid { "valid" } else { "invalid" }
        )
        .increment(1);
        metrics::counter!(observability::CONFLICTS_TOTAL).increment(errors.len() as u64);
        metrics::counter!(observability::WARNINGS_TOTAL).increment(warnings.len() as u64);

        Ok(ValidationResult {
            valid,
            errors,
            warnings,
        })
    }

    /// Conflicting trips for both resources, unclassified.
    pub fn all_conflicts(
        &self,
        driver: &Driver,
        vehicle: &Vehicle,
        window: &Span,
        exclude_trip: Option<Ulid>,
    ) -> Result<ConflictReport, EngineError> {
        validate_span(window)?;
        Ok(ConflictReport {
            driver_conflicts: self.store.find_overlapping_trips(
                ResourceRef::Driver(driver.id),
                window,
                exclude_trip,
            ),
            vehicle_conflicts: self.store.find_overlapping_trips(
                ResourceRef::Vehicle(vehicle.id),
                window,
                exclude_trip,
            ),
        })
    }
}
