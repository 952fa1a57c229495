use serde::Serialize;
use tracing::trace;
use ulid::Ulid;

use crate::model::{Driver, Ms, Span, Trip, Vehicle};
use crate::observability;
use crate::store::{ResourceRef, TripStore};

use super::conflict::validate_span;
use super::{EngineError, Validator};

/// One trip's claim on a day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusyPeriod {
    pub span: Span,
    pub trip_id: Ulid,
    pub destination: Option<String>,
    /// Assigned driver's name; filled for vehicle summaries only.
    pub driver_name: Option<String>,
}

/// Day-level availability for one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub day: Span,
    pub is_available: bool,
    pub scheduled_trips: Vec<Trip>,
    /// Ordered by scheduled start, ascending.
    pub busy_periods: Vec<BusyPeriod>,
}

impl<'a, S: TripStore> Validator<'a, S> {
    /// Active drivers of the company with no blocking trip in `window`.
    /// Inactive drivers are never returned, booked or not.
    pub fn find_available_drivers(
        &self,
        company_id: Ulid,
        window: &Span,
        exclude_trip: Option<Ulid>,
    ) -> Result<Vec<Driver>, EngineError> {
        validate_span(window)?;
        metrics::counter!(observability::DISCOVERY_TOTAL, "resource" => "driver").increment(1);
        let mut drivers = self.store.active_drivers(company_id);
        drivers.retain(|d| {
            let busy = self.store.find_overlapping_trips(
                ResourceRef::Driver(d.id),
                window,
                exclude_trip,
            );
            trace!(driver = %d.id, overlapping = busy.len(), "discovery probe");
            busy.is_empty()
        });
        Ok(drivers)
    }

    pub fn find_available_vehicles(
        &self,
        company_id: Ulid,
        window: &Span,
        exclude_trip: Option<Ulid>,
    ) -> Result<Vec<Vehicle>, EngineError> {
        validate_span(window)?;
        metrics::counter!(observability::DISCOVERY_TOTAL, "resource" => "vehicle").increment(1);
        let mut vehicles = self.store.active_vehicles(company_id);
        vehicles.retain(|v| {
            let busy = self.store.find_overlapping_trips(
                ResourceRef::Vehicle(v.id),
                window,
                exclude_trip,
            );
            trace!(vehicle = %v.id, overlapping = busy.len(), "discovery probe");
            busy.is_empty()
        });
        Ok(vehicles)
    }

    /// Availability of `driver` over the UTC day containing `date`.
    pub fn driver_availability_summary(
        &self,
        driver: &Driver,
        date: Ms,
    ) -> Result<DaySummary, EngineError> {
        self.summary(ResourceRef::Driver(driver.id), date, false)
    }

    /// Availability of `vehicle` over the UTC day containing `date`,
    /// with the assigned driver named per busy period.
    pub fn vehicle_availability_summary(
        &self,
        vehicle: &Vehicle,
        date: Ms,
    ) -> Result<DaySummary, EngineError> {
        self.summary(ResourceRef::Vehicle(vehicle.id), date, true)
    }

    fn summary(
        &self,
        resource: ResourceRef,
        date: Ms,
        with_driver: bool,
    ) -> Result<DaySummary, EngineError> {
        let day = Span::day_of(date);
        validate_span(&day)?;

        let mut trips = self.store.find_overlapping_trips(resource, &day, None);
        trips.sort_by_key(|t| t.scheduled.start);

        let busy_periods = trips
            .iter()
            .map(|t| BusyPeriod {
                span: t.scheduled,
                trip_id: t.id,
                destination: t.destination.clone(),
                driver_name: if with_driver {
                    self.store.driver(t.driver_id).map(|d| d.name)
                } else {
                    None
                },
            })
            .collect();

        Ok(DaySummary {
            day,
            is_available: trips.is_empty(),
            scheduled_trips: trips,
            busy_periods,
        })
    }
}
