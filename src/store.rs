use ulid::Ulid;

use crate::engine::overlapping_trips;
use crate::model::{Company, Driver, Span, Trip, TripStatus, Vehicle};

/// Which resource a trip query is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRef {
    Driver(Ulid),
    Vehicle(Ulid),
}

/// Storage collaborator the validation engine queries.
///
/// `find_overlapping_trips` must return the non-terminal trips of the
/// given resource whose schedule overlaps `window`, minus `exclude_trip`,
/// in creation order. `Completed`/`Cancelled` trips must never appear,
/// whether filtered in the query or after it.
///
/// Validation is advisory: two concurrent validate-then-persist flows can
/// both observe "available" before either commits. Closing that race is
/// this collaborator's job: a real backend needs a transactional
/// check-and-insert or a database constraint at commit time.
pub trait TripStore {
    fn find_overlapping_trips(
        &self,
        resource: ResourceRef,
        window: &Span,
        exclude_trip: Option<Ulid>,
    ) -> Vec<Trip>;

    /// Active drivers of the company, creation order.
    fn active_drivers(&self, company_id: Ulid) -> Vec<Driver>;

    /// Active vehicles of the company, creation order.
    fn active_vehicles(&self, company_id: Ulid) -> Vec<Vehicle>;

    /// Single-driver lookup, used to name busy periods in vehicle
    /// day-summaries. The engine does no other by-id fetching.
    fn driver(&self, id: Ulid) -> Option<Driver>;
}

/// Vec-backed reference store: creation order is insertion order. Used by
/// the test suite and as a fixture for embedding applications.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    companies: Vec<Company>,
    drivers: Vec<Driver>,
    vehicles: Vec<Vehicle>,
    trips: Vec<Trip>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_company(&mut self, company: Company) -> Ulid {
        let id = company.id;
        self.companies.push(company);
        id
    }

    pub fn add_driver(&mut self, driver: Driver) -> Ulid {
        let id = driver.id;
        self.drivers.push(driver);
        id
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Ulid {
        let id = vehicle.id;
        self.vehicles.push(vehicle);
        id
    }

    /// Insert a trip, assigning a trip number when the caller left it
    /// empty. Record numbering happens here, at persistence time, never
    /// in the validator.
    pub fn add_trip(&mut self, mut trip: Trip) -> Ulid {
        if trip.trip_number.is_empty() {
            trip.trip_number = format!("TRP-{}", trip.id);
        }
        let id = trip.id;
        self.trips.push(trip);
        id
    }

    /// Check-and-insert in one call: refuses the trip when its driver or
    /// vehicle is already booked over the window, returning the trips in
    /// the way. This is the commit-time guarantee a real backend must
    /// provide transactionally.
    pub fn add_trip_checked(&mut self, trip: Trip) -> Result<Ulid, Vec<Trip>> {
        let window = trip.scheduled;
        let blocking: Vec<Trip> = overlapping_trips(&self.trips, &window, None)
            .into_iter()
            .filter(|t| t.driver_id == trip.driver_id || t.vehicle_id == trip.vehicle_id)
            .cloned()
            .collect();
        if !blocking.is_empty() {
            return Err(blocking);
        }
        Ok(self.add_trip(trip))
    }

    pub fn set_trip_status(&mut self, id: Ulid, status: TripStatus) -> bool {
        if let Some(trip) = self.trips.iter_mut().find(|t| t.id == id) {
            trip.status = status;
            true
        } else {
            false
        }
    }

    pub fn trip(&self, id: Ulid) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    fn resource_trips(&self, resource: ResourceRef) -> Vec<Trip> {
        self.trips
            .iter()
            .filter(|t| match resource {
                ResourceRef::Driver(id) => t.driver_id == id,
                ResourceRef::Vehicle(id) => t.vehicle_id == id,
            })
            .cloned()
            .collect()
    }
}

impl TripStore for InMemoryStore {
    fn find_overlapping_trips(
        &self,
        resource: ResourceRef,
        window: &Span,
        exclude_trip: Option<Ulid>,
    ) -> Vec<Trip> {
        let candidates = self.resource_trips(resource);
        overlapping_trips(&candidates, window, exclude_trip)
            .into_iter()
            .cloned()
            .collect()
    }

    fn active_drivers(&self, company_id: Ulid) -> Vec<Driver> {
        self.drivers
            .iter()
            .filter(|d| d.company_id == company_id && d.is_active)
            .cloned()
            .collect()
    }

    fn active_vehicles(&self, company_id: Ulid) -> Vec<Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.company_id == company_id && v.is_active)
            .cloned()
            .collect()
    }

    fn driver(&self, id: Ulid) -> Option<Driver> {
        self.drivers.iter().find(|d| d.id == id).cloned()
    }
}
