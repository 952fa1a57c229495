use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::limits::{DAY_MS, LICENSE_EXPIRY_WARNING_WINDOW_MS};

/// Unix milliseconds — the only time type.
pub type Ms = i64;

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Ms,
    pub end: Ms,
}

impl Span {
    pub fn new(start: Ms, end: Ms) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    /// Strict on both sides: spans touching at an endpoint do NOT overlap,
    /// so back-to-back scheduling is always allowed.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: Ms) -> bool {
        self.start <= t && t < self.end
    }

    /// The UTC day window containing `t`.
    pub fn day_of(t: Ms) -> Span {
        let start = t - t.rem_euclid(DAY_MS);
        Span::new(start, start + DAY_MS)
    }
}

/// Trip lifecycle. `Completed` and `Cancelled` are terminal: such trips
/// never participate in conflict detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Car,
    Bus,
    Truck,
    Motorcycle,
    Van,
}

/// A time-bound assignment of one driver to one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Ulid,
    pub company_id: Ulid,
    pub driver_id: Ulid,
    pub vehicle_id: Ulid,
    /// Human-readable identifier, assigned by the store at creation time.
    pub trip_number: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub scheduled: Span,
    pub actual_start: Option<Ms>,
    pub actual_end: Option<Ms>,
    pub status: TripStatus,
    pub distance_km: Option<f64>,
    pub fuel_consumed: Option<f64>,
}

impl Trip {
    pub fn scheduled_duration_ms(&self) -> Ms {
        self.scheduled.duration_ms()
    }

    /// Duration actually driven, once both ends are recorded.
    pub fn actual_duration_ms(&self) -> Option<Ms> {
        match (self.actual_start, self.actual_end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Scheduled to have started but never moved out of `Scheduled`.
    pub fn is_overdue(&self, now: Ms) -> bool {
        self.status == TripStatus::Scheduled && self.scheduled.start < now
    }

    /// Km per unit of fuel, rounded to two decimals.
    pub fn fuel_efficiency(&self) -> Option<f64> {
        match (self.distance_km, self.fuel_consumed) {
            (Some(distance), Some(fuel)) if fuel > 0.0 => {
                Some((distance / fuel * 100.0).round() / 100.0)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: Ulid,
    pub company_id: Ulid,
    pub name: String,
    pub license_expiry: Ms,
    pub is_active: bool,
}

impl Driver {
    pub fn is_license_expired(&self, now: Ms) -> bool {
        self.license_expiry < now
    }

    /// True within 30 days of expiry, and also once already expired;
    /// the two predicates are deliberately non-exclusive.
    pub fn is_license_expiring_soon(&self, now: Ms) -> bool {
        self.license_expiry <= now + LICENSE_EXPIRY_WARNING_WINDOW_MS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Ulid,
    pub company_id: Ulid,
    pub brand: String,
    pub model: String,
    pub license_plate: String,
    pub vehicle_type: VehicleType,
    pub is_active: bool,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        format!("{} - {} ({})", self.brand, self.model, self.license_plate)
    }
}

/// Groups drivers, vehicles and trips; used only to scope discovery queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: Ulid,
    pub name: String,
    pub is_active: bool,
}
