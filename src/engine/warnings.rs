use serde::{Deserialize, Serialize};

use crate::limits::{HOUR_MS, LONG_TRIP_THRESHOLD_MS, SHORT_NOTICE_WINDOW_MS};
use crate::model::{Driver, Ms, Span, Vehicle};

/// Soft conditions surfaced for operator awareness. Never block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    LicenseExpiring,
    LicenseExpired,
    DriverInactive,
    VehicleInactive,
    LongTrip,
    ShortNotice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    /// Presentation only; assert on `kind`, not on this.
    pub message: String,
}

fn warning(kind: WarningKind, message: String) -> Warning {
    Warning { kind, message }
}

/// Classify soft-risk conditions for a (driver, vehicle, window) request.
/// Each rule fires independently: an expired license also counts as
/// expiring within 30 days, so both license warnings can appear together.
pub fn check_warnings(driver: &Driver, vehicle: &Vehicle, window: &Span, now: Ms) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if driver.is_license_expiring_soon(now) {
        warnings.push(warning(
            WarningKind::LicenseExpiring,
            format!(
                "license for driver {} expires at {} ms",
                driver.name, driver.license_expiry
            ),
        ));
    }

    if driver.is_license_expired(now) {
        warnings.push(warning(
            WarningKind::LicenseExpired,
            format!(
                "license for driver {} expired at {} ms",
                driver.name, driver.license_expiry
            ),
        ));
    }

    if !driver.is_active {
        warnings.push(warning(
            WarningKind::DriverInactive,
            format!("driver {} is marked as inactive", driver.name),
        ));
    }

    if !vehicle.is_active {
        warnings.push(warning(
            WarningKind::VehicleInactive,
            format!("vehicle {} is marked as inactive", vehicle.display_name()),
        ));
    }

    if window.duration_ms() > LONG_TRIP_THRESHOLD_MS {
        warnings.push(warning(
            WarningKind::LongTrip,
            format!(
                "trip spans {} hours, above the recommended maximum of {}",
                window.duration_ms() / HOUR_MS,
                LONG_TRIP_THRESHOLD_MS / HOUR_MS
            ),
        ));
    }

    // Only future starts count: an overdue start is a different problem.
    if window.start > now && window.start - now < SHORT_NOTICE_WINDOW_MS {
        warnings.push(warning(
            WarningKind::ShortNotice,
            "trip starts in less than 2 hours".into(),
        ));
    }

    warnings
}
