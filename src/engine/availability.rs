use ulid::Ulid;

use crate::model::{Span, Trip};

// ── Availability filters ──────────────────────────────────────────
//
// Pure functions over trips the caller already loaded. The window is
// assumed well-formed; public entry points validate it one level up.

/// True when `trip` can still block the window: non-terminal, overlapping,
/// and not the excluded trip.
fn blocks(trip: &Trip, window: &Span, exclude_trip: Option<Ulid>) -> bool {
    !trip.status.is_terminal()
        && exclude_trip != Some(trip.id)
        && trip.scheduled.overlaps(window)
}

/// The trips that make the resource busy during `window`, in input order.
pub fn overlapping_trips<'a>(
    trips: &'a [Trip],
    window: &Span,
    exclude_trip: Option<Ulid>,
) -> Vec<&'a Trip> {
    trips
        .iter()
        .filter(|t| blocks(t, window, exclude_trip))
        .collect()
}

/// A resource is available iff nothing blocks the window. True on an
/// empty trip set.
pub fn is_available(trips: &[Trip], window: &Span, exclude_trip: Option<Ulid>) -> bool {
    !trips.iter().any(|t| blocks(t, window, exclude_trip))
}
