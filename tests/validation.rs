//! Black-box tests through the public API: a small fleet scheduling a
//! working day, exercised the way an embedding application would.

use motorpool::limits::DAY_MS;
use motorpool::{
    Company, ConflictKind, Driver, InMemoryStore, Ms, Span, Trip, TripStatus, Validator, Vehicle,
    VehicleType, WarningKind,
};
use ulid::Ulid;

const H: Ms = 3_600_000;
const TODAY: Ms = 20_000 * DAY_MS;

fn driver(company_id: Ulid, name: &str) -> Driver {
    Driver {
        id: Ulid::new(),
        company_id,
        name: name.into(),
        license_expiry: TODAY + 365 * DAY_MS,
        is_active: true,
    }
}

fn vehicle(company_id: Ulid, plate: &str) -> Vehicle {
    Vehicle {
        id: Ulid::new(),
        company_id,
        brand: "Scania".into(),
        model: "R500".into(),
        license_plate: plate.into(),
        vehicle_type: VehicleType::Truck,
        is_active: true,
    }
}

fn trip(d: &Driver, v: &Vehicle, start: Ms, end: Ms) -> Trip {
    Trip {
        id: Ulid::new(),
        company_id: d.company_id,
        driver_id: d.id,
        vehicle_id: v.id,
        trip_number: String::new(),
        origin: Some("Depot".into()),
        destination: Some("Terminal 2".into()),
        scheduled: Span::new(start, end),
        actual_start: None,
        actual_end: None,
        status: TripStatus::Scheduled,
        distance_km: None,
        fuel_consumed: None,
    }
}

#[test]
fn schedule_a_working_day() {
    let mut store = InMemoryStore::new();
    let company = store.add_company(Company {
        id: Ulid::new(),
        name: "Nordhaul".into(),
        is_active: true,
    });

    let ada = driver(company, "Ada");
    let brin = driver(company, "Brin");
    let truck = vehicle(company, "AB-123-CD");
    let van = vehicle(company, "EF-456-GH");
    store.add_driver(ada.clone());
    store.add_driver(brin.clone());
    store.add_vehicle(truck.clone());
    store.add_vehicle(van.clone());

    // Morning run: Ada takes the truck 08:00–12:00.
    let morning = store.add_trip(trip(&ada, &truck, TODAY + 8 * H, TODAY + 12 * H));
    assert!(
        store
            .trip(morning)
            .unwrap()
            .trip_number
            .starts_with("TRP-")
    );

    let validator = Validator::new(&store);
    let now = TODAY;

    // Ada with the van at 10:00–14:00: driver is double-booked, van is not.
    let overlap = Span::new(TODAY + 10 * H, TODAY + 14 * H);
    let result = validator
        .validate_trip(&ada, &van, &overlap, None, now)
        .unwrap();
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ConflictKind::DriverConflict);
    assert_eq!(result.errors[0].trips[0].id, morning);

    // Brin with the van over the same window is fine.
    let result = validator
        .validate_trip(&brin, &van, &overlap, None, now)
        .unwrap();
    assert!(result.valid);

    // Ada is free again right when the morning run ends.
    let afternoon = Span::new(TODAY + 12 * H, TODAY + 16 * H);
    let result = validator
        .validate_trip(&ada, &truck, &afternoon, None, now)
        .unwrap();
    assert!(result.valid);

    // Discovery over the morning window sees only Brin and the van.
    let free_drivers = validator
        .find_available_drivers(company, &Span::new(TODAY + 9 * H, TODAY + 11 * H), None)
        .unwrap();
    assert_eq!(free_drivers.len(), 1);
    assert_eq!(free_drivers[0].id, brin.id);
    let free_vehicles = validator
        .find_available_vehicles(company, &Span::new(TODAY + 9 * H, TODAY + 11 * H), None)
        .unwrap();
    assert_eq!(free_vehicles.len(), 1);
    assert_eq!(free_vehicles[0].id, van.id);

    // The truck's day summary names Ada on the busy period.
    let summary = validator
        .vehicle_availability_summary(&truck, TODAY + 12 * H)
        .unwrap();
    assert!(!summary.is_available);
    assert_eq!(summary.busy_periods.len(), 1);
    assert_eq!(summary.busy_periods[0].driver_name.as_deref(), Some("Ada"));
}

#[test]
fn editing_a_trip_excludes_itself() {
    let mut store = InMemoryStore::new();
    let company = Ulid::new();
    let ada = driver(company, "Ada");
    let truck = vehicle(company, "AB-123-CD");
    store.add_driver(ada.clone());
    store.add_vehicle(truck.clone());

    let existing = trip(&ada, &truck, TODAY + 8 * H, TODAY + 12 * H);
    store.add_trip(existing.clone());

    let validator = Validator::new(&store);
    // Shifting the same trip one hour later must not conflict with itself.
    let shifted = Span::new(TODAY + 9 * H, TODAY + 13 * H);
    let result = validator
        .validate_trip(&ada, &truck, &shifted, Some(&existing), TODAY)
        .unwrap();
    assert!(result.valid);
}

#[test]
fn completed_trips_release_both_resources() {
    let mut store = InMemoryStore::new();
    let company = Ulid::new();
    let ada = driver(company, "Ada");
    let truck = vehicle(company, "AB-123-CD");
    store.add_driver(ada.clone());
    store.add_vehicle(truck.clone());

    let id = store.add_trip(trip(&ada, &truck, TODAY + 8 * H, TODAY + 12 * H));
    store.set_trip_status(id, TripStatus::Completed);

    let validator = Validator::new(&store);
    let result = validator
        .validate_trip(
            &ada,
            &truck,
            &Span::new(TODAY + 9 * H, TODAY + 11 * H),
            None,
            TODAY,
        )
        .unwrap();
    assert!(result.valid);
}

#[test]
fn risky_request_carries_every_applicable_warning() {
    let mut store = InMemoryStore::new();
    let company = Ulid::new();
    let mut ada = driver(company, "Ada");
    ada.license_expiry = TODAY - DAY_MS; // expired yesterday
    ada.is_active = false;
    let mut truck = vehicle(company, "AB-123-CD");
    truck.is_active = false;
    store.add_driver(ada.clone());
    store.add_vehicle(truck.clone());

    let validator = Validator::new(&store);
    let now = TODAY + 6 * H;
    // Starts in 90 minutes and runs for 25 hours.
    let window = Span::new(now + 90 * 60_000, now + 90 * 60_000 + 25 * H);
    let result = validator
        .validate_trip(&ada, &truck, &window, None, now)
        .unwrap();

    assert!(result.valid); // warnings never block
    let kinds: Vec<_> = result.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            WarningKind::LicenseExpiring,
            WarningKind::LicenseExpired,
            WarningKind::DriverInactive,
            WarningKind::VehicleInactive,
            WarningKind::LongTrip,
            WarningKind::ShortNotice,
        ]
    );
}

#[test]
fn kind_taxonomy_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(ConflictKind::DriverConflict).unwrap(),
        serde_json::json!("driver_conflict")
    );
    assert_eq!(
        serde_json::to_value(ConflictKind::VehicleConflict).unwrap(),
        serde_json::json!("vehicle_conflict")
    );

    let kinds = [
        (WarningKind::LicenseExpiring, "license_expiring"),
        (WarningKind::LicenseExpired, "license_expired"),
        (WarningKind::DriverInactive, "driver_inactive"),
        (WarningKind::VehicleInactive, "vehicle_inactive"),
        (WarningKind::LongTrip, "long_trip"),
        (WarningKind::ShortNotice, "short_notice"),
    ];
    for (kind, expected) in kinds {
        assert_eq!(
            serde_json::to_value(kind).unwrap(),
            serde_json::json!(expected)
        );
    }

    assert_eq!(
        serde_json::to_value(TripStatus::InProgress).unwrap(),
        serde_json::json!("in_progress")
    );
}

#[test]
fn validation_result_serializes_for_the_caller() {
    let mut store = InMemoryStore::new();
    let company = Ulid::new();
    let ada = driver(company, "Ada");
    let truck = vehicle(company, "AB-123-CD");
    store.add_driver(ada.clone());
    store.add_vehicle(truck.clone());
    store.add_trip(trip(&ada, &truck, TODAY + 8 * H, TODAY + 12 * H));

    let validator = Validator::new(&store);
    let result = validator
        .validate_trip(
            &ada,
            &truck,
            &Span::new(TODAY + 9 * H, TODAY + 11 * H),
            None,
            TODAY,
        )
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["valid"], serde_json::json!(false));
    assert_eq!(json["errors"][0]["kind"], serde_json::json!("driver_conflict"));
    assert_eq!(json["errors"][1]["kind"], serde_json::json!("vehicle_conflict"));
}
