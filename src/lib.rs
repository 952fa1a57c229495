//! Scheduling core for fleet operators: decides whether a driver and a
//! vehicle are free over a candidate time window, lists the trips in the
//! way, and classifies the request into hard conflicts and advisory
//! warnings. Storage sits behind the [`store::TripStore`] collaborator;
//! the engine itself holds no state and reads no clock.

pub mod engine;
pub mod limits;
pub mod model;
pub mod observability;
pub mod store;

pub use engine::{
    BusyPeriod, Conflict, ConflictKind, ConflictReport, DaySummary, EngineError, ValidationResult,
    Validator, Warning, WarningKind, check_warnings, is_available, now_ms, overlapping_trips,
};
pub use model::{Company, Driver, Ms, Span, Trip, TripStatus, Vehicle, VehicleType};
pub use store::{InMemoryStore, ResourceRef, TripStore};
