// ── RED metrics (request-driven) ────────────────────────────────
//
// Names only; the `metrics` facade is a no-op until the embedding
// application installs an exporter.

/// Counter: validation requests. Labels: outcome (valid|invalid).
pub const VALIDATIONS_TOTAL: &str = "motorpool_validations_total";

/// Counter: hard conflicts detected across all validations.
pub const CONFLICTS_TOTAL: &str = "motorpool_conflicts_total";

/// Counter: soft warnings detected across all validations.
pub const WARNINGS_TOTAL: &str = "motorpool_warnings_total";

/// Counter: resource-discovery queries. Labels: resource (driver|vehicle).
pub const DISCOVERY_TOTAL: &str = "motorpool_discovery_total";
