//! Error taxonomy for region state transitions.
//!
//! Both variants are configuration faults rather than runtime conditions:
//! selection is constrained to registry cities and the registry only holds
//! valid IANA identifiers. They are still checked so a bad table or config
//! surfaces as a visible fault for the affected region instead of a panic.

/// Errors raised by the registry, the clock service and region controllers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    /// The city is not listed in the registry (or not in the asking region's list).
    #[error("Unknown city: {0}")]
    UnknownCity(String),
    /// The timezone identifier is not recognised by the timezone database.
    #[error("Invalid timezone identifier: {0}")]
    InvalidTimezone(String),
}
