//! Alerts Service Module
//!
//! Lets any registered domain entity own alerts. An alert is raised by a
//! user, carries an optional type and description, and can be marked seen.
//! Owners are referenced polymorphically through `(owner_type, owner_id)`.

// Public exports
pub mod contract;
pub use contract::{
    client::AlertsApi, error::AlertsError, Alert, AlertSummary, NewAlert, DEFAULT_ALERT_TYPE,
};

pub mod module;
pub use module::AlertsServiceModule;

/// Cascade name owner kinds list in `Morph::RETAIN_ON_DELETE` to keep their
/// alerts when they are deleted
pub const CASCADE: &str = "alerts";

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
