//! Reports Service Module
//!
//! Lets any registered domain entity be reported by users. A report links
//! any number of report items, can be assigned to an admin and resolved.
//! Owners are referenced polymorphically through `(owner_type, owner_id)`.

// Public exports
pub mod contract;
pub use contract::{
    client::ReportsApi, error::ReportsError, NewReportItem, Report, ReportItem, ReportStatus,
    ReportSummary,
};

pub mod module;
pub use module::ReportsServiceModule;

/// Cascade name owner kinds list in `Morph::RETAIN_ON_DELETE` to keep their
/// reports when they are deleted
pub const CASCADE: &str = "reports";

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
