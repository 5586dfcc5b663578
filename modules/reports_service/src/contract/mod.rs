//! Contract layer - public API for inter-module communication
//!
//! Transport-agnostic models, errors and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::ReportsApi;
pub use error::ReportsError;
pub use model::{NewReportItem, Report, ReportItem, ReportStatus, ReportSummary};
pub use polymorph::{Actor, ActorCtx, ActorResolver, ActorSpec, OwnerRef};
