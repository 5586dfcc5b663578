//! Domain layer - business logic and services

pub mod reportable;
pub mod repository;
pub mod service;
pub mod validation;

pub use reportable::{Reportable, ReportableExt};
pub use repository::{ReportDraft, ReportItemsRepository, ReportsRepository};
pub use service::Service;
