//! Domain layer - business logic and services

pub mod alertable;
pub mod repository;
pub mod service;
pub mod validation;

pub use alertable::{Alertable, AlertableExt};
pub use repository::{AlertDraft, AlertsRepository};
pub use service::Service;
