//! Contract layer - public API for inter-module communication
//!
//! Transport-agnostic models, errors and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::AlertsApi;
pub use error::AlertsError;
pub use model::{Alert, AlertSummary, NewAlert, DEFAULT_ALERT_TYPE};
pub use polymorph::{Actor, ActorCtx, ActorResolver, ActorSpec, OwnerRef};
