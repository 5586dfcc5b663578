//! Native client trait for inter-module communication
//!
//! Direct in-process calls, no HTTP.

use super::{error::AlertsError, model::{Alert, AlertSummary, NewAlert}};
use async_trait::async_trait;
use polymorph::{ActorResolver, ActorSpec, OwnerRef};

/// Alerts service API for inter-module communication
#[async_trait]
pub trait AlertsApi: Send + Sync {
    // ===== Owner Operations =====

    /// All alerts of an owner
    async fn list_alerts(&self, owner: &OwnerRef) -> Result<Vec<Alert>, AlertsError>;

    /// Raise an alert; `None` if the actor cannot be resolved
    async fn create_alert(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        alert: NewAlert,
    ) -> Result<Option<Alert>, AlertsError>;

    /// Whether the actor raised any alert on the owner
    async fn is_alerted_by(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        actor: &ActorSpec,
    ) -> Result<bool, AlertsError>;

    /// Alert state of an owner
    async fn summary(&self, owner: &OwnerRef) -> Result<AlertSummary, AlertsError>;

    /// Delete alerts of a type, optionally only those of one actor
    async fn delete_alerts(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        r#type: Option<&str>,
        actor: Option<&ActorSpec>,
    ) -> Result<u64, AlertsError>;

    /// Delete every alert of an owner
    async fn remove_alerts(&self, owner: &OwnerRef) -> Result<u64, AlertsError>;

    /// Ids of owners of `kind` alerted by the actor
    async fn alerted_owner_ids(
        &self,
        ctx: &dyn ActorResolver,
        kind: &str,
        actor: &ActorSpec,
    ) -> Result<Vec<i64>, AlertsError>;

    // ===== Alert Operations =====

    /// Get an alert by id
    async fn get_alert(&self, id: i64) -> Result<Alert, AlertsError>;

    /// Mark an alert seen, returning the updated alert
    async fn mark_seen(&self, id: i64) -> Result<Alert, AlertsError>;

    /// Delete a single alert
    async fn delete_alert(&self, id: i64) -> Result<(), AlertsError>;
}
