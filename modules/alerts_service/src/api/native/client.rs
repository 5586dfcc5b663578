//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Alert, AlertSummary, AlertsApi, AlertsError, NewAlert};
use crate::domain::Service;
use async_trait::async_trait;
use polymorph::{ActorResolver, ActorSpec, OwnerRef};
use std::sync::Arc;

/// Native client that calls the domain service directly
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AlertsApi for NativeClient {
    async fn list_alerts(&self, owner: &OwnerRef) -> Result<Vec<Alert>, AlertsError> {
        self.service.alerts(owner).await
    }

    async fn create_alert(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        alert: NewAlert,
    ) -> Result<Option<Alert>, AlertsError> {
        self.service.create_alert(ctx, owner, alert).await
    }

    async fn is_alerted_by(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        actor: &ActorSpec,
    ) -> Result<bool, AlertsError> {
        self.service.is_alerted_by(ctx, owner, actor).await
    }

    async fn summary(&self, owner: &OwnerRef) -> Result<AlertSummary, AlertsError> {
        self.service.summary(owner).await
    }

    async fn delete_alerts(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        r#type: Option<&str>,
        actor: Option<&ActorSpec>,
    ) -> Result<u64, AlertsError> {
        self.service.delete_alert(ctx, owner, r#type, actor).await
    }

    async fn remove_alerts(&self, owner: &OwnerRef) -> Result<u64, AlertsError> {
        self.service.remove_alerts(owner).await
    }

    async fn alerted_owner_ids(
        &self,
        ctx: &dyn ActorResolver,
        kind: &str,
        actor: &ActorSpec,
    ) -> Result<Vec<i64>, AlertsError> {
        self.service.alerted_owner_ids(ctx, kind, actor).await
    }

    async fn get_alert(&self, id: i64) -> Result<Alert, AlertsError> {
        self.service.get_alert(id).await
    }

    async fn mark_seen(&self, id: i64) -> Result<Alert, AlertsError> {
        let mut alert = self.service.get_alert(id).await?;
        self.service.seen(&mut alert).await?;
        Ok(alert)
    }

    async fn delete_alert(&self, id: i64) -> Result<(), AlertsError> {
        self.service.delete_alert_by_id(id).await
    }
}
