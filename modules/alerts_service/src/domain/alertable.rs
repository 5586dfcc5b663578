//! Alert capability of a single owner
//!
//! `Alertable` pairs an owner reference with the service, so call sites read
//! `book.alertable_in(&service).is_alerted()` instead of threading the owner
//! through every call.

use super::service::Service;
use crate::contract::{Alert, AlertSummary, AlertsError, NewAlert};
use polymorph::{ActorResolver, ActorSpec, Morph, OwnerRef};

/// Alert operations scoped to one owner
#[derive(Clone)]
pub struct Alertable<'a> {
    service: &'a Service,
    owner: OwnerRef,
}

impl<'a> Alertable<'a> {
    pub(crate) fn new(service: &'a Service, owner: OwnerRef) -> Self {
        Self { service, owner }
    }

    pub fn owner(&self) -> &OwnerRef {
        &self.owner
    }

    pub async fn alerts(&self) -> Result<Vec<Alert>, AlertsError> {
        self.service.alerts(&self.owner).await
    }

    pub async fn create_alert(
        &self,
        ctx: &dyn ActorResolver,
        alert: NewAlert,
    ) -> Result<Option<Alert>, AlertsError> {
        self.service.create_alert(ctx, &self.owner, alert).await
    }

    pub async fn is_alerted_by(
        &self,
        ctx: &dyn ActorResolver,
        actor: &ActorSpec,
    ) -> Result<bool, AlertsError> {
        self.service.is_alerted_by(ctx, &self.owner, actor).await
    }

    pub async fn is_alerted(&self) -> Result<bool, AlertsError> {
        self.service.is_alerted(&self.owner).await
    }

    pub async fn alerts_count(&self) -> Result<u64, AlertsError> {
        self.service.alerts_count(&self.owner).await
    }

    pub async fn summary(&self) -> Result<AlertSummary, AlertsError> {
        self.service.summary(&self.owner).await
    }

    pub async fn delete_alert(
        &self,
        ctx: &dyn ActorResolver,
        r#type: Option<&str>,
        actor: Option<&ActorSpec>,
    ) -> Result<u64, AlertsError> {
        self.service
            .delete_alert(ctx, &self.owner, r#type, actor)
            .await
    }

    pub async fn remove_alerts(&self) -> Result<u64, AlertsError> {
        self.service.remove_alerts(&self.owner).await
    }
}

/// Alert capability for any `Morph` owner
pub trait AlertableExt: Morph {
    fn alertable_in<'a>(&self, service: &'a Service) -> Alertable<'a> {
        service.alertable(&self.owner_ref())
    }
}

impl<T: Morph> AlertableExt for T {}
