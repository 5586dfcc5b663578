//! Report capability of a single owner

use super::service::Service;
use crate::contract::{Report, ReportSummary, ReportsError};
use polymorph::{ActorResolver, ActorSpec, Morph, OwnerRef};

/// Report operations scoped to one owner
#[derive(Clone)]
pub struct Reportable<'a> {
    service: &'a Service,
    owner: OwnerRef,
}

impl<'a> Reportable<'a> {
    pub(crate) fn new(service: &'a Service, owner: OwnerRef) -> Self {
        Self { service, owner }
    }

    pub fn owner(&self) -> &OwnerRef {
        &self.owner
    }

    pub async fn reports(&self) -> Result<Vec<Report>, ReportsError> {
        self.service.reports(&self.owner).await
    }

    pub async fn create_report(
        &self,
        ctx: &dyn ActorResolver,
        item_ids: &[i64],
        user_message: Option<String>,
        actor: &ActorSpec,
    ) -> Result<Option<Report>, ReportsError> {
        self.service
            .create_report(ctx, &self.owner, item_ids, user_message, actor)
            .await
    }

    pub async fn is_reported(
        &self,
        ctx: &dyn ActorResolver,
        actor: Option<&ActorSpec>,
    ) -> Result<bool, ReportsError> {
        self.service.is_reported(ctx, &self.owner, actor).await
    }

    pub async fn reports_count(&self) -> Result<u64, ReportsError> {
        self.service.reports_count(&self.owner).await
    }

    pub async fn summary(&self) -> Result<ReportSummary, ReportsError> {
        self.service.summary(&self.owner).await
    }

    pub async fn remove_reports(&self) -> Result<u64, ReportsError> {
        self.service.remove_reports(&self.owner).await
    }
}

/// Report capability for any `Morph` owner
pub trait ReportableExt: Morph {
    fn reportable_in<'a>(&self, service: &'a Service) -> Reportable<'a> {
        service.reportable(&self.owner_ref())
    }
}

impl<T: Morph> ReportableExt for T {}
