//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{NewReportItem, Report, ReportItem, ReportSummary, ReportsApi, ReportsError};
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
impl ReportsApi for NativeClient {
    async fn list_reports(&self, owner: &OwnerRef) -> Result<Vec<Report>, ReportsError> {
        self.service.reports(owner).await
    }

    async fn create_report(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        item_ids: &[i64],
        user_message: Option<String>,
        actor: &ActorSpec,
    ) -> Result<Option<Report>, ReportsError> {
        self.service
            .create_report(ctx, owner, item_ids, user_message, actor)
            .await
    }

    async fn is_reported(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        actor: Option<&ActorSpec>,
    ) -> Result<bool, ReportsError> {
        self.service.is_reported(ctx, owner, actor).await
    }

    async fn summary(&self, owner: &OwnerRef) -> Result<ReportSummary, ReportsError> {
        self.service.summary(owner).await
    }

    async fn remove_reports(&self, owner: &OwnerRef) -> Result<u64, ReportsError> {
        self.service.remove_reports(owner).await
    }

    async fn reported_owner_ids(
        &self,
        ctx: &dyn ActorResolver,
        kind: &str,
        actor: &ActorSpec,
    ) -> Result<Vec<i64>, ReportsError> {
        self.service.reported_owner_ids(ctx, kind, actor).await
    }

    async fn get_report(&self, id: i64) -> Result<Report, ReportsError> {
        self.service.get_report(id).await
    }

    async fn assign_report(
        &self,
        ctx: &dyn ActorResolver,
        id: i64,
        admin: &ActorSpec,
    ) -> Result<Option<Report>, ReportsError> {
        let mut report = self.service.get_report(id).await?;
        let assigned = self.service.assign(ctx, &mut report, admin).await?;
        Ok(assigned.then_some(report))
    }

    async fn resolve_report(
        &self,
        ctx: &dyn ActorResolver,
        id: i64,
        admin: &ActorSpec,
        admin_message: Option<String>,
    ) -> Result<Option<Report>, ReportsError> {
        let mut report = self.service.get_report(id).await?;
        let resolved = self
            .service
            .resolve(ctx, &mut report, admin, admin_message)
            .await?;
        Ok(resolved.then_some(report))
    }

    async fn report_items(&self, report_id: i64) -> Result<Vec<ReportItem>, ReportsError> {
        self.service.report_items(report_id).await
    }

    async fn delete_report(&self, id: i64) -> Result<(), ReportsError> {
        self.service.delete_report(id).await
    }

    async fn create_report_item(&self, item: NewReportItem) -> Result<ReportItem, ReportsError> {
        self.service.create_report_item(item).await
    }

    async fn get_report_item(&self, id: i64) -> Result<ReportItem, ReportsError> {
        self.service.get_report_item(id).await
    }

    async fn list_report_items(&self) -> Result<Vec<ReportItem>, ReportsError> {
        self.service.list_report_items().await
    }

    async fn delete_report_item(&self, id: i64) -> Result<(), ReportsError> {
        self.service.delete_report_item(id).await
    }
}
