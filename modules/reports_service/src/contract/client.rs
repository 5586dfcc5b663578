//! Native client trait for inter-module communication
//!
//! Direct in-process calls, no HTTP.

use super::{
    error::ReportsError,
    model::{NewReportItem, Report, ReportItem, ReportSummary},
};
use async_trait::async_trait;
use polymorph::{ActorResolver, ActorSpec, OwnerRef};

/// Reports service API for inter-module communication
#[async_trait]
pub trait ReportsApi: Send + Sync {
    // ===== Owner Operations =====

    /// All reports of an owner
    async fn list_reports(&self, owner: &OwnerRef) -> Result<Vec<Report>, ReportsError>;

    /// Report an owner, linking the given items; `None` if the actor cannot
    /// be resolved
    async fn create_report(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        item_ids: &[i64],
        user_message: Option<String>,
        actor: &ActorSpec,
    ) -> Result<Option<Report>, ReportsError>;

    /// Any report on the owner, or any by the actor when given
    async fn is_reported(
        &self,
        ctx: &dyn ActorResolver,
        owner: &OwnerRef,
        actor: Option<&ActorSpec>,
    ) -> Result<bool, ReportsError>;

    /// Report state of an owner
    async fn summary(&self, owner: &OwnerRef) -> Result<ReportSummary, ReportsError>;

    /// Delete every report of an owner
    async fn remove_reports(&self, owner: &OwnerRef) -> Result<u64, ReportsError>;

    /// Ids of owners of `kind` reported by the actor
    async fn reported_owner_ids(
        &self,
        ctx: &dyn ActorResolver,
        kind: &str,
        actor: &ActorSpec,
    ) -> Result<Vec<i64>, ReportsError>;

    // ===== Report Operations =====

    async fn get_report(&self, id: i64) -> Result<Report, ReportsError>;

    /// Assign a report; `None` if the admin cannot be resolved
    async fn assign_report(
        &self,
        ctx: &dyn ActorResolver,
        id: i64,
        admin: &ActorSpec,
    ) -> Result<Option<Report>, ReportsError>;

    /// Resolve a report; `None` if the admin cannot be resolved
    async fn resolve_report(
        &self,
        ctx: &dyn ActorResolver,
        id: i64,
        admin: &ActorSpec,
        admin_message: Option<String>,
    ) -> Result<Option<Report>, ReportsError>;

    /// Items linked to a report
    async fn report_items(&self, report_id: i64) -> Result<Vec<ReportItem>, ReportsError>;

    async fn delete_report(&self, id: i64) -> Result<(), ReportsError>;

    // ===== Report Item Operations =====

    async fn create_report_item(&self, item: NewReportItem) -> Result<ReportItem, ReportsError>;

    async fn get_report_item(&self, id: i64) -> Result<ReportItem, ReportsError>;

    async fn list_report_items(&self) -> Result<Vec<ReportItem>, ReportsError>;

    /// Delete an item, detaching it from every report
    async fn delete_report_item(&self, id: i64) -> Result<(), ReportsError>;
}
