//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{NewReportItem, Report, ReportItem};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polymorph::OwnerRef;

/// Report about to be persisted together with its item links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub owner: OwnerRef,
    pub user_id: i64,
    pub user_message: Option<String>,
    /// Distinct item ids to link
    pub item_ids: Vec<i64>,
}

/// Repository for reports and their item links
#[async_trait]
pub trait ReportsRepository: Send + Sync {
    /// Persist a report and link its items atomically
    async fn insert(&self, draft: &ReportDraft) -> Result<Report>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Report>>;

    /// All reports of an owner, ordered by id
    async fn find_by_owner(&self, owner: &OwnerRef) -> Result<Vec<Report>>;

    /// Whether the owner has any report (by `user_id` if given)
    async fn exists(&self, owner: &OwnerRef, user_id: Option<i64>) -> Result<bool>;

    async fn count(&self, owner: &OwnerRef) -> Result<u64>;

    /// Set the admin, returning the updated report
    async fn assign(&self, id: i64, admin_id: i64, at: DateTime<Utc>) -> Result<Option<Report>>;

    /// Stamp `resolved_at`, set the admin only if none is assigned yet and
    /// store `admin_message` when given
    async fn resolve(
        &self,
        id: i64,
        admin_id: i64,
        admin_message: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<Option<Report>>;

    /// Delete a report and its item links
    async fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// Delete every report of an owner and their item links
    async fn delete_by_owner(&self, owner: &OwnerRef) -> Result<u64>;

    /// Distinct owner ids of `kind` reported by `user_id`
    async fn owner_ids_by_user(&self, kind: &str, user_id: i64) -> Result<Vec<i64>>;
}

/// Repository for report items
#[async_trait]
pub trait ReportItemsRepository: Send + Sync {
    async fn insert(&self, item: &NewReportItem) -> Result<ReportItem>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ReportItem>>;

    /// All items ordered by id
    async fn list_all(&self) -> Result<Vec<ReportItem>>;

    /// Items linked to a report
    async fn find_by_report(&self, report_id: i64) -> Result<Vec<ReportItem>>;

    /// Delete an item and its links to reports
    async fn delete_by_id(&self, id: i64) -> Result<bool>;
}
