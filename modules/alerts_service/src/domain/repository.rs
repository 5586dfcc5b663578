//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::Alert;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polymorph::OwnerRef;

/// Alert about to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDraft {
    pub r#type: String,
    pub owner: OwnerRef,
    pub user_id: i64,
    pub description: Option<String>,
}

/// Repository for alerts
#[async_trait]
pub trait AlertsRepository: Send + Sync {
    /// Persist a new alert
    async fn insert(&self, draft: &AlertDraft) -> Result<Alert>;

    /// Find an alert by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Alert>>;

    /// All alerts of an owner, ordered by id
    async fn find_by_owner(&self, owner: &OwnerRef) -> Result<Vec<Alert>>;

    /// Whether the owner has any alert (by `user_id` if given)
    async fn exists(&self, owner: &OwnerRef, user_id: Option<i64>) -> Result<bool>;

    /// Number of alerts of an owner
    async fn count(&self, owner: &OwnerRef) -> Result<u64>;

    /// Delete alerts of an owner, narrowed by type and/or user when given
    async fn delete_matching(
        &self,
        owner: &OwnerRef,
        r#type: Option<&str>,
        user_id: Option<i64>,
    ) -> Result<u64>;

    /// Delete a single alert
    async fn delete_by_id(&self, id: i64) -> Result<bool>;

    /// Stamp `seen_at`, returning the updated alert
    async fn mark_seen(&self, id: i64, at: DateTime<Utc>) -> Result<Option<Alert>>;

    /// Distinct owner ids of `kind` alerted by `user_id`
    async fn owner_ids_by_user(&self, kind: &str, user_id: i64) -> Result<Vec<i64>>;
}
