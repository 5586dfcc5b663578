//! Atomic owner deletion
//!
//! Dependent rows (alerts, reports and their join rows, ...) are removed in
//! the same transaction as the owner row, so an owner can never disappear
//! while its dependents survive, or the other way around.

use crate::error::MorphError;
use crate::owner::{KindRegistry, OwnerRef};
use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use std::sync::Arc;

/// Participant in owner deletion
#[async_trait]
pub trait CascadeOnDelete: Send + Sync {
    /// Name owner kinds use to opt out (see `Morph::RETAIN_ON_DELETE`)
    fn name(&self) -> &'static str;

    /// Module-wide switch; a disabled cascade is skipped like a retained one
    fn enabled(&self) -> bool {
        true
    }

    /// Remove the rows owned by `owner`, returning how many were deleted
    async fn remove_for_owner(
        &self,
        txn: &DatabaseTransaction,
        owner: &OwnerRef,
    ) -> Result<u64, DbErr>;
}

/// Outcome of [`OwnerDeleter::delete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerDeletion {
    pub owner: OwnerRef,
    /// Whether the owner row existed
    pub owner_deleted: bool,
    /// Rows removed per cascade that ran (disabled and retained ones are absent)
    pub removed: Vec<(&'static str, u64)>,
}

impl OwnerDeletion {
    /// Rows removed by the named cascade (0 if it did not run)
    pub fn removed_by(&self, name: &str) -> u64 {
        self.removed
            .iter()
            .find(|(cascade, _)| *cascade == name)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn ran(&self, name: &str) -> bool {
        self.removed.iter().any(|(cascade, _)| *cascade == name)
    }
}

/// Deletes owner rows together with everything hanging off them
pub struct OwnerDeleter {
    db: Arc<DatabaseConnection>,
    registry: Arc<KindRegistry>,
    cascades: Vec<Arc<dyn CascadeOnDelete>>,
}

impl OwnerDeleter {
    pub fn new(db: Arc<DatabaseConnection>, registry: Arc<KindRegistry>) -> Self {
        Self {
            db,
            registry,
            cascades: Vec::new(),
        }
    }

    pub fn with_cascade(mut self, cascade: Arc<dyn CascadeOnDelete>) -> Self {
        self.cascades.push(cascade);
        self
    }

    pub fn cascade_names(&self) -> Vec<&'static str> {
        self.cascades.iter().map(|c| c.name()).collect()
    }

    /// Delete `owner` and its dependents in a single transaction.
    ///
    /// Disabled cascades and cascades the owner kind retains are skipped. Any failure rolls the
    /// whole deletion back.
    pub async fn delete(&self, owner: &OwnerRef) -> Result<OwnerDeletion, MorphError> {
        let entry = self.registry.validate(owner)?;
        let txn = self.db.begin().await?;

        let mut removed = Vec::with_capacity(self.cascades.len());
        for cascade in &self.cascades {
            if !cascade.enabled() {
                tracing::debug!(owner = %owner, cascade = cascade.name(), "cascade disabled");
                continue;
            }
            if !entry.cascades(cascade.name()) {
                tracing::debug!(owner = %owner, cascade = cascade.name(), "cascade retained by owner kind");
                continue;
            }
            let count = cascade.remove_for_owner(&txn, owner).await?;
            removed.push((cascade.name(), count));
        }

        let stmt = Query::delete()
            .from_table(Alias::new(entry.table.as_str()))
            .and_where(Expr::col(Alias::new(entry.key_column.as_str())).eq(owner.id))
            .to_owned();
        let backend = txn.get_database_backend();
        let result = txn.execute(backend.build(&stmt)).await?;

        txn.commit().await?;

        let deletion = OwnerDeletion {
            owner: owner.clone(),
            owner_deleted: result.rows_affected() > 0,
            removed,
        };
        tracing::info!(
            owner = %owner,
            owner_deleted = deletion.owner_deleted,
            removed = ?deletion.removed,
            "owner deleted"
        );
        Ok(deletion)
    }
}
