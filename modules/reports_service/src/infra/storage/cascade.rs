//! Report removal on owner deletion

use super::repositories::delete_owned;
use async_trait::async_trait;
use polymorph::{CascadeOnDelete, OwnerRef};
use sea_orm::{DatabaseTransaction, DbErr};

/// Removes every report of a deleted owner together with its item links.
///
/// Disabled through `remove_reports_on_delete`; single owner kinds opt out by
/// listing [`crate::CASCADE`] in `Morph::RETAIN_ON_DELETE`.
#[derive(Debug, Clone, Copy)]
pub struct ReportsCascade {
    enabled: bool,
}

impl ReportsCascade {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl CascadeOnDelete for ReportsCascade {
    fn name(&self) -> &'static str {
        crate::CASCADE
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    async fn remove_for_owner(
        &self,
        txn: &DatabaseTransaction,
        owner: &OwnerRef,
    ) -> Result<u64, DbErr> {
        let removed = delete_owned(txn, owner).await?;
        tracing::debug!(owner = %owner, removed, "reports removed with owner");
        Ok(removed)
    }
}
