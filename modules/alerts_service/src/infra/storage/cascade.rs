//! Alert removal on owner deletion

use super::repositories::delete_owned;
use async_trait::async_trait;
use polymorph::{CascadeOnDelete, OwnerRef};
use sea_orm::{DatabaseTransaction, DbErr};

/// Removes every alert of a deleted owner.
///
/// Disabled through `remove_alerts_on_delete`; single owner kinds opt out by
/// listing [`crate::CASCADE`] in `Morph::RETAIN_ON_DELETE`.
#[derive(Debug, Clone, Copy)]
pub struct AlertsCascade {
    enabled: bool,
}

impl AlertsCascade {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl CascadeOnDelete for AlertsCascade {
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
        let removed = delete_owned(txn, owner, None, None).await?;
        tracing::debug!(owner = %owner, removed, "alerts removed with owner");
        Ok(removed)
    }
}
