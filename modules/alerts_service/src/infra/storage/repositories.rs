//! SeaORM repository implementations

use crate::contract::Alert;
use crate::domain::repository::{AlertDraft, AlertsRepository};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polymorph::OwnerRef;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use super::entity;

fn owned_by(owner: &OwnerRef) -> Condition {
    Condition::all()
        .add(entity::Column::OwnerType.eq(owner.kind.as_str()))
        .add(entity::Column::OwnerId.eq(owner.id))
}

/// Delete alerts of an owner, optionally narrowed by type and user.
///
/// Generic over the connection so owner deletion can run it inside its
/// transaction.
pub(crate) async fn delete_owned<C: ConnectionTrait>(
    conn: &C,
    owner: &OwnerRef,
    r#type: Option<&str>,
    user_id: Option<i64>,
) -> Result<u64, DbErr> {
    let mut cond = owned_by(owner);
    if let Some(t) = r#type {
        cond = cond.add(entity::Column::Type.eq(t));
    }
    if let Some(uid) = user_id {
        cond = cond.add(entity::Column::UserId.eq(uid));
    }

    let result = entity::Entity::delete_many().filter(cond).exec(conn).await?;
    Ok(result.rows_affected)
}

// ===== Alerts Repository =====

pub struct SeaOrmAlertsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAlertsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AlertsRepository for SeaOrmAlertsRepository {
    async fn insert(&self, draft: &AlertDraft) -> Result<Alert> {
        let active: entity::ActiveModel = draft.into();
        let model = active.insert(&*self.db).await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Alert>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(|e| e.into()))
    }

    async fn find_by_owner(&self, owner: &OwnerRef) -> Result<Vec<Alert>> {
        let results = entity::Entity::find()
            .filter(owned_by(owner))
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn exists(&self, owner: &OwnerRef, user_id: Option<i64>) -> Result<bool> {
        let mut query = entity::Entity::find().filter(owned_by(owner));
        if let Some(uid) = user_id {
            query = query.filter(entity::Column::UserId.eq(uid));
        }

        Ok(query.count(&*self.db).await? > 0)
    }

    async fn count(&self, owner: &OwnerRef) -> Result<u64> {
        let count = entity::Entity::find()
            .filter(owned_by(owner))
            .count(&*self.db)
            .await?;
        Ok(count)
    }

    async fn delete_matching(
        &self,
        owner: &OwnerRef,
        r#type: Option<&str>,
        user_id: Option<i64>,
    ) -> Result<u64> {
        Ok(delete_owned(&*self.db, owner, r#type, user_id).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn mark_seen(&self, id: i64, at: DateTime<Utc>) -> Result<Option<Alert>> {
        use sea_orm::ActiveValue::Set;

        let Some(existing) = entity::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::ActiveModel = existing.into();
        active.seen_at = Set(Some(at));
        active.updated_at = Set(at);
        let updated = active.update(&*self.db).await?;

        Ok(Some(updated.into()))
    }

    async fn owner_ids_by_user(&self, kind: &str, user_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = entity::Entity::find()
            .select_only()
            .column(entity::Column::OwnerId)
            .filter(entity::Column::OwnerType.eq(kind))
            .filter(entity::Column::UserId.eq(user_id))
            .distinct()
            .order_by_asc(entity::Column::OwnerId)
            .into_tuple()
            .all(&*self.db)
            .await?;

        Ok(ids)
    }
}
