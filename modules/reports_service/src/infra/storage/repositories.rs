//! SeaORM repository implementations

use crate::contract::{NewReportItem, Report, ReportItem};
use crate::domain::repository::{ReportDraft, ReportItemsRepository, ReportsRepository};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polymorph::OwnerRef;
use sea_orm::sea_query::{Func, SimpleExpr};
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};
use std::sync::Arc;

use super::entity;
use super::entity::{report_item, report_report_item};

fn owned_by(owner: &OwnerRef) -> Condition {
    Condition::all()
        .add(entity::Column::OwnerType.eq(owner.kind.as_str()))
        .add(entity::Column::OwnerId.eq(owner.id))
}

/// Delete every report of an owner and its item links.
///
/// Links are removed explicitly so the result does not depend on the
/// backend enforcing foreign keys.
pub(crate) async fn delete_owned<C: ConnectionTrait>(conn: &C, owner: &OwnerRef) -> Result<u64, DbErr> {
    let ids: Vec<i64> = entity::Entity::find()
        .select_only()
        .column(entity::Column::Id)
        .filter(owned_by(owner))
        .into_tuple()
        .all(conn)
        .await?;
    if ids.is_empty() {
        return Ok(0);
    }

    report_report_item::Entity::delete_many()
        .filter(report_report_item::Column::ReportId.is_in(ids.clone()))
        .exec(conn)
        .await?;

    let result = entity::Entity::delete_many()
        .filter(entity::Column::Id.is_in(ids))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

// ===== Reports Repository =====

pub struct SeaOrmReportsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmReportsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn reload(&self, id: i64, rows_affected: u64) -> Result<Option<Report>> {
        if rows_affected == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }
}

#[async_trait]
impl ReportsRepository for SeaOrmReportsRepository {
    async fn insert(&self, draft: &ReportDraft) -> Result<Report> {
        let txn = self.db.begin().await?;

        let active: entity::ActiveModel = draft.into();
        let model = active.insert(&txn).await?;

        if !draft.item_ids.is_empty() {
            let links = draft.item_ids.iter().map(|item_id| report_report_item::ActiveModel {
                report_id: sea_orm::ActiveValue::Set(model.id),
                report_item_id: sea_orm::ActiveValue::Set(*item_id),
            });
            report_report_item::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Report>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(|e| e.into()))
    }

    async fn find_by_owner(&self, owner: &OwnerRef) -> Result<Vec<Report>> {
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

    async fn assign(&self, id: i64, admin_id: i64, at: DateTime<Utc>) -> Result<Option<Report>> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::AdminId, Expr::value(admin_id))
            .col_expr(entity::Column::UpdatedAt, Expr::value(at))
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        self.reload(id, result.rows_affected).await
    }

    async fn resolve(
        &self,
        id: i64,
        admin_id: i64,
        admin_message: Option<&str>,
        at: DateTime<Utc>,
    ) -> Result<Option<Report>> {
        // keep an existing assignment
        let args: [SimpleExpr; 2] = [
            Expr::col(entity::Column::AdminId).into(),
            Expr::val(admin_id).into(),
        ];
        let admin = Func::coalesce(args);

        let mut update = entity::Entity::update_many()
            .col_expr(entity::Column::AdminId, admin.into())
            .col_expr(entity::Column::ResolvedAt, Expr::value(at))
            .col_expr(entity::Column::UpdatedAt, Expr::value(at));
        if let Some(message) = admin_message {
            update = update.col_expr(entity::Column::AdminMessage, Expr::value(message));
        }

        let result = update
            .filter(entity::Column::Id.eq(id))
            .exec(&*self.db)
            .await?;

        self.reload(id, result.rows_affected).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        report_report_item::Entity::delete_many()
            .filter(report_report_item::Column::ReportId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_owner(&self, owner: &OwnerRef) -> Result<u64> {
        let txn = self.db.begin().await?;
        let removed = delete_owned(&txn, owner).await?;
        txn.commit().await?;
        Ok(removed)
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

// ===== Report Items Repository =====

pub struct SeaOrmReportItemsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmReportItemsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportItemsRepository for SeaOrmReportItemsRepository {
    async fn insert(&self, item: &NewReportItem) -> Result<ReportItem> {
        let active: report_item::ActiveModel = item.into();
        let model = active.insert(&*self.db).await?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ReportItem>> {
        let result = report_item::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> Result<Vec<ReportItem>> {
        let results = report_item::Entity::find()
            .order_by_asc(report_item::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn find_by_report(&self, report_id: i64) -> Result<Vec<ReportItem>> {
        let results = report_item::Entity::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                report_item::Relation::ReportReportItem.def(),
            )
            .filter(report_report_item::Column::ReportId.eq(report_id))
            .order_by_asc(report_item::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        report_report_item::Entity::delete_many()
            .filter(report_report_item::Column::ReportItemId.eq(id))
            .exec(&txn)
            .await?;
        let result = report_item::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected > 0)
    }
}
