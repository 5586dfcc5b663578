//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Alerts table entity
///
/// The owner is polymorphic: `owner_type` names the owner kind and
/// `owner_id` its key, so there is no relation to declare here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "alerts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Alert type ("alert" unless given)
    pub r#type: String,

    /// Owner kind discriminator
    pub owner_type: String,

    /// Owner key within its kind
    pub owner_id: i64,

    /// User who raised the alert
    pub user_id: i64,

    pub seen_at: Option<DateTimeUtc>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
