//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Reports table entity
///
/// Owned polymorphically through `owner_type` + `owner_id`; linked to
/// report items through the `report_report_item` join.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Owner kind discriminator
    pub owner_type: String,

    /// Owner key within its kind
    pub owner_id: i64,

    /// Reporting user
    pub user_id: i64,

    #[sea_orm(column_type = "Text", nullable)]
    pub user_message: Option<String>,

    /// Assigned admin
    pub admin_id: Option<i64>,

    #[sea_orm(column_type = "Text", nullable)]
    pub admin_message: Option<String>,

    pub resolved_at: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "report_report_item::Entity")]
    ReportReportItem,
}

impl Related<report_report_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportReportItem.def()
    }
}

impl Related<report_item::Entity> for Entity {
    fn to() -> RelationDef {
        report_report_item::Relation::ReportItem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(report_report_item::Relation::Report.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Report items table
pub mod report_item {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "report_items")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        pub r#type: String,

        pub title: String,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::report_report_item::Entity")]
        ReportReportItem,
    }

    impl Related<super::report_report_item::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::ReportReportItem.def()
        }
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            super::report_report_item::Relation::Report.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::report_report_item::Relation::ReportItem.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Report <-> report item join, no attributes of its own
pub mod report_report_item {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "report_report_item")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub report_id: i64,

        #[sea_orm(primary_key, auto_increment = false)]
        pub report_item_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::ReportId",
            to = "super::Column::Id",
            on_delete = "Cascade"
        )]
        Report,
        #[sea_orm(
            belongs_to = "super::report_item::Entity",
            from = "Column::ReportItemId",
            to = "super::report_item::Column::Id",
            on_delete = "Cascade"
        )]
        ReportItem,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Report.def()
        }
    }

    impl Related<super::report_item::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::ReportItem.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
