//! Database migrations for reports service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241210_000001_create_reports::Migration)]
    }

    // Own history table so several modules can migrate the same database
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_reports").into_iden()
    }
}

mod m20241210_000001_create_reports {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut reports = Table::create();
            reports
                .table(Reports::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Reports::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Reports::OwnerType).string().not_null())
                .col(ColumnDef::new(Reports::OwnerId).big_integer().not_null())
                .col(ColumnDef::new(Reports::UserId).big_integer().not_null())
                .col(ColumnDef::new(Reports::UserMessage).text())
                .col(ColumnDef::new(Reports::AdminId).big_integer())
                .col(ColumnDef::new(Reports::AdminMessage).text())
                .col(ColumnDef::new(Reports::ResolvedAt).timestamp_with_time_zone())
                .col(
                    ColumnDef::new(Reports::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .col(
                    ColumnDef::new(Reports::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                );

            // users belong to the host application; link them when present
            if manager.has_table("users").await? {
                reports
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_user")
                            .from(Reports::Table, Reports::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reports_admin")
                            .from(Reports::Table, Reports::AdminId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    );
            }

            manager.create_table(reports.to_owned()).await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_reports_owner")
                        .table(Reports::Table)
                        .col(Reports::OwnerType)
                        .col(Reports::OwnerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ReportItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ReportItems::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(ReportItems::Type).string().not_null())
                        .col(ColumnDef::new(ReportItems::Title).string().not_null())
                        .col(
                            ColumnDef::new(ReportItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(ReportItems::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ReportReportItem::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ReportReportItem::ReportId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ReportReportItem::ReportItemId)
                                .big_integer()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .col(ReportReportItem::ReportId)
                                .col(ReportReportItem::ReportItemId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_report_report_item_report")
                                .from(ReportReportItem::Table, ReportReportItem::ReportId)
                                .to(Reports::Table, Reports::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_report_report_item_item")
                                .from(ReportReportItem::Table, ReportReportItem::ReportItemId)
                                .to(ReportItems::Table, ReportItems::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ReportReportItem::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ReportItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Reports::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Reports {
        Table,
        Id,
        OwnerType,
        OwnerId,
        UserId,
        UserMessage,
        AdminId,
        AdminMessage,
        ResolvedAt,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum ReportItems {
        Table,
        Id,
        Type,
        Title,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum ReportReportItem {
        Table,
        ReportId,
        ReportItemId,
    }

    #[derive(DeriveIden)]
    enum Users {
        Table,
        Id,
    }
}
