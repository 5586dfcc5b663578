//! Database migrations for alerts service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241210_000001_create_alerts::Migration)]
    }

    // Own history table so several modules can migrate the same database
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_alerts").into_iden()
    }
}

mod m20241210_000001_create_alerts {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut table = Table::create();
            table
                .table(Alerts::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Alerts::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(Alerts::Type)
                        .string()
                        .not_null()
                        .default("alert"),
                )
                .col(ColumnDef::new(Alerts::OwnerType).string().not_null())
                .col(ColumnDef::new(Alerts::OwnerId).big_integer().not_null())
                .col(ColumnDef::new(Alerts::UserId).big_integer().not_null())
                .col(ColumnDef::new(Alerts::SeenAt).timestamp_with_time_zone())
                .col(ColumnDef::new(Alerts::Description).text())
                .col(
                    ColumnDef::new(Alerts::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .col(
                    ColumnDef::new(Alerts::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                );

            // users belong to the host application; link them when present
            if manager.has_table("users").await? {
                table.foreign_key(
                    ForeignKey::create()
                        .name("fk_alerts_user")
                        .from(Alerts::Table, Alerts::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                );
            }

            manager.create_table(table.to_owned()).await?;

            // Create indexes
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_alerts_owner")
                        .table(Alerts::Table)
                        .col(Alerts::OwnerType)
                        .col(Alerts::OwnerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_alerts_user_id")
                        .table(Alerts::Table)
                        .col(Alerts::UserId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Alerts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Alerts {
        Table,
        Id,
        Type,
        OwnerType,
        OwnerId,
        UserId,
        SeenAt,
        Description,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Users {
        Table,
        Id,
    }
}
