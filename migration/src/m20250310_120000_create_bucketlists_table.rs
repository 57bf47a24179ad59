use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bucketlists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bucketlists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Bucketlists::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Bucketlists::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Bucketlists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Bucketlists::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bucketlists_user_id")
                            .from(Bucketlists::Table, Bucketlists::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Every listing is scoped by owner
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_bucketlists_user_id
                ON bucketlists (user_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_bucketlists_updated_at
                BEFORE UPDATE ON bucketlists
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_bucketlists_updated_at ON bucketlists;
                DROP INDEX IF EXISTS idx_bucketlists_user_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bucketlists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bucketlists {
    Table,
    Id,
    Name,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
