use sea_orm_migration::prelude::*;

/// Shared by the bucketlists and items migrations, which attach their own
/// triggers to it.
const TOUCH_UPDATED_AT_FN: &str = r#"
CREATE OR REPLACE FUNCTION update_updated_at_column()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = CURRENT_TIMESTAMP;
    RETURN NEW;
END;
$$ language 'plpgsql';
"#;

const USERS_TRIGGER: &str = r#"
CREATE TRIGGER update_users_updated_at
BEFORE UPDATE ON users
FOR EACH ROW
EXECUTE FUNCTION update_updated_at_column();
"#;

// Login and registration only ever match active accounts.
const ACTIVE_EMAIL_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_users_email_active
ON users (email)
WHERE is_active = true;
"#;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let timestamp = |col: Users| {
            ColumnDef::new(col)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .to_owned()
        };

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::FirstName).string_len(25).not_null())
                    .col(ColumnDef::new(Users::LastName).string_len(25).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(120)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(timestamp(Users::CreatedAt))
                    .col(timestamp(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        let conn = manager.get_connection();
        for sql in [ACTIVE_EMAIL_INDEX, TOUCH_UPDATED_AT_FN, USERS_TRIGGER] {
            conn.execute_unprepared(sql).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for sql in [
            "DROP TRIGGER IF EXISTS update_users_updated_at ON users",
            "DROP FUNCTION IF EXISTS update_updated_at_column",
            "DROP INDEX IF EXISTS idx_users_email_active",
        ] {
            conn.execute_unprepared(sql).await?;
        }

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
