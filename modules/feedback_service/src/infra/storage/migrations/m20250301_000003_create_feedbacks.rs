use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Accepted values of `feedbacks.feedback_type`
const FEEDBACK_TYPES: [&str; 4] = ["complaint", "suggestion", "request", "compliment"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedbacks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Feedbacks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Feedbacks::Content).string().not_null())
                    .col(
                        ColumnDef::new(Feedbacks::FeedbackType)
                            .string_len(20)
                            .not_null()
                            .check(Expr::col(Feedbacks::FeedbackType).is_in(FEEDBACK_TYPES)),
                    )
                    .col(
                        ColumnDef::new(Feedbacks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_feedbacks_feedback_type")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::FeedbackType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedbacks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Feedbacks {
    Table,
    Id,
    Content,
    FeedbackType,
    CreatedAt,
}
