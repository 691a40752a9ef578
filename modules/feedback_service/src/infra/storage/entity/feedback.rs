use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

/// Feedbacks table entity. Rows are never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "feedbacks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub content: String,

    pub feedback_type: StoredFeedbackType,

    pub created_at: DateTimeUtc,
}

/// `feedbacks.feedback_type` column, stored as its string tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum StoredFeedbackType {
    #[sea_orm(string_value = "complaint")]
    Complaint,
    #[sea_orm(string_value = "suggestion")]
    Suggestion,
    #[sea_orm(string_value = "request")]
    Request,
    #[sea_orm(string_value = "compliment")]
    Compliment,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            self.created_at = Set(chrono::Utc::now());
        }
        Ok(self)
    }
}
