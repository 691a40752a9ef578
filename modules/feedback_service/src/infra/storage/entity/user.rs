use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

/// Users table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub username: String,

    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub email: String,

    /// Opaque credential blob
    pub password: String,

    /// Storage default: true
    pub is_active: bool,

    /// Storage default: 1
    pub role_id: i32,

    /// Set once on insert
    pub created_at: DateTimeUtc,

    /// Refreshed on every update that changes a column
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Foreign key to roles
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    // Timestamps are taken per statement; nothing is captured at startup.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();
        if insert {
            self.created_at = Set(now);
            self.updated_at = Set(now);
        } else if self.is_changed() {
            self.updated_at = Set(now);
        }
        Ok(self)
    }
}
