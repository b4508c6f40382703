//! 年级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "standards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    pub level: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_active: bool,
    /// JSON 数组形式的科目 ID
    #[sea_orm(column_type = "Text")]
    pub subjects: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::batches::Entity")]
    Batches,
}

impl Related<super::batches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_standard(self) -> crate::models::standards::entities::Standard {
        use crate::models::standards::entities::Standard;

        Standard {
            id: self.id,
            name: self.name,
            level: self.level,
            description: self.description,
            is_active: self.is_active,
            subjects: super::decode_list(&self.subjects),
            created_at: super::timestamp(self.created_at),
            updated_at: super::timestamp(self.updated_at),
        }
    }
}
