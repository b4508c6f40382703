//! 文件实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub original_name: String,
    #[sea_orm(unique)]
    pub stored_name: String,
    pub file_size: i64,
    pub content_type: String,
    pub uploaded_by: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UploadedBy",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_file(self) -> crate::models::files::entities::StoredFile {
        use crate::models::files::entities::StoredFile;

        StoredFile {
            id: self.id,
            original_name: self.original_name,
            stored_name: self.stored_name,
            file_size: self.file_size,
            content_type: self.content_type,
            uploaded_by: self.uploaded_by,
            created_at: super::timestamp(self.created_at),
        }
    }
}
