//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub user_id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub gender: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub qualification: String,
    pub experience: i32,
    pub joining_date: String,
    pub salary: f64,
    pub status: String,
    /// JSON 数组形式的科目 ID
    #[sea_orm(column_type = "Text")]
    pub subjects: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::batches::Entity")]
    Batches,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::batches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher(self) -> crate::models::teachers::entities::Teacher {
        use crate::models::common::dates::date_from_db;
        use crate::models::teachers::entities::Teacher;
        use crate::models::{ActiveStatus, Gender};

        Teacher {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            gender: self.gender.parse::<Gender>().unwrap_or(Gender::Other),
            address: self.address,
            qualification: self.qualification,
            experience: self.experience,
            joining_date: date_from_db(&self.joining_date),
            salary: self.salary,
            status: self.status.parse::<ActiveStatus>().unwrap_or_default(),
            subjects: super::decode_list(&self.subjects),
            created_at: super::timestamp(self.created_at),
            updated_at: super::timestamp(self.updated_at),
        }
    }
}
