//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub student_code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub parent_email: Option<String>,
    pub gender: String,
    pub date_of_birth: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub board: String,
    pub school_name: Option<String>,
    pub previous_percentage: Option<f64>,
    pub joining_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::batch_students::Entity")]
    BatchStudents,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::batch_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BatchStudents.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// `batches` 为该学生已报名的班次 ID
    pub fn into_student(self, batches: Vec<String>) -> crate::models::students::entities::Student {
        use crate::models::Gender;
        use crate::models::common::dates::date_from_db;
        use crate::models::students::entities::{Board, Student};

        Student {
            id: self.id,
            student_id: self.student_code,
            name: self.name,
            email: self.email,
            phone: self.phone,
            parent_name: self.parent_name,
            parent_phone: self.parent_phone,
            parent_email: self.parent_email,
            gender: self.gender.parse::<Gender>().unwrap_or(Gender::Other),
            date_of_birth: date_from_db(&self.date_of_birth),
            address: self.address,
            board: self.board.parse::<Board>().unwrap_or(Board::Other),
            school_name: self.school_name,
            previous_percentage: self.previous_percentage,
            joining_date: date_from_db(&self.joining_date),
            batches,
            created_at: super::timestamp(self.created_at),
            updated_at: super::timestamp(self.updated_at),
        }
    }
}
