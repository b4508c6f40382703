//! 班次实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub standard_id: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub start_date: String,
    pub end_date: String,
    /// JSON 数组形式的上课日
    #[sea_orm(column_type = "Text")]
    pub schedule_days: String,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i32,
    pub fees: f64,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::standards::Entity",
        from = "Column::StandardId",
        to = "super::standards::Column::Id"
    )]
    Standard,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::batch_students::Entity")]
    BatchStudents,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::standards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Standard.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
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
    /// `enrolled_students` 为已报名学生 ID，按报名时间排序
    pub fn into_batch(self, enrolled_students: Vec<String>) -> crate::models::batches::entities::Batch {
        use crate::models::batches::entities::{Batch, BatchStatus, Schedule};
        use crate::models::common::dates::date_from_db;

        Batch {
            id: self.id,
            name: self.name,
            standard: self.standard_id,
            subject: self.subject_id,
            teacher: self.teacher_id,
            start_date: date_from_db(&self.start_date),
            end_date: date_from_db(&self.end_date),
            schedule: Schedule {
                days: super::decode_list(&self.schedule_days),
                start_time: self.start_time,
                end_time: self.end_time,
            },
            capacity: self.capacity,
            fees: self.fees,
            status: self.status.parse::<BatchStatus>().unwrap_or_default(),
            description: self.description,
            enrolled_students,
            created_at: super::timestamp(self.created_at),
            updated_at: super::timestamp(self.updated_at),
        }
    }
}
