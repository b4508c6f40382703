//! 缴费记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub student_id: String,
    pub batch_id: Option<String>,
    pub amount: f64,
    pub payment_date: String,
    pub method: String,
    pub status: String,
    pub transaction_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::batches::Entity",
        from = "Column::BatchId",
        to = "super::batches::Column::Id"
    )]
    Batch,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::batches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_payment(self) -> crate::models::payments::entities::Payment {
        use crate::models::common::dates::date_from_db;
        use crate::models::payments::entities::{Payment, PaymentMethod, PaymentStatus};

        Payment {
            id: self.id,
            student: self.student_id,
            batch: self.batch_id,
            amount: self.amount,
            payment_date: date_from_db(&self.payment_date),
            method: self.method.parse::<PaymentMethod>().unwrap_or(PaymentMethod::Cash),
            status: self.status.parse::<PaymentStatus>().unwrap_or_default(),
            transaction_id: self.transaction_id,
            remarks: self.remarks,
            created_at: super::timestamp(self.created_at),
            updated_at: super::timestamp(self.updated_at),
        }
    }
}
