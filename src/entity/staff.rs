//! 职员实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub joining_date: String,
    pub salary: f64,
    pub status: String,
    /// JSON 数组形式的权限
    #[sea_orm(column_type = "Text")]
    pub permissions: String,
    pub reporting_to: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ReportingTo",
        to = "Column::Id"
    )]
    Manager,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_staff(self) -> crate::models::staff::entities::Staff {
        use crate::models::common::dates::date_from_db;
        use crate::models::staff::entities::{Staff, StaffStatus};

        Staff {
            id: self.id,
            name: self.name,
            role: self.role,
            department: self.department,
            email: self.email,
            phone: self.phone,
            joining_date: date_from_db(&self.joining_date),
            salary: self.salary,
            status: self.status.parse::<StaffStatus>().unwrap_or_default(),
            permissions: super::decode_list(&self.permissions),
            reporting_to: self.reporting_to,
            created_at: super::timestamp(self.created_at),
            updated_at: super::timestamp(self.updated_at),
        }
    }
}
