//! 公告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub announcement_type: String,
    pub priority: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_announcement(self) -> crate::models::announcements::entities::Announcement {
        use crate::models::announcements::entities::{Announcement, AnnouncementType, Priority};
        use crate::models::common::dates::date_from_db;

        Announcement {
            id: self.id,
            title: self.title,
            content: self.content,
            announcement_type: self
                .announcement_type
                .parse::<AnnouncementType>()
                .unwrap_or(AnnouncementType::General),
            priority: self.priority.parse::<Priority>().unwrap_or(Priority::Medium),
            start_date: date_from_db(&self.start_date),
            end_date: date_from_db(&self.end_date),
            created_at: super::timestamp(self.created_at),
            updated_at: super::timestamp(self.updated_at),
        }
    }
}
