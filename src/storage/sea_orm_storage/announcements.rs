//! 公告存储操作

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{Result, TuitionError};
use crate::models::common::dates::date_to_db;
use crate::models::{
    PaginatedResponse,
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListParams, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建公告
    pub async fn create_announcement_impl(
        &self,
        req: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            title: Set(req.title),
            content: Set(req.content),
            announcement_type: Set(req.announcement_type.to_string()),
            priority: Set(req.priority.to_string()),
            start_date: Set(date_to_db(&req.start_date)),
            end_date: Set(date_to_db(&req.end_date)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("创建公告失败", e))?;

        Ok(result.into_announcement())
    }

    /// 通过 ID 获取公告
    pub async fn get_announcement_by_id_impl(&self, id: &str) -> Result<Option<Announcement>> {
        let result = Announcements::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询公告失败", e))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    /// 分页列出公告，最新开始的排在前面
    pub async fn list_announcements_with_pagination_impl(
        &self,
        query: AnnouncementListParams,
    ) -> Result<PaginatedResponse<Announcement>> {
        let mut select = Announcements::find();

        if let Some(announcement_type) = query.announcement_type {
            select = select.filter(Column::AnnouncementType.eq(announcement_type.as_str()));
        }

        if let Some(priority) = query.priority {
            select = select.filter(Column::Priority.eq(priority.as_str()));
        }

        // 日期以 YYYY-MM-DD 存储，字符串比较即日期比较
        if let Some(active_on) = query.active_on {
            let day = date_to_db(&active_on);
            select = select
                .filter(Column::StartDate.lte(day.as_str()))
                .filter(Column::EndDate.gte(day.as_str()));
        }

        select = select
            .order_by_desc(Column::StartDate)
            .order_by_desc(Column::CreatedAt);

        let (models, pagination) = self.fetch_page(select, &query.pagination, "公告").await?;

        Ok(PaginatedResponse {
            items: models.into_iter().map(|m| m.into_announcement()).collect(),
            pagination,
        })
    }

    /// 更新公告
    pub async fn update_announcement_impl(
        &self,
        id: &str,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        if self.get_announcement_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(content) = update.content {
            model.content = Set(content);
        }

        if let Some(announcement_type) = update.announcement_type {
            model.announcement_type = Set(announcement_type.to_string());
        }

        if let Some(priority) = update.priority {
            model.priority = Set(priority.to_string());
        }

        if let Some(start_date) = update.start_date {
            model.start_date = Set(date_to_db(&start_date));
        }

        if let Some(end_date) = update.end_date {
            model.end_date = Set(date_to_db(&end_date));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("更新公告失败", e))?;

        self.get_announcement_by_id_impl(id).await
    }

    /// 删除公告
    pub async fn delete_announcement_impl(&self, id: &str) -> Result<bool> {
        let result = Announcements::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("删除公告失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
