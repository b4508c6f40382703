//! 年级存储操作

use super::SeaOrmStorage;
use crate::entity::encode_list;
use crate::entity::standards::{ActiveModel, Column, Entity as Standards};
use crate::errors::{Result, TuitionError};
use crate::models::{
    PaginatedResponse,
    standards::{
        entities::Standard,
        requests::{CreateStandardRequest, StandardListParams, UpdateStandardRequest},
    },
};
use crate::utils::contains_condition;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建年级
    pub async fn create_standard_impl(&self, req: CreateStandardRequest) -> Result<Standard> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name),
            level: Set(req.level),
            description: Set(req.description),
            is_active: Set(req.is_active),
            subjects: Set(encode_list(&req.subjects)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("创建年级失败", e))?;

        Ok(result.into_standard())
    }

    /// 通过 ID 获取年级
    pub async fn get_standard_by_id_impl(&self, id: &str) -> Result<Option<Standard>> {
        let result = Standards::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询年级失败", e))?;

        Ok(result.map(|m| m.into_standard()))
    }

    /// 分页列出年级，按级别排序
    pub async fn list_standards_with_pagination_impl(
        &self,
        query: StandardListParams,
    ) -> Result<PaginatedResponse<Standard>> {
        let mut select = Standards::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(contains_condition(Column::Name, search.trim()));
        }

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        select = select.order_by_asc(Column::Level).order_by_asc(Column::Name);

        let (models, pagination) = self.fetch_page(select, &query.pagination, "年级").await?;

        Ok(PaginatedResponse {
            items: models.into_iter().map(|m| m.into_standard()).collect(),
            pagination,
        })
    }

    /// 更新年级
    pub async fn update_standard_impl(
        &self,
        id: &str,
        update: UpdateStandardRequest,
    ) -> Result<Option<Standard>> {
        if self.get_standard_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(level) = update.level {
            model.level = Set(level);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description).filter(|d| !d.is_empty()));
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        if let Some(subjects) = update.subjects {
            model.subjects = Set(encode_list(&subjects));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("更新年级失败", e))?;

        self.get_standard_by_id_impl(id).await
    }

    /// 删除年级，仍被班次引用时返回引用错误
    pub async fn delete_standard_impl(&self, id: &str) -> Result<bool> {
        let result = Standards::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("删除年级失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
