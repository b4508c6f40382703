//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::entity::{decode_list, encode_list, standards, teachers};
use crate::errors::{Result, TuitionError};
use crate::models::{
    PaginatedResponse,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest},
    },
};
use crate::utils::contains_condition;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name),
            description: Set(req.description),
            duration: Set(req.duration),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("创建科目失败", e))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: &str) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询科目失败", e))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 分页列出科目
    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListParams,
    ) -> Result<PaginatedResponse<Subject>> {
        let mut select = Subjects::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(contains_condition(Column::Name, search.trim()));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        select = select.order_by_asc(Column::Name);

        let (models, pagination) = self.fetch_page(select, &query.pagination, "科目").await?;

        Ok(PaginatedResponse {
            items: models.into_iter().map(|m| m.into_subject()).collect(),
            pagination,
        })
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        if self.get_subject_by_id_impl(id).await?.is_none() {
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

        if let Some(description) = update.description {
            model.description = Set(Some(description).filter(|d| !d.is_empty()));
        }

        if let Some(duration) = update.duration {
            model.duration = Set(duration);
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("更新科目失败", e))?;

        self.get_subject_by_id_impl(id).await
    }

    /// 删除科目
    ///
    /// 同一事务内把该科目从年级和教师的科目列表中移除；
    /// 仍被班次引用时删除失败，整个事务回滚。
    pub async fn delete_subject_impl(&self, id: &str) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TuitionError::from_db("开启事务失败", e))?;

        let pattern = format!("\"{id}\"");

        let standard_rows = standards::Entity::find()
            .filter(standards::Column::Subjects.contains(&pattern))
            .all(&txn)
            .await
            .map_err(|e| TuitionError::from_db("查询年级失败", e))?;
        for row in standard_rows {
            let remaining: Vec<String> = decode_list::<String>(&row.subjects)
                .into_iter()
                .filter(|subject| subject != id)
                .collect();
            let mut active: standards::ActiveModel = row.into();
            active.subjects = Set(encode_list(&remaining));
            active
                .update(&txn)
                .await
                .map_err(|e| TuitionError::from_db("更新年级科目失败", e))?;
        }

        let teacher_rows = teachers::Entity::find()
            .filter(teachers::Column::Subjects.contains(&pattern))
            .all(&txn)
            .await
            .map_err(|e| TuitionError::from_db("查询教师失败", e))?;
        for row in teacher_rows {
            let remaining: Vec<String> = decode_list::<String>(&row.subjects)
                .into_iter()
                .filter(|subject| subject != id)
                .collect();
            let mut active: teachers::ActiveModel = row.into();
            active.subjects = Set(encode_list(&remaining));
            active
                .update(&txn)
                .await
                .map_err(|e| TuitionError::from_db("更新教师科目失败", e))?;
        }

        let result = Subjects::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| TuitionError::from_db("删除科目失败", e))?;

        txn.commit()
            .await
            .map_err(|e| TuitionError::from_db("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
