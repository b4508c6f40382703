//! 班次存储操作

use super::SeaOrmStorage;
use super::enrollments::enrolled_students_by_batch;
use crate::entity::batches::{ActiveModel, Column, Entity as Batches};
use crate::entity::encode_list;
use crate::errors::{Result, TuitionError};
use crate::models::common::dates::date_to_db;
use crate::models::{
    PaginatedResponse,
    batches::{
        entities::Batch,
        requests::{BatchListParams, CreateBatchRequest, UpdateBatchRequest},
    },
};
use crate::utils::contains_condition;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班次
    pub async fn create_batch_impl(&self, req: CreateBatchRequest) -> Result<Batch> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name),
            standard_id: Set(req.standard),
            subject_id: Set(req.subject),
            teacher_id: Set(req.teacher),
            start_date: Set(date_to_db(&req.start_date)),
            end_date: Set(date_to_db(&req.end_date)),
            schedule_days: Set(encode_list(&req.schedule.days)),
            start_time: Set(req.schedule.start_time),
            end_time: Set(req.schedule.end_time),
            capacity: Set(req.capacity),
            fees: Set(req.fees),
            status: Set(req.status.to_string()),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("创建班次失败", e))?;

        Ok(result.into_batch(Vec::new()))
    }

    /// 通过 ID 获取班次（含已报名学生）
    pub async fn get_batch_by_id_impl(&self, id: &str) -> Result<Option<Batch>> {
        let Some(model) = Batches::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询班次失败", e))?
        else {
            return Ok(None);
        };

        let mut enrolled = enrolled_students_by_batch(&self.db, &[model.id.clone()]).await?;
        let students = enrolled.remove(&model.id).unwrap_or_default();
        Ok(Some(model.into_batch(students)))
    }

    /// 分页列出班次
    pub async fn list_batches_with_pagination_impl(
        &self,
        query: BatchListParams,
    ) -> Result<PaginatedResponse<Batch>> {
        let mut select = Batches::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(contains_condition(Column::Name, search.trim()));
        }

        if let Some(ref standard) = query.standard {
            select = select.filter(Column::StandardId.eq(standard.as_str()));
        }

        if let Some(ref subject) = query.subject {
            select = select.filter(Column::SubjectId.eq(subject.as_str()));
        }

        if let Some(ref teacher) = query.teacher {
            select = select.filter(Column::TeacherId.eq(teacher.as_str()));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        select = select
            .order_by_desc(Column::StartDate)
            .order_by_asc(Column::Name);

        let (models, pagination) = self.fetch_page(select, &query.pagination, "班次").await?;

        let ids: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
        let mut enrolled = enrolled_students_by_batch(&self.db, &ids).await?;

        Ok(PaginatedResponse {
            items: models
                .into_iter()
                .map(|m| {
                    let students = enrolled.remove(&m.id).unwrap_or_default();
                    m.into_batch(students)
                })
                .collect(),
            pagination,
        })
    }

    /// 更新班次
    pub async fn update_batch_impl(
        &self,
        id: &str,
        update: UpdateBatchRequest,
    ) -> Result<Option<Batch>> {
        let Some(existing) = self.get_batch_by_id_impl(id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(standard) = update.standard {
            model.standard_id = Set(standard);
        }

        if let Some(subject) = update.subject {
            model.subject_id = Set(subject);
        }

        if let Some(teacher) = update.teacher {
            model.teacher_id = Set(teacher);
        }

        if let Some(start_date) = update.start_date {
            model.start_date = Set(date_to_db(&start_date));
        }

        if let Some(end_date) = update.end_date {
            model.end_date = Set(date_to_db(&end_date));
        }

        if let Some(schedule) = update.schedule {
            let schedule = schedule.apply_to(&existing.schedule);
            model.schedule_days = Set(encode_list(&schedule.days));
            model.start_time = Set(schedule.start_time);
            model.end_time = Set(schedule.end_time);
        }

        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }

        if let Some(fees) = update.fees {
            model.fees = Set(fees);
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description).filter(|d| !d.is_empty()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("更新班次失败", e))?;

        self.get_batch_by_id_impl(id).await
    }

    /// 删除班次，报名记录级联删除，缴费记录的班次置空
    pub async fn delete_batch_impl(&self, id: &str) -> Result<bool> {
        let result = Batches::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("删除班次失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
