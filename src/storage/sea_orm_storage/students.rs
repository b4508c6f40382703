//! 学生存储操作

use super::SeaOrmStorage;
use super::enrollments::{batches_by_student, enrolled_in};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model};
use crate::errors::{Result, TuitionError};
use crate::models::common::dates::date_to_db;
use crate::models::{
    PaginatedResponse,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
    },
};
use crate::utils::contains_condition;
use crate::utils::random_code::generate_student_code;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

/// 为学生记录补上报名的班次
pub(super) async fn attach_batches<C: ConnectionTrait>(
    db: &C,
    models: Vec<Model>,
) -> Result<Vec<Student>> {
    let ids: Vec<String> = models.iter().map(|m| m.id.clone()).collect();
    let mut batches = batches_by_student(db, &ids).await?;

    Ok(models
        .into_iter()
        .map(|m| {
            let enrolled = batches.remove(&m.id).unwrap_or_default();
            m.into_student(enrolled)
        })
        .collect())
}

impl SeaOrmStorage {
    /// 创建学生，未提供学号时自动生成
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();
        let student_code = req
            .student_id
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .unwrap_or_else(generate_student_code);

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            student_code: Set(student_code),
            name: Set(req.name),
            email: Set(req.email.map(|e| e.trim().to_lowercase())),
            phone: Set(req.phone),
            parent_name: Set(req.parent_name),
            parent_phone: Set(req.parent_phone),
            parent_email: Set(req.parent_email.map(|e| e.trim().to_lowercase())),
            gender: Set(req.gender.to_string()),
            date_of_birth: Set(date_to_db(&req.date_of_birth)),
            address: Set(req.address),
            board: Set(req.board.to_string()),
            school_name: Set(req.school_name),
            previous_percentage: Set(req.previous_percentage),
            joining_date: Set(date_to_db(&req.joining_date)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("创建学生失败", e))?;

        Ok(result.into_student(Vec::new()))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: &str) -> Result<Option<Student>> {
        let Some(model) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询学生失败", e))?
        else {
            return Ok(None);
        };

        Ok(attach_batches(&self.db, vec![model]).await?.pop())
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListParams,
    ) -> Result<PaginatedResponse<Student>> {
        let mut select = Students::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            select = select.filter(
                Condition::any()
                    .add(contains_condition(Column::Name, keyword))
                    .add(contains_condition(Column::Email, keyword))
                    .add(contains_condition(Column::StudentCode, keyword)),
            );
        }

        if let Some(ref batch) = query.batch
            && !batch.trim().is_empty()
        {
            select = select.filter(Column::Id.in_subquery(enrolled_in(batch.trim())));
        }

        if let Some(board) = query.board {
            select = select.filter(Column::Board.eq(board.as_str()));
        }

        select = select.order_by_desc(Column::CreatedAt).order_by_asc(Column::Name);

        let (models, pagination) = self.fetch_page(select, &query.pagination, "学生").await?;

        Ok(PaginatedResponse {
            items: attach_batches(&self.db, models).await?,
            pagination,
        })
    }

    /// 更新学生
    pub async fn update_student_impl(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(id).await?.is_none() {
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

        if let Some(email) = update.email {
            model.email = Set(Some(email.trim().to_lowercase()).filter(|e| !e.is_empty()));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }

        if let Some(parent_name) = update.parent_name {
            model.parent_name = Set(parent_name);
        }

        if let Some(parent_phone) = update.parent_phone {
            model.parent_phone = Set(parent_phone);
        }

        if let Some(parent_email) = update.parent_email {
            model.parent_email =
                Set(Some(parent_email.trim().to_lowercase()).filter(|e| !e.is_empty()));
        }

        if let Some(gender) = update.gender {
            model.gender = Set(gender.to_string());
        }

        if let Some(date_of_birth) = update.date_of_birth {
            model.date_of_birth = Set(date_to_db(&date_of_birth));
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address).filter(|a| !a.is_empty()));
        }

        if let Some(board) = update.board {
            model.board = Set(board.to_string());
        }

        if let Some(school_name) = update.school_name {
            model.school_name = Set(Some(school_name).filter(|s| !s.is_empty()));
        }

        if let Some(previous_percentage) = update.previous_percentage {
            model.previous_percentage = Set(Some(previous_percentage));
        }

        if let Some(joining_date) = update.joining_date {
            model.joining_date = Set(date_to_db(&joining_date));
        }

        if let Some(student_code) = update.student_id
            && !student_code.trim().is_empty()
        {
            model.student_code = Set(student_code.trim().to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("更新学生失败", e))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生，报名记录级联删除，存在缴费记录时返回引用错误
    pub async fn delete_student_impl(&self, id: &str) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("删除学生失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
