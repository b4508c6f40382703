//! 教师存储操作
//!
//! 教师档案与其登录账号总是在同一事务内一起创建、更新和删除。

use super::SeaOrmStorage;
use super::users::{insert_user, update_user_row};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::{encode_list, users};
use crate::errors::{Result, TuitionError};
use crate::models::common::dates::date_to_db;
use crate::models::{
    ActiveStatus, PaginatedResponse,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
    },
    users::{
        entities::{UserRole, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};
use crate::utils::contains_condition;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建教师及其登录账号
    pub async fn create_teacher_impl(
        &self,
        req: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();
        let email = req.email.trim().to_lowercase();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TuitionError::from_db("开启事务失败", e))?;

        let user = insert_user(
            &txn,
            CreateUserRequest {
                email: email.clone(),
                password_hash,
                name: req.name.clone(),
                role: UserRole::Teacher,
            },
        )
        .await?;

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(user.id),
            name: Set(req.name),
            email: Set(email),
            phone: Set(req.phone),
            gender: Set(req.gender.to_string()),
            address: Set(req.address),
            qualification: Set(req.qualification),
            experience: Set(req.experience),
            joining_date: Set(date_to_db(&req.joining_date)),
            salary: Set(req.salary),
            status: Set(req.status.to_string()),
            subjects: Set(encode_list(&req.subjects)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| TuitionError::from_db("创建教师失败", e))?;

        txn.commit()
            .await
            .map_err(|e| TuitionError::from_db("提交事务失败", e))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询教师失败", e))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListParams,
    ) -> Result<PaginatedResponse<Teacher>> {
        let mut select = Teachers::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            select = select.filter(
                Condition::any()
                    .add(contains_condition(Column::Name, keyword))
                    .add(contains_condition(Column::Email, keyword))
                    .add(contains_condition(Column::Qualification, keyword)),
            );
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        // 科目列表以 JSON 数组存储，按带引号的 ID 匹配
        if let Some(ref subject) = query.subject
            && !subject.trim().is_empty()
        {
            select = select.filter(contains_condition(
                Column::Subjects,
                &format!("\"{}\"", subject.trim()),
            ));
        }

        select = select.order_by_asc(Column::Name);

        let (models, pagination) = self.fetch_page(select, &query.pagination, "教师").await?;

        Ok(PaginatedResponse {
            items: models.into_iter().map(|m| m.into_teacher()).collect(),
            pagination,
        })
    }

    /// 更新教师，邮箱、姓名、密码和状态同步到登录账号
    pub async fn update_teacher_impl(
        &self,
        id: &str,
        update: UpdateTeacherRequest,
        password_hash: Option<String>,
    ) -> Result<Option<Teacher>> {
        let Some(existing) = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询教师失败", e))?
        else {
            return Ok(None);
        };

        let email = update.email.map(|email| email.trim().to_lowercase());

        let account_update = UpdateUserRequest {
            email: email.clone(),
            password_hash,
            name: update.name.clone(),
            status: update.status.map(|status| match status {
                ActiveStatus::Active => UserStatus::Active,
                ActiveStatus::Inactive => UserStatus::Inactive,
            }),
        };

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(email) = email {
            model.email = Set(email);
        }

        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }

        if let Some(gender) = update.gender {
            model.gender = Set(gender.to_string());
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address).filter(|a| !a.is_empty()));
        }

        if let Some(qualification) = update.qualification {
            model.qualification = Set(qualification);
        }

        if let Some(experience) = update.experience {
            model.experience = Set(experience);
        }

        if let Some(joining_date) = update.joining_date {
            model.joining_date = Set(date_to_db(&joining_date));
        }

        if let Some(salary) = update.salary {
            model.salary = Set(salary);
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(subjects) = update.subjects {
            model.subjects = Set(encode_list(&subjects));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TuitionError::from_db("开启事务失败", e))?;

        model
            .update(&txn)
            .await
            .map_err(|e| TuitionError::from_db("更新教师失败", e))?;

        let account_changed = account_update.email.is_some()
            || account_update.password_hash.is_some()
            || account_update.name.is_some()
            || account_update.status.is_some();
        if account_changed {
            update_user_row(&txn, &existing.user_id, account_update).await?;
        }

        txn.commit()
            .await
            .map_err(|e| TuitionError::from_db("提交事务失败", e))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师及其登录账号，仍被班次引用时返回引用错误
    pub async fn delete_teacher_impl(&self, id: &str) -> Result<bool> {
        let Some(existing) = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询教师失败", e))?
        else {
            return Ok(false);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TuitionError::from_db("开启事务失败", e))?;

        let result = Teachers::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| TuitionError::from_db("删除教师失败", e))?;

        users::Entity::delete_by_id(existing.user_id.as_str())
            .exec(&txn)
            .await
            .map_err(|e| TuitionError::from_db("删除教师账号失败", e))?;

        txn.commit()
            .await
            .map_err(|e| TuitionError::from_db("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
