//! 职员存储操作

use super::SeaOrmStorage;
use crate::entity::encode_list;
use crate::entity::staff::{ActiveModel, Column, Entity as StaffEntity};
use crate::errors::{Result, TuitionError};
use crate::models::common::dates::date_to_db;
use crate::models::{
    PaginatedResponse,
    staff::{
        entities::Staff,
        requests::{CreateStaffRequest, StaffListParams, UpdateStaffRequest},
    },
};
use crate::utils::contains_condition;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建职员
    pub async fn create_staff_impl(&self, req: CreateStaffRequest) -> Result<Staff> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(req.name),
            role: Set(req.role),
            department: Set(req.department),
            email: Set(req.email.trim().to_lowercase()),
            phone: Set(req.phone),
            joining_date: Set(date_to_db(&req.joining_date)),
            salary: Set(req.salary),
            status: Set(req.status.to_string()),
            permissions: Set(encode_list(&req.permissions)),
            reporting_to: Set(req.reporting_to.filter(|r| !r.is_empty())),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("创建职员失败", e))?;

        Ok(result.into_staff())
    }

    /// 通过 ID 获取职员
    pub async fn get_staff_by_id_impl(&self, id: &str) -> Result<Option<Staff>> {
        let result = StaffEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询职员失败", e))?;

        Ok(result.map(|m| m.into_staff()))
    }

    /// 分页列出职员
    pub async fn list_staff_with_pagination_impl(
        &self,
        query: StaffListParams,
    ) -> Result<PaginatedResponse<Staff>> {
        let mut select = StaffEntity::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let keyword = search.trim();
            select = select.filter(
                Condition::any()
                    .add(contains_condition(Column::Name, keyword))
                    .add(contains_condition(Column::Email, keyword))
                    .add(contains_condition(Column::Role, keyword)),
            );
        }

        if let Some(ref department) = query.department
            && !department.trim().is_empty()
        {
            select = select.filter(Column::Department.eq(department.trim()));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        select = select.order_by_asc(Column::Name);

        let (models, pagination) = self.fetch_page(select, &query.pagination, "职员").await?;

        Ok(PaginatedResponse {
            items: models.into_iter().map(|m| m.into_staff()).collect(),
            pagination,
        })
    }

    /// 更新职员
    pub async fn update_staff_impl(
        &self,
        id: &str,
        update: UpdateStaffRequest,
    ) -> Result<Option<Staff>> {
        if self.get_staff_by_id_impl(id).await?.is_none() {
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

        if let Some(role) = update.role {
            model.role = Set(role);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        if let Some(email) = update.email {
            model.email = Set(email.trim().to_lowercase());
        }

        if let Some(phone) = update.phone {
            model.phone = Set(phone);
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

        if let Some(permissions) = update.permissions {
            model.permissions = Set(encode_list(&permissions));
        }

        // 空字符串清除上级
        if let Some(reporting_to) = update.reporting_to {
            model.reporting_to = Set(Some(reporting_to).filter(|r| !r.is_empty()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("更新职员失败", e))?;

        self.get_staff_by_id_impl(id).await
    }

    /// 删除职员，其下属的上级字段由外键置空
    pub async fn delete_staff_impl(&self, id: &str) -> Result<bool> {
        let result = StaffEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("删除职员失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
