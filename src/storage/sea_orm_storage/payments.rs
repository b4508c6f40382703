//! 缴费记录存储操作

use super::SeaOrmStorage;
use crate::entity::payments::{ActiveModel, Column, Entity as Payments};
use crate::errors::{Result, TuitionError};
use crate::models::common::dates::date_to_db;
use crate::models::{
    PaginatedResponse,
    payments::{
        entities::Payment,
        requests::{CreatePaymentRequest, PaymentListParams, UpdatePaymentRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建缴费记录
    pub async fn create_payment_impl(&self, req: CreatePaymentRequest) -> Result<Payment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            student_id: Set(req.student),
            batch_id: Set(req.batch.filter(|b| !b.is_empty())),
            amount: Set(req.amount),
            payment_date: Set(date_to_db(&req.payment_date)),
            method: Set(req.method.to_string()),
            status: Set(req.status.to_string()),
            transaction_id: Set(req.transaction_id),
            remarks: Set(req.remarks),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("创建缴费记录失败", e))?;

        Ok(result.into_payment())
    }

    /// 通过 ID 获取缴费记录
    pub async fn get_payment_by_id_impl(&self, id: &str) -> Result<Option<Payment>> {
        let result = Payments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询缴费记录失败", e))?;

        Ok(result.map(|m| m.into_payment()))
    }

    /// 分页列出缴费记录
    pub async fn list_payments_with_pagination_impl(
        &self,
        query: PaymentListParams,
    ) -> Result<PaginatedResponse<Payment>> {
        let mut select = Payments::find();

        if let Some(ref student) = query.student {
            select = select.filter(Column::StudentId.eq(student.as_str()));
        }

        if let Some(ref batch) = query.batch {
            select = select.filter(Column::BatchId.eq(batch.as_str()));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        select = select
            .order_by_desc(Column::PaymentDate)
            .order_by_desc(Column::CreatedAt);

        let (models, pagination) = self.fetch_page(select, &query.pagination, "缴费记录").await?;

        Ok(PaginatedResponse {
            items: models.into_iter().map(|m| m.into_payment()).collect(),
            pagination,
        })
    }

    /// 更新缴费记录
    pub async fn update_payment_impl(
        &self,
        id: &str,
        update: UpdatePaymentRequest,
    ) -> Result<Option<Payment>> {
        if self.get_payment_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(student) = update.student {
            model.student_id = Set(student);
        }

        // 空字符串解除与班次的关联
        if let Some(batch) = update.batch {
            model.batch_id = Set(Some(batch).filter(|b| !b.is_empty()));
        }

        if let Some(amount) = update.amount {
            model.amount = Set(amount);
        }

        if let Some(payment_date) = update.payment_date {
            model.payment_date = Set(date_to_db(&payment_date));
        }

        if let Some(method) = update.method {
            model.method = Set(method.to_string());
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(transaction_id) = update.transaction_id {
            model.transaction_id = Set(Some(transaction_id).filter(|t| !t.is_empty()));
        }

        if let Some(remarks) = update.remarks {
            model.remarks = Set(Some(remarks).filter(|r| !r.is_empty()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("更新缴费记录失败", e))?;

        self.get_payment_by_id_impl(id).await
    }

    /// 删除缴费记录
    pub async fn delete_payment_impl(&self, id: &str) -> Result<bool> {
        let result = Payments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("删除缴费记录失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
