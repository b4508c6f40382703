use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, TuitionError};
use crate::models::users::{
    entities::{User, UserStatus},
    requests::{CreateUserRequest, UpdateUserRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

impl SeaOrmStorage {
    /// 创建账号
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        insert_user(&self.db, req).await
    }

    /// 通过 ID 获取账号
    pub async fn get_user_by_id_impl(&self, id: &str) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询账号失败", e))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取账号，邮箱不区分大小写
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询账号失败", e))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 更新账号最后登录时间
    pub async fn update_last_login_impl(&self, id: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("更新最后登录时间失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新账号
    pub async fn update_user_impl(
        &self,
        id: &str,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        if Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询账号失败", e))?
            .is_none()
        {
            return Ok(None);
        }

        update_user_row(&self.db, id, update).await?;
        self.get_user_by_id_impl(id).await
    }

    /// 统计账号数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("统计账号数量失败", e))?;

        Ok(count)
    }
}

/// 插入账号，可在事务内调用
pub(super) async fn insert_user<C: ConnectionTrait>(db: &C, req: CreateUserRequest) -> Result<User> {
    let now = chrono::Utc::now().timestamp();

    let model = ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        email: Set(req.email.trim().to_lowercase()),
        password_hash: Set(req.password_hash),
        name: Set(req.name),
        role: Set(req.role.to_string()),
        status: Set(UserStatus::Active.to_string()),
        last_login: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let result = model
        .insert(db)
        .await
        .map_err(|e| TuitionError::from_db("创建账号失败", e))?;

    Ok(result.into_user())
}

/// 按需更新账号字段，可在事务内调用
pub(super) async fn update_user_row<C: ConnectionTrait>(
    db: &C,
    id: &str,
    update: UpdateUserRequest,
) -> Result<()> {
    let mut model = ActiveModel {
        id: Set(id.to_string()),
        updated_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    if let Some(email) = update.email {
        model.email = Set(email.trim().to_lowercase());
    }

    if let Some(password_hash) = update.password_hash {
        model.password_hash = Set(password_hash);
    }

    if let Some(name) = update.name {
        model.name = Set(name);
    }

    if let Some(status) = update.status {
        model.status = Set(status.to_string());
    }

    model
        .update(db)
        .await
        .map_err(|e| TuitionError::from_db("更新账号失败", e))?;

    Ok(())
}
