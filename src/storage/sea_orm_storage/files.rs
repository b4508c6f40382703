//! 文件存储操作

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Entity as Files};
use crate::errors::{Result, TuitionError};
use crate::models::files::entities::StoredFile;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 创建文件记录
    pub async fn create_file_impl(
        &self,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        content_type: &str,
        uploaded_by: &str,
    ) -> Result<StoredFile> {
        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            original_name: Set(original_name.to_string()),
            stored_name: Set(stored_name.to_string()),
            file_size: Set(file_size),
            content_type: Set(content_type.to_string()),
            uploaded_by: Set(Some(uploaded_by.to_string())),
            created_at: Set(chrono::Utc::now().timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("创建文件记录失败", e))?;

        Ok(result.into_file())
    }

    /// 通过 ID 获取文件
    pub async fn get_file_by_id_impl(&self, id: &str) -> Result<Option<StoredFile>> {
        let result = Files::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询文件失败", e))?;

        Ok(result.map(|m| m.into_file()))
    }
}
