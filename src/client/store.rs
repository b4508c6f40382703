//! 资源状态容器
//!
//! 每种资源一个 `ResourceStore`，保存记录列表、加载状态、错误信息与成功提示。
//! 异步操作先置 `loading`，再按服务端响应更新本地列表；失败只记录错误，不重试。

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::ApiClient;
use super::error::ClientError;
use crate::models::PaginatedResponse;
use crate::models::announcements::entities::Announcement;
use crate::models::batches::entities::Batch;
use crate::models::payments::entities::Payment;
use crate::models::staff::entities::Staff;
use crate::models::standards::entities::Standard;
use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;
use crate::models::teachers::entities::Teacher;

/// 拉取全部记录时每页的条数
const FETCH_PAGE_SIZE: i64 = 100;

/// 可由 `ResourceStore` 管理的资源
pub trait Resource: DeserializeOwned + Clone + ts_rs::TS {
    /// `/api/` 之后的集合路径
    const PATH: &'static str;
    /// 提示信息中使用的名称
    const LABEL: &'static str;

    fn id(&self) -> &str;
}

macro_rules! impl_resource {
    ($($ty:ty => $path:literal, $label:literal;)+) => {
        $(
            impl Resource for $ty {
                const PATH: &'static str = $path;
                const LABEL: &'static str = $label;

                fn id(&self) -> &str {
                    &self.id
                }
            }
        )+
    };
}

impl_resource! {
    Standard => "standards", "Standard";
    Subject => "subjects", "Subject";
    Teacher => "teachers", "Teacher";
    Staff => "staff", "Staff member";
    Batch => "batches", "Batch";
    Student => "students", "Student";
    Announcement => "announcements", "Announcement";
    Payment => "payments", "Payment";
}

#[derive(Debug, Clone)]
pub struct ResourceStore<T: Resource> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl<T: Resource> Default for ResourceStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            success: None,
        }
    }
}

impl<T: Resource> ResourceStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = None;
    }

    fn fail(&mut self, err: &ClientError) {
        self.loading = false;
        self.error = Some(err.to_string());
    }

    fn loaded(&mut self, items: Vec<T>) {
        self.loading = false;
        self.items = items;
    }

    fn created(&mut self, item: T) {
        self.loading = false;
        self.items.push(item);
        self.success = Some(format!("{} created successfully", T::LABEL));
    }

    fn updated(&mut self, item: T) {
        self.loading = false;
        if let Some(slot) = self.find_mut(item.id()) {
            *slot = item;
        }
        self.success = Some(format!("{} updated successfully", T::LABEL));
    }

    fn deleted(&mut self, id: &str) {
        self.loading = false;
        self.items.retain(|item| item.id() != id);
        self.success = Some(format!("{} deleted successfully", T::LABEL));
    }

    fn settle<R>(&mut self, result: &Result<R, ClientError>) {
        if let Err(err) = result {
            self.fail(err);
        }
    }

    /// 逐页拉取并替换整个列表
    pub async fn fetch_all(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        self.begin();
        let result = fetch_all_pages::<T>(api).await;
        self.settle(&result);
        self.loaded(result?);
        Ok(())
    }

    pub async fn create<B: Serialize + ?Sized>(
        &mut self,
        api: &ApiClient,
        payload: &B,
    ) -> Result<T, ClientError> {
        self.begin();
        let result: Result<T, ClientError> = api.post(T::PATH, payload).await;
        self.settle(&result);
        let item = result?;
        self.created(item.clone());
        Ok(item)
    }

    pub async fn update<B: Serialize + ?Sized>(
        &mut self,
        api: &ApiClient,
        id: &str,
        payload: &B,
    ) -> Result<T, ClientError> {
        self.begin();
        let result: Result<T, ClientError> =
            api.put(&format!("{}/{}", T::PATH, id), payload).await;
        self.settle(&result);
        let item = result?;
        self.updated(item.clone());
        Ok(item)
    }

    pub async fn delete(&mut self, api: &ApiClient, id: &str) -> Result<(), ClientError> {
        self.begin();
        let result = api.delete(&format!("{}/{}", T::PATH, id)).await;
        self.settle(&result);
        result?;
        self.deleted(id);
        Ok(())
    }
}

async fn fetch_all_pages<T: Resource>(api: &ApiClient) -> Result<Vec<T>, ClientError> {
    let mut items = Vec::new();
    let mut page = 1;
    loop {
        let response: PaginatedResponse<T> = api
            .get(
                T::PATH,
                &[
                    ("page", page.to_string()),
                    ("size", FETCH_PAGE_SIZE.to_string()),
                ],
            )
            .await?;
        items.extend(response.items);
        if page >= response.pagination.total_pages {
            break;
        }
        page += 1;
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActiveStatus;

    fn subject(id: &str, name: &str) -> Subject {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "description": null,
            "duration": "6 months",
            "status": ActiveStatus::Active,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_created_appends_and_reports_success() {
        let mut store = ResourceStore::<Subject>::new();
        store.begin();
        assert!(store.loading);
        store.created(subject("s-1", "Physics"));
        assert!(!store.loading);
        assert_eq!(store.items.len(), 1);
        assert_eq!(store.success.as_deref(), Some("Subject created successfully"));
    }

    #[test]
    fn test_updated_replaces_matching_id_only() {
        let mut store = ResourceStore::<Subject>::new();
        store.loaded(vec![subject("s-1", "Physics"), subject("s-2", "Chemistry")]);
        store.updated(subject("s-2", "Organic Chemistry"));
        assert_eq!(store.items[0].name, "Physics");
        assert_eq!(store.find("s-2").unwrap().name, "Organic Chemistry");

        store.updated(subject("s-9", "Ghost"));
        assert_eq!(store.items.len(), 2);
    }

    #[test]
    fn test_deleted_removes_matching_id() {
        let mut store = ResourceStore::<Subject>::new();
        store.loaded(vec![subject("s-1", "Physics"), subject("s-2", "Chemistry")]);
        store.deleted("s-1");
        assert_eq!(store.items.len(), 1);
        assert!(store.find("s-1").is_none());
    }

    #[test]
    fn test_failure_keeps_items_and_records_error() {
        let mut store = ResourceStore::<Subject>::new();
        store.loaded(vec![subject("s-1", "Physics")]);
        store.begin();
        let result: Result<(), ClientError> = Err(ClientError::unauthorized());
        store.settle(&result);
        assert!(!store.loading);
        assert_eq!(store.items.len(), 1);
        assert_eq!(
            store.error.as_deref(),
            Some("Session expired, redirect to /login")
        );
    }
}
