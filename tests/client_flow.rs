//! 客户端对真实 HTTP 服务的流程：登录、分页拉取、报名与 401 强制登出

use std::sync::{Arc, Once};

use actix_web::{App, HttpServer, web};
use serde_json::json;

use rust_tuition_center::cache::ObjectCache;
use rust_tuition_center::cache::object_cache::MokaCacheWrapper;
use rust_tuition_center::client::enrollment::{enroll_students, fetch_available_students};
use rust_tuition_center::client::{
    ApiClient, ClientError, MemorySessionStore, ResourceStore, Session, SessionContext,
    SessionStore,
};
use rust_tuition_center::config::AppConfig;
use rust_tuition_center::models::batches::entities::Batch;
use rust_tuition_center::models::students::entities::Student;
use rust_tuition_center::models::subjects::entities::Subject;
use rust_tuition_center::models::users::entities::UserRole;
use rust_tuition_center::models::users::requests::CreateUserRequest;
use rust_tuition_center::routes;
use rust_tuition_center::storage::Storage;
use rust_tuition_center::storage::sea_orm_storage::SeaOrmStorage;
use rust_tuition_center::utils::jwt::JwtUtils;
use rust_tuition_center::utils::password::hash_password;

const JWT_SECRET: &str = "client-flow-secret";
const ADMIN_EMAIL: &str = "office@tuition.test";
const ADMIN_PASSWORD: &str = "office-pass-123";

static INIT: Once = Once::new();

fn init_config() {
    INIT.call_once(|| {
        // SAFETY: 在任何测试线程读取环境变量之前只执行一次
        unsafe {
            std::env::set_var("DATABASE_URL", "sqlite::memory:");
            std::env::set_var("JWT_SECRET", JWT_SECRET);
            std::env::set_var("JWT_EXPIRE", "1h");
            std::env::set_var("PORT", "18081");
            std::env::set_var("CACHE_TYPE", "moka");
        }
        AppConfig::init().expect("test configuration");
    });
}

/// 在随机端口启动服务，返回基础地址
async fn spawn_server() -> String {
    init_config();
    let storage: Arc<dyn Storage> = Arc::new(
        SeaOrmStorage::connect("sqlite::memory:", 1, 30)
            .await
            .expect("in-memory database"),
    );
    storage
        .create_user(CreateUserRequest {
            email: ADMIN_EMAIL.to_string(),
            password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
            name: "Front Office".to_string(),
            role: UserRole::Admin,
        })
        .await
        .unwrap();
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(1_000, 60));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(cache.clone()))
            .configure(routes::configure_api_routes)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test server");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

fn client(base_url: &str, store: Arc<dyn SessionStore>) -> ApiClient {
    let session = Arc::new(SessionContext::new(store).unwrap());
    ApiClient::new(base_url, session)
}

#[actix_web::test]
async fn test_expired_token_clears_session_and_redirects() {
    let base_url = spawn_server().await;

    let expired = JwtUtils::generate_token_with_secret(
        "stale-user",
        "admin",
        chrono::Duration::seconds(-60),
        JWT_SECRET.as_bytes(),
    )
    .unwrap();
    let now = chrono::Utc::now();
    let store = Arc::new(MemorySessionStore::with_session(Session {
        token: expired,
        user: serde_json::from_value(json!({
            "id": "stale-user",
            "email": ADMIN_EMAIL,
            "name": "Front Office",
            "role": "admin",
            "status": "active",
            "lastLogin": null,
            "createdAt": now,
            "updatedAt": now
        }))
        .unwrap(),
    }));
    let api = client(&base_url, store.clone());
    assert!(api.session().is_authenticated());

    let mut students = ResourceStore::<Student>::new();
    let err = students.fetch_all(&api).await.unwrap_err();

    assert_eq!(err.redirect(), Some("/login"));
    assert!(!api.session().is_authenticated());
    assert!(store.load().unwrap().is_none());
    assert!(students.error.is_some());
    assert!(!students.loading);
}

#[actix_web::test]
async fn test_store_operations_mirror_server() {
    let base_url = spawn_server().await;
    let api = client(&base_url, Arc::new(MemorySessionStore::new()));
    let user = api.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();
    assert_eq!(user.role, UserRole::Admin);

    let mut subjects = ResourceStore::<Subject>::new();
    let err = subjects
        .create(&api, &json!({"name": "Biology"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(err.field_message("duration"), Some("Duration is required"));

    for name in ["Biology", "Chemistry", "Physics"] {
        subjects
            .create(&api, &json!({"name": name, "duration": "1 year"}))
            .await
            .unwrap();
    }
    assert_eq!(subjects.items.len(), 3);

    let physics_id = subjects.items[2].id.clone();
    subjects
        .update(&api, &physics_id, &json!({"description": "Mechanics and optics"}))
        .await
        .unwrap();
    assert_eq!(
        subjects.find(&physics_id).unwrap().description.as_deref(),
        Some("Mechanics and optics")
    );

    subjects.delete(&api, &physics_id).await.unwrap();
    assert!(subjects.find(&physics_id).is_none());

    let mut reloaded = ResourceStore::<Subject>::new();
    reloaded.fetch_all(&api).await.unwrap();
    assert_eq!(reloaded.items.len(), 2);

    api.logout().await.unwrap();
    assert!(!api.session().is_authenticated());
}

#[actix_web::test]
async fn test_enrollment_flow_adds_only_new_students() {
    let base_url = spawn_server().await;
    let api = client(&base_url, Arc::new(MemorySessionStore::new()));
    api.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

    let subject: Subject = api
        .post("subjects", &json!({"name": "Mathematics", "duration": "1 year"}))
        .await
        .unwrap();
    let standard: serde_json::Value = api
        .post("standards", &json!({"name": "Class 9", "level": 9}))
        .await
        .unwrap();
    let teacher: serde_json::Value = api
        .post(
            "teachers",
            &json!({
                "name": "Farah Khan",
                "email": "farah@tuition.test",
                "password": "teach-456",
                "phone": "9988776655",
                "gender": "female",
                "qualification": "M.Sc Mathematics",
                "joiningDate": "2022-04-01",
                "subjects": [subject.id]
            }),
        )
        .await
        .unwrap();

    let mut batches = ResourceStore::<Batch>::new();
    let batch = batches
        .create(
            &api,
            &json!({
                "name": "Class 9 Maths - Morning",
                "standard": standard["id"],
                "subject": subject.id,
                "teacher": teacher["id"],
                "startDate": "2024-04-01",
                "endDate": "2025-03-31",
                "schedule": {"days": ["tuesday", "thursday"], "startTime": "07:30", "endTime": "09:00"},
                "capacity": 20,
                "fees": 1800
            }),
        )
        .await
        .unwrap();

    let mut students = ResourceStore::<Student>::new();
    for (name, phone) in [
        ("Ishaan", "9000000001"),
        ("Zoya", "9000000002"),
        ("Vikram", "9000000003"),
    ] {
        students
            .create(
                &api,
                &json!({
                    "name": name,
                    "phone": phone,
                    "parentName": "Guardian",
                    "parentPhone": "9000000099",
                    "gender": "other",
                    "dateOfBirth": "2010-01-20",
                    "board": "icse",
                    "joiningDate": "2024-03-15"
                }),
            )
            .await
            .unwrap();
    }
    let ids: Vec<String> = students.items.iter().map(|s| s.id.clone()).collect();

    enroll_students(&api, &mut batches, &batch.id, &ids[..1])
        .await
        .unwrap();
    assert_eq!(
        fetch_available_students(&api, &batch.id).await.unwrap().len(),
        2
    );

    let result = enroll_students(&api, &mut batches, &batch.id, &ids)
        .await
        .unwrap();
    assert_eq!(result.succeeded().count(), 2);
    assert_eq!(result.failed().count(), 1);

    let local = batches.find(&batch.id).unwrap();
    assert_eq!(local.enrolled_students.len(), 3);
    assert_eq!(batches.success.as_deref(), Some("2 of 3 students enrolled"));
    assert!(batches.error.is_some());
}
