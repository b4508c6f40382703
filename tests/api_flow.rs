//! 端到端 API 流程：内存 SQLite + Moka 缓存驱动完整的 actix 应用

use std::sync::{Arc, Once};

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use rust_tuition_center::cache::ObjectCache;
use rust_tuition_center::cache::object_cache::MokaCacheWrapper;
use rust_tuition_center::config::AppConfig;
use rust_tuition_center::models::ErrorCode;
use rust_tuition_center::models::users::entities::UserRole;
use rust_tuition_center::models::users::requests::CreateUserRequest;
use rust_tuition_center::routes;
use rust_tuition_center::storage::Storage;
use rust_tuition_center::storage::sea_orm_storage::SeaOrmStorage;
use rust_tuition_center::utils::jwt::JwtUtils;
use rust_tuition_center::utils::password::hash_password;
use rust_tuition_center::utils::{json_error_handler, query_error_handler};

const JWT_SECRET: &str = "integration-test-secret";
const ADMIN_EMAIL: &str = "admin@tuition.test";
const ADMIN_PASSWORD: &str = "admin-pass-123";

static INIT: Once = Once::new();

fn init_config() {
    INIT.call_once(|| {
        // SAFETY: 在任何测试线程读取环境变量之前只执行一次
        unsafe {
            std::env::set_var("DATABASE_URL", "sqlite::memory:");
            std::env::set_var("JWT_SECRET", JWT_SECRET);
            std::env::set_var("JWT_EXPIRE", "1h");
            std::env::set_var("PORT", "18080");
            std::env::set_var("CACHE_TYPE", "moka");
        }
        AppConfig::init().expect("test configuration");
    });
}

struct Harness {
    storage: Arc<dyn Storage>,
    cache: Arc<dyn ObjectCache>,
    admin_token: String,
}

async fn harness() -> Harness {
    init_config();
    let storage: Arc<dyn Storage> = Arc::new(
        SeaOrmStorage::connect("sqlite::memory:", 1, 30)
            .await
            .expect("in-memory database"),
    );
    let admin = storage
        .create_user(CreateUserRequest {
            email: ADMIN_EMAIL.to_string(),
            password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
            name: "Administrator".to_string(),
            role: UserRole::Admin,
        })
        .await
        .unwrap();
    let (admin_token, _) = JwtUtils::generate_token(&admin.id, admin.role.as_str()).unwrap();

    Harness {
        storage,
        cache: Arc::new(MokaCacheWrapper::with_settings(1_000, 60)),
        admin_token,
    }
}

macro_rules! init_app {
    ($h:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($h.storage.clone()))
                .app_data(web::Data::new($h.cache.clone()))
                .configure(routes::configure_api_routes),
        )
        .await
    };
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

macro_rules! call {
    ($app:expr, $req:expr $(,)?) => {{
        let resp = test::call_service($app, $req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        let value: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }};
}

fn subject_payload(name: &str) -> Value {
    json!({"name": name, "duration": "12 months", "description": "Core subject"})
}

fn teacher_payload(email: &str, subject_id: &str) -> Value {
    json!({
        "name": "Meera Iyer",
        "email": email,
        "password": "teach-123",
        "phone": "9876543210",
        "gender": "female",
        "qualification": "M.Sc Physics",
        "experience": 6,
        "joiningDate": "2023-06-01",
        "salary": 42000,
        "subjects": [subject_id]
    })
}

fn student_payload(name: &str) -> Value {
    json!({
        "name": name,
        "phone": "9123456780",
        "parentName": format!("Parent of {name}"),
        "parentPhone": "9123456781",
        "gender": "male",
        "dateOfBirth": "2009-08-15",
        "board": "cbse",
        "joiningDate": "2024-01-02"
    })
}

/// 依次创建科目、年级与教师，返回三者 ID
macro_rules! seed_references {
    ($app:expr, $token:expr) => {{
        let app = $app;
        let token: &str = $token;
        let (status, subject) = call!(
            app,
            test::TestRequest::post()
                .uri("/api/subjects")
                .insert_header(bearer(token))
                .set_json(subject_payload("Physics")),
        );
        assert_eq!(status, StatusCode::CREATED, "{subject}");
        let subject_id = subject["data"]["id"].as_str().unwrap().to_string();

        let (status, standard) = call!(
            app,
            test::TestRequest::post()
                .uri("/api/standards")
                .insert_header(bearer(token))
                .set_json(json!({"name": "Class 10", "level": 10, "subjects": [subject_id]})),
        );
        assert_eq!(status, StatusCode::CREATED, "{standard}");
        let standard_id = standard["data"]["id"].as_str().unwrap().to_string();

        let (status, teacher) = call!(
            app,
            test::TestRequest::post()
                .uri("/api/teachers")
                .insert_header(bearer(token))
                .set_json(teacher_payload("meera@tuition.test", &subject_id)),
        );
        assert_eq!(status, StatusCode::CREATED, "{teacher}");
        let teacher_id = teacher["data"]["id"].as_str().unwrap().to_string();

        (standard_id, subject_id, teacher_id)
    }};
}

fn batch_payload(standard: &str, subject: &str, teacher: &str, capacity: i32) -> Value {
    json!({
        "name": "Class 10 Physics - Evening",
        "standard": standard,
        "subject": subject,
        "teacher": teacher,
        "startDate": "2024-01-05",
        "endDate": "2024-06-30",
        "schedule": {"days": ["monday", "wednesday"], "startTime": "17:00", "endTime": "18:30"},
        "capacity": capacity,
        "fees": 2500
    })
}

fn staff_payload(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "role": "Accountant",
        "department": "Accounts",
        "email": email,
        "phone": "9012345678",
        "joiningDate": "2021-07-01"
    })
}

fn field_names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// 创建班次并报名给定数量的新学生，返回班次 ID 与学生 ID
macro_rules! batch_with_students {
    ($app:expr, $token:expr, $capacity:expr, $names:expr) => {{
        let app = $app;
        let token: &str = $token;
        let (standard, subject, teacher) = seed_references!(app, token);
        let (status, batch) = call!(
            app,
            test::TestRequest::post()
                .uri("/api/batches")
                .insert_header(bearer(token))
                .set_json(batch_payload(&standard, &subject, &teacher, $capacity)),
        );
        assert_eq!(status, StatusCode::CREATED, "{batch}");
        let batch_id = batch["data"]["id"].as_str().unwrap().to_string();

        let mut student_ids = Vec::new();
        for name in $names {
            let (status, student) = call!(
                app,
                test::TestRequest::post()
                    .uri("/api/students")
                    .insert_header(bearer(token))
                    .set_json(student_payload(name)),
            );
            assert_eq!(status, StatusCode::CREATED, "{student}");
            student_ids.push(student["data"]["id"].as_str().unwrap().to_string());
        }
        (batch_id, student_ids)
    }};
}

#[actix_web::test]
async fn test_login_me_and_logout() {
    let h = harness().await;
    let app = init_app!(h);

    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": ADMIN_EMAIL, "password": "wrong-password"})),
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::AuthFailed.as_i32());

    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD})),
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(body["data"]["expiresIn"].as_i64().unwrap() > 0);
    assert!(body["data"]["user"].get("passwordHash").is_none());
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let (status, body) = call!(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], ADMIN_EMAIL);
    assert_eq!(body["data"]["role"], "admin");

    let (status, _) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/logout")
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_requests_without_valid_token_are_rejected() {
    let h = harness().await;
    let app = init_app!(h);

    let (status, body) = call!(&app, test::TestRequest::get().uri("/api/students"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], ErrorCode::Unauthorized.as_i32());

    let expired = JwtUtils::generate_token_with_secret(
        "someone",
        "admin",
        chrono::Duration::seconds(-60),
        JWT_SECRET.as_bytes(),
    )
    .unwrap();
    let (status, _) = call!(
        &app,
        test::TestRequest::get()
            .uri("/api/students")
            .insert_header(bearer(&expired)),
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_subject_crud_round() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();

    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/subjects")
            .insert_header(bearer(&token))
            .set_json(json!({"description": "no name or duration"})),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"duration"));

    let (_, list) = call!(
        &app,
        test::TestRequest::get()
            .uri("/api/subjects")
            .insert_header(bearer(&token)),
    );
    assert_eq!(list["data"]["pagination"]["total"], 0);

    let (status, created) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/subjects")
            .insert_header(bearer(&token))
            .set_json(subject_payload("Chemistry")),
    );
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, updated) = call!(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/subjects/{id}"))
            .insert_header(bearer(&token))
            .set_json(json!({"status": "inactive"})),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["status"], "inactive");
    assert_eq!(updated["data"]["name"], "Chemistry");

    let (_, list) = call!(
        &app,
        test::TestRequest::get()
            .uri("/api/subjects")
            .insert_header(bearer(&token)),
    );
    assert_eq!(list["data"]["pagination"]["total"], 1);

    let (status, _) = call!(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/subjects/{id}"))
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call!(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/subjects/{id}"))
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_path_id_is_bad_request() {
    let h = harness().await;
    let app = init_app!(h);

    let (status, body) = call!(
        &app,
        test::TestRequest::get()
            .uri("/api/standards/not-a-uuid")
            .insert_header(bearer(&h.admin_token)),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::InvalidId.as_i32());
}

#[actix_web::test]
async fn test_batch_end_date_before_start_is_rejected() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();
    let (standard, subject, teacher) = seed_references!(&app, &token);

    let mut payload = batch_payload(&standard, &subject, &teacher, 30);
    payload["startDate"] = json!("2024-01-10");
    payload["endDate"] = json!("2024-01-05");

    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/batches")
            .insert_header(bearer(&token))
            .set_json(payload),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::ValidationFailed.as_i32());
    let errors = body["data"].as_array().unwrap();
    assert!(errors.iter().any(|e| e["field"] == "endDate"));

    let (_, list) = call!(
        &app,
        test::TestRequest::get()
            .uri("/api/batches")
            .insert_header(bearer(&token)),
    );
    assert_eq!(list["data"]["pagination"]["total"], 0);
}

#[actix_web::test]
async fn test_unknown_reference_is_a_field_error() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();
    let (standard, subject, _) = seed_references!(&app, &token);

    let missing_teacher = uuid::Uuid::new_v4().to_string();
    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/batches")
            .insert_header(bearer(&token))
            .set_json(batch_payload(&standard, &subject, &missing_teacher, 30)),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"][0]["field"], "teacher");
}

#[actix_web::test]
async fn test_enroll_with_one_already_enrolled() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();
    let (standard, subject, teacher) = seed_references!(&app, &token);

    let (status, batch) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/batches")
            .insert_header(bearer(&token))
            .set_json(batch_payload(&standard, &subject, &teacher, 10)),
    );
    assert_eq!(status, StatusCode::CREATED, "{batch}");
    let batch_id = batch["data"]["id"].as_str().unwrap().to_string();

    let mut student_ids = Vec::new();
    for name in ["Arjun", "Kabir", "Rohan"] {
        let (status, student) = call!(
            &app,
            test::TestRequest::post()
                .uri("/api/students")
                .insert_header(bearer(&token))
                .set_json(student_payload(name)),
        );
        assert_eq!(status, StatusCode::CREATED, "{student}");
        student_ids.push(student["data"]["id"].as_str().unwrap().to_string());
    }

    let (status, _) = call!(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/batches/{batch_id}/students"))
            .insert_header(bearer(&token))
            .set_json(json!({"studentIds": [student_ids[0]]})),
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/batches/{batch_id}/students"))
            .insert_header(bearer(&token))
            .set_json(json!({"studentIds": student_ids})),
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    let results = body["data"]["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["status"], "already_enrolled");
    assert_eq!(results[1]["status"], "enrolled");
    assert_eq!(results[2]["status"], "enrolled");
    assert_eq!(body["data"]["enrolledCount"], 3);

    let (_, available) = call!(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/batches/{batch_id}/available-students"))
            .insert_header(bearer(&token)),
    );
    assert_eq!(available["data"].as_array().unwrap().len(), 0);

    let (status, _) = call!(
        &app,
        test::TestRequest::delete()
            .uri(&format!(
                "/api/batches/{batch_id}/students/{}",
                student_ids[1]
            ))
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::OK);

    let (_, enrolled) = call!(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/batches/{batch_id}/students"))
            .insert_header(bearer(&token)),
    );
    assert_eq!(enrolled["data"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_teacher_account_can_read_but_not_mutate() {
    let h = harness().await;
    let app = init_app!(h);
    let (_, subject, _) = seed_references!(&app, &h.admin_token);

    // 创建教师时同时创建的登录账号
    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "meera@tuition.test", "password": "teach-123"})),
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["user"]["role"], "teacher");
    let teacher_token = body["data"]["token"].as_str().unwrap().to_string();

    let (status, _) = call!(
        &app,
        test::TestRequest::get()
            .uri("/api/subjects")
            .insert_header(bearer(&teacher_token)),
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call!(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/subjects/{subject}"))
            .insert_header(bearer(&teacher_token)),
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], ErrorCode::PermissionDenied.as_i32());
}

#[actix_web::test]
async fn test_subject_in_use_cannot_be_deleted() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();
    let (standard, subject, teacher) = seed_references!(&app, &token);

    let (status, _) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/batches")
            .insert_header(bearer(&token))
            .set_json(batch_payload(&standard, &subject, &teacher, 5)),
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call!(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/subjects/{subject}"))
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::SubjectInUse.as_i32());
}

#[actix_web::test]
async fn test_missing_required_field_persists_nothing() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();
    let some_id = uuid::Uuid::new_v4().to_string();

    let mut teacher = teacher_payload("nobody@tuition.test", &some_id);
    teacher["subjects"] = json!([]);
    let cases: Vec<(&str, Value, &str)> = vec![
        ("standards", json!({"name": "Class 8", "level": 8}), "level"),
        ("subjects", subject_payload("History"), "duration"),
        ("teachers", teacher, "password"),
        ("staff", staff_payload("Nisha Rao", "nisha@tuition.test"), "department"),
        (
            "batches",
            batch_payload(&some_id, &some_id, &some_id, 20),
            "schedule.endTime",
        ),
        ("students", student_payload("Dev"), "parentPhone"),
        (
            "announcements",
            json!({
                "title": "Diwali break",
                "content": "Classes resume on Monday",
                "type": "holiday",
                "priority": "medium",
                "startDate": "2024-10-30",
                "endDate": "2024-11-04"
            }),
            "content",
        ),
        (
            "payments",
            json!({
                "student": some_id,
                "amount": 1500,
                "paymentDate": "2024-02-01",
                "method": "upi"
            }),
            "method",
        ),
    ];

    for (resource, mut payload, field) in cases {
        match field.split_once('.') {
            Some((parent, key)) => {
                payload[parent].as_object_mut().unwrap().remove(key);
            }
            None => {
                payload.as_object_mut().unwrap().remove(field);
            }
        }

        let (status, body) = call!(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/{resource}"))
                .insert_header(bearer(&token))
                .set_json(payload),
        );
        assert_eq!(status, StatusCode::BAD_REQUEST, "{resource}: {body}");
        assert_eq!(body["code"], ErrorCode::ValidationFailed.as_i32());
        assert_eq!(field_names(&body), vec![field.to_string()], "{resource}");

        let (status, list) = call!(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/{resource}"))
                .insert_header(bearer(&token)),
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["data"]["pagination"]["total"], 0, "{resource}");
    }
}

#[actix_web::test]
async fn test_blank_optional_numbers_are_treated_as_unset() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();

    let mut student = student_payload("Tara");
    student["previousPercentage"] = json!("");
    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/students")
            .insert_header(bearer(&token))
            .set_json(student),
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body["data"]["previousPercentage"].is_null());

    let (status, subject) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/subjects")
            .insert_header(bearer(&token))
            .set_json(subject_payload("Biology")),
    );
    assert_eq!(status, StatusCode::CREATED);
    let mut teacher = teacher_payload("sana@tuition.test", subject["data"]["id"].as_str().unwrap());
    teacher["experience"] = json!("");
    teacher["salary"] = json!("");
    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/teachers")
            .insert_header(bearer(&token))
            .set_json(teacher),
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["experience"], 0);

    // 非空的错误值仍然得到字段错误
    let mut student = student_payload("Omar");
    student["previousPercentage"] = json!("ninety");
    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/students")
            .insert_header(bearer(&token))
            .set_json(student),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(field_names(&body), vec!["previousPercentage".to_string()]);
}

#[actix_web::test]
async fn test_enrollment_stops_at_capacity() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();
    let (batch_id, student_ids) =
        batch_with_students!(&app, &token, 2, ["Aarav", "Diya", "Neel"]);

    let (status, body) = call!(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/batches/{batch_id}/students"))
            .insert_header(bearer(&token))
            .set_json(json!({"studentIds": student_ids})),
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    let statuses: Vec<&str> = body["data"]["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["enrolled", "enrolled", "batch_full"]);
    assert_eq!(body["data"]["enrolledCount"], 2);

    // 容量不能低于已报名人数
    let (status, body) = call!(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/batches/{batch_id}"))
            .insert_header(bearer(&token))
            .set_json(json!({"capacity": 1})),
    );
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    let (_, batch) = call!(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/batches/{batch_id}"))
            .insert_header(bearer(&token)),
    );
    assert_eq!(batch["data"]["capacity"], 2);
}

#[actix_web::test]
async fn test_partial_batch_update_checks_stored_dates() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();
    let (batch_id, _) = batch_with_students!(&app, &token, 10, Vec::<&str>::new());

    // 存储的开始日期为 2024-01-05
    let (status, body) = call!(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/batches/{batch_id}"))
            .insert_header(bearer(&token))
            .set_json(json!({"endDate": "2024-01-01"})),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(field_names(&body), vec!["endDate".to_string()]);

    let (status, body) = call!(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/batches/{batch_id}"))
            .insert_header(bearer(&token))
            .set_json(json!({"endDate": "2024-03-31"})),
    );
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["endDate"], "2024-03-31");
}

#[actix_web::test]
async fn test_closed_batch_rejects_enrollment() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();
    let (batch_id, student_ids) = batch_with_students!(&app, &token, 10, ["Ira"]);

    for status_value in ["completed", "cancelled"] {
        let (status, _) = call!(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/batches/{batch_id}"))
                .insert_header(bearer(&token))
                .set_json(json!({"status": status_value})),
        );
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call!(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/batches/{batch_id}/students"))
                .insert_header(bearer(&token))
                .set_json(json!({"studentIds": student_ids})),
        );
        assert_eq!(status, StatusCode::CONFLICT, "{status_value}: {body}");
    }

    let (_, enrolled) = call!(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/batches/{batch_id}/students"))
            .insert_header(bearer(&token)),
    );
    assert!(enrolled["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_deleting_batch_removes_enrollments() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();
    let (batch_id, student_ids) = batch_with_students!(&app, &token, 10, ["Maya"]);

    let (status, _) = call!(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/batches/{batch_id}/students"))
            .insert_header(bearer(&token))
            .set_json(json!({"studentIds": student_ids})),
    );
    assert_eq!(status, StatusCode::OK);

    let student_uri = format!("/api/students/{}", student_ids[0]);
    let (_, student) = call!(
        &app,
        test::TestRequest::get()
            .uri(&student_uri)
            .insert_header(bearer(&token)),
    );
    assert_eq!(student["data"]["batches"], json!([batch_id]));

    let (status, _) = call!(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/batches/{batch_id}"))
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::OK);

    let (status, student) = call!(
        &app,
        test::TestRequest::get()
            .uri(&student_uri)
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["data"]["batches"], json!([]));
}

#[actix_web::test]
async fn test_deleting_manager_clears_reporting_to() {
    let h = harness().await;
    let app = init_app!(h);
    let token = h.admin_token.clone();

    let (status, manager) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/staff")
            .insert_header(bearer(&token))
            .set_json(staff_payload("Rekha Menon", "rekha@tuition.test")),
    );
    assert_eq!(status, StatusCode::CREATED, "{manager}");
    let manager_id = manager["data"]["id"].as_str().unwrap().to_string();

    let mut clerk = staff_payload("Sunil Das", "sunil@tuition.test");
    clerk["reportingTo"] = json!(manager_id);
    let (status, clerk) = call!(
        &app,
        test::TestRequest::post()
            .uri("/api/staff")
            .insert_header(bearer(&token))
            .set_json(clerk),
    );
    assert_eq!(status, StatusCode::CREATED, "{clerk}");
    assert_eq!(clerk["data"]["reportingTo"], json!(manager_id));
    let clerk_uri = format!("/api/staff/{}", clerk["data"]["id"].as_str().unwrap());

    let (status, _) = call!(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/staff/{manager_id}"))
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::OK);

    let (status, clerk) = call!(
        &app,
        test::TestRequest::get()
            .uri(&clerk_uri)
            .insert_header(bearer(&token)),
    );
    assert_eq!(status, StatusCode::OK);
    assert!(clerk["data"]["reportingTo"].is_null());
}
