//! 班次报名流程
//!
//! 候选学生 = 全部学生减去已报名学生。提交后服务端逐个返回结果，
//! 本地只把报名成功的学生加入班次。

use std::collections::HashSet;

use serde_json::json;

use super::api::ApiClient;
use super::error::ClientError;
use super::store::ResourceStore;
use crate::models::batches::entities::Batch;
use crate::models::batches::responses::EnrollmentResult;
use crate::models::students::entities::Student;

/// 从学生列表中去掉已报名该班次的学生
pub fn subtract_enrolled(students: &[Student], batch: &Batch) -> Vec<Student> {
    let enrolled: HashSet<&str> = batch.enrolled_students.iter().map(String::as_str).collect();
    students
        .iter()
        .filter(|s| !enrolled.contains(s.id.as_str()))
        .cloned()
        .collect()
}

/// 把报名结果合并到本地班次记录，返回新加入的学生数
pub fn apply_enrollment(batches: &mut ResourceStore<Batch>, result: &EnrollmentResult) -> usize {
    let Some(batch) = batches.find_mut(&result.batch_id) else {
        return 0;
    };

    let mut added = 0;
    for outcome in result.succeeded() {
        if !batch.enrolled_students.contains(&outcome.student_id) {
            batch.enrolled_students.push(outcome.student_id.clone());
            added += 1;
        }
    }

    let failures: Vec<String> = result
        .failed()
        .map(|o| format!("{}: {}", o.student_id, o.message))
        .collect();
    batches.loading = false;
    batches.success = Some(format!(
        "{} of {} students enrolled",
        added,
        result.results.len()
    ));
    batches.error = (!failures.is_empty()).then(|| failures.join("; "));
    added
}

/// 服务端计算的可报名学生
pub async fn fetch_available_students(
    api: &ApiClient,
    batch_id: &str,
) -> Result<Vec<Student>, ClientError> {
    api.get(&format!("batches/{batch_id}/available-students"), &[])
        .await
}

/// 提交报名并更新本地班次
pub async fn enroll_students(
    api: &ApiClient,
    batches: &mut ResourceStore<Batch>,
    batch_id: &str,
    student_ids: &[String],
) -> Result<EnrollmentResult, ClientError> {
    batches.loading = true;
    batches.clear_messages();

    let result: Result<EnrollmentResult, ClientError> = api
        .post(
            &format!("batches/{batch_id}/students"),
            &json!({ "studentIds": student_ids }),
        )
        .await;

    match result {
        Ok(result) => {
            apply_enrollment(batches, &result);
            Ok(result)
        }
        Err(err) => {
            batches.loading = false;
            batches.error = Some(err.to_string());
            Err(err)
        }
    }
}

/// 把学生移出班次
pub async fn unenroll_student(
    api: &ApiClient,
    batches: &mut ResourceStore<Batch>,
    batch_id: &str,
    student_id: &str,
) -> Result<(), ClientError> {
    batches.loading = true;
    batches.clear_messages();

    if let Err(err) = api
        .delete(&format!("batches/{batch_id}/students/{student_id}"))
        .await
    {
        batches.loading = false;
        batches.error = Some(err.to_string());
        return Err(err);
    }

    batches.loading = false;
    if let Some(batch) = batches.find_mut(batch_id) {
        batch.enrolled_students.retain(|id| id != student_id);
    }
    batches.success = Some("Student removed from batch".to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::batches::responses::{EnrollmentOutcome, EnrollmentStatus};

    fn batch(enrolled: &[&str]) -> Batch {
        serde_json::from_value(json!({
            "id": "b-1",
            "name": "Class 10 Physics",
            "standard": "std-1",
            "subject": "sub-1",
            "teacher": "t-1",
            "startDate": "2024-01-05",
            "endDate": "2024-06-30",
            "schedule": {"days": ["monday"], "startTime": "16:00", "endTime": "17:00"},
            "capacity": 30,
            "fees": 1500.0,
            "status": "active",
            "description": null,
            "enrolledStudents": enrolled,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn result(outcomes: Vec<EnrollmentOutcome>) -> EnrollmentResult {
        EnrollmentResult {
            batch_id: "b-1".to_string(),
            capacity: 30,
            enrolled_count: 3,
            results: outcomes,
        }
    }

    fn student(id: &str) -> Student {
        serde_json::from_value(json!({
            "id": id,
            "studentId": format!("STU-{id}"),
            "name": "Asha",
            "email": null,
            "phone": "9876543210",
            "parentName": "Ravi",
            "parentPhone": "9876543211",
            "parentEmail": null,
            "gender": "female",
            "dateOfBirth": "2010-04-02",
            "address": null,
            "board": "cbse",
            "schoolName": null,
            "previousPercentage": null,
            "joiningDate": "2024-01-01",
            "batches": [],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_candidates_exclude_enrolled_students() {
        let students = vec![student("s-1"), student("s-2"), student("s-3")];
        let candidates = subtract_enrolled(&students, &batch(&["s-2"]));
        let ids: Vec<&str> = candidates.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s-1", "s-3"]);
    }

    #[test]
    fn test_only_successful_students_are_added() {
        let mut store = ResourceStore::<Batch>::new();
        store.items.push(batch(&["s-1"]));

        let added = apply_enrollment(
            &mut store,
            &result(vec![
                EnrollmentOutcome::new("s-1", EnrollmentStatus::AlreadyEnrolled),
                EnrollmentOutcome::new("s-2", EnrollmentStatus::Enrolled),
                EnrollmentOutcome::new("s-3", EnrollmentStatus::Enrolled),
            ]),
        );

        assert_eq!(added, 2);
        assert_eq!(
            store.find("b-1").unwrap().enrolled_students,
            vec!["s-1", "s-2", "s-3"]
        );
        assert_eq!(store.success.as_deref(), Some("2 of 3 students enrolled"));
        assert!(store.error.as_deref().unwrap().starts_with("s-1:"));
    }

    #[test]
    fn test_unknown_batch_is_left_alone() {
        let mut store = ResourceStore::<Batch>::new();
        let added = apply_enrollment(
            &mut store,
            &result(vec![EnrollmentOutcome::new("s-2", EnrollmentStatus::Enrolled)]),
        );
        assert_eq!(added, 0);
        assert!(store.success.is_none());
    }
}
