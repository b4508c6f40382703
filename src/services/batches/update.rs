use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde_json::Value;
use tracing::info;

use super::{BatchService, load_batch};
use crate::models::batches::entities::Batch;
use crate::models::batches::{requests::UpdateBatchRequest, rules::BATCH_RULES};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{
    Reference, ensure_references, not_found, parse_body, storage_error, validation_failed,
};
use crate::storage::RefTable;
use crate::validation::{FieldError, Mode};

/// 部分更新后的日期和时间仍需满足先后顺序
///
/// 请求只带其中一个字段时，规则集无法和库中的值比较，这里按合并后的结果再检查一次。
pub(crate) fn merged_errors(current: &Batch, update: &UpdateBatchRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let start_date = update.start_date.unwrap_or(current.start_date);
    let end_date = update.end_date.unwrap_or(current.end_date);
    if end_date <= start_date {
        errors.push(FieldError::new(
            "endDate",
            "End date must be after start date",
        ));
    }

    let schedule = update
        .schedule
        .clone()
        .unwrap_or_default()
        .apply_to(&current.schedule);
    if schedule.end_time <= schedule.start_time {
        errors.push(FieldError::new(
            "schedule.endTime",
            "End time must be after start time",
        ));
    }

    errors
}

pub async fn update_batch(
    service: &BatchService,
    request: &HttpRequest,
    batch_id: String,
    body: Value,
) -> ActixResult<HttpResponse> {
    let update: UpdateBatchRequest = match parse_body(&BATCH_RULES, body, Mode::Update) {
        Ok(update) => update,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    let current = match load_batch(&storage, &batch_id).await {
        Ok(batch) => batch,
        Err(response) => return Ok(response),
    };

    let errors = merged_errors(&current, &update);
    if !errors.is_empty() {
        return Ok(validation_failed(errors));
    }

    if let Some(capacity) = update.capacity
        && (capacity as usize) < current.enrolled_students.len()
    {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::BatchCapacityTooLow,
            format!(
                "Capacity cannot be lower than the {} students already enrolled",
                current.enrolled_students.len()
            ),
        )));
    }

    let references = vec![
        Reference::one("standard", RefTable::Standards, update.standard.as_deref()),
        Reference::one("subject", RefTable::Subjects, update.subject.as_deref()),
        Reference::one("teacher", RefTable::Teachers, update.teacher.as_deref()),
    ];
    if let Err(response) = ensure_references(&storage, references).await {
        return Ok(response);
    }

    match storage.update_batch(&batch_id, update).await {
        Ok(Some(batch)) => {
            info!("Batch {} updated", batch.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                batch,
                "Batch updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::BatchNotFound, "Batch not found")),
        Err(e) => Ok(storage_error("Failed to update batch", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::batches::entities::{BatchStatus, Schedule, Weekday};
    use crate::models::batches::requests::ScheduleUpdate;
    use chrono::NaiveDate;

    fn batch() -> Batch {
        let now = chrono::Utc::now();
        Batch {
            id: "b1".to_string(),
            name: "Class 10 Physics A".to_string(),
            standard: "s1".to_string(),
            subject: "sub1".to_string(),
            teacher: "t1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            schedule: Schedule {
                days: vec![Weekday::Monday],
                start_time: "16:00".to_string(),
                end_time: "17:30".to_string(),
            },
            capacity: 30,
            fees: 12000.0,
            status: BatchStatus::Active,
            description: None,
            enrolled_students: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_end_date_only_compared_with_stored_start() {
        let update = UpdateBatchRequest {
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31),
            ..Default::default()
        };
        let errors = merged_errors(&batch(), &update);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "endDate");
    }

    #[test]
    fn test_start_time_only_compared_with_stored_end() {
        let update = UpdateBatchRequest {
            schedule: Some(ScheduleUpdate {
                start_time: Some("18:00".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let errors = merged_errors(&batch(), &update);
        assert_eq!(errors[0].field, "schedule.endTime");
    }

    #[test]
    fn test_unrelated_update_passes() {
        let update = UpdateBatchRequest {
            name: Some("Class 10 Physics B".to_string()),
            ..Default::default()
        };
        assert!(merged_errors(&batch(), &update).is_empty());
    }
}
