//! 班次报名存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use super::students::attach_batches;
use crate::entity::{batch_students, batches, students};
use crate::errors::{Result, TuitionError};
use crate::models::batches::{
    entities::BatchStatus,
    responses::{EnrollmentOutcome, EnrollmentResult, EnrollmentStatus},
};
use crate::models::students::entities::Student;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::debug;

/// 批量查询各班次的已报名学生，按报名先后排序
pub(super) async fn enrolled_students_by_batch<C: ConnectionTrait>(
    db: &C,
    batch_ids: &[String],
) -> Result<HashMap<String, Vec<String>>> {
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
    if batch_ids.is_empty() {
        return Ok(grouped);
    }

    let rows = batch_students::Entity::find()
        .filter(batch_students::Column::BatchId.is_in(batch_ids.iter().cloned()))
        .order_by_asc(batch_students::Column::EnrolledAt)
        .order_by_asc(batch_students::Column::Id)
        .all(db)
        .await
        .map_err(|e| TuitionError::from_db("查询报名记录失败", e))?;

    for row in rows {
        grouped.entry(row.batch_id).or_default().push(row.student_id);
    }
    Ok(grouped)
}

/// 批量查询各学生报名的班次
pub(super) async fn batches_by_student<C: ConnectionTrait>(
    db: &C,
    student_ids: &[String],
) -> Result<HashMap<String, Vec<String>>> {
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
    if student_ids.is_empty() {
        return Ok(grouped);
    }

    let rows = batch_students::Entity::find()
        .filter(batch_students::Column::StudentId.is_in(student_ids.iter().cloned()))
        .order_by_asc(batch_students::Column::EnrolledAt)
        .order_by_asc(batch_students::Column::Id)
        .all(db)
        .await
        .map_err(|e| TuitionError::from_db("查询报名记录失败", e))?;

    for row in rows {
        grouped.entry(row.student_id).or_default().push(row.batch_id);
    }
    Ok(grouped)
}

impl SeaOrmStorage {
    /// 批量报名
    ///
    /// 事务开始时先写班次行拿到写锁，容量检查与插入对并发报名是原子的。
    /// 每个学生 ID 都有一个结果，失败项不影响成功项的提交。
    pub async fn enroll_students_impl(
        &self,
        batch_id: &str,
        student_ids: Vec<String>,
    ) -> Result<Option<EnrollmentResult>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TuitionError::from_db("开启事务失败", e))?;

        let locked = batches::Entity::update_many()
            .col_expr(batches::Column::UpdatedAt, Expr::value(now))
            .filter(batches::Column::Id.eq(batch_id))
            .exec(&txn)
            .await
            .map_err(|e| TuitionError::from_db("锁定班次失败", e))?;
        if locked.rows_affected == 0 {
            return Ok(None);
        }

        let batch = batches::Entity::find_by_id(batch_id)
            .one(&txn)
            .await
            .map_err(|e| TuitionError::from_db("查询班次失败", e))?
            .ok_or_else(|| TuitionError::not_found(format!("Batch {batch_id} not found")))?;

        let status = batch.status.parse::<BatchStatus>().unwrap_or_default();
        if !status.accepts_enrollment() {
            return Err(TuitionError::conflict(format!(
                "Batch is {status}, enrollment is closed"
            )));
        }

        let mut enrolled_count = batch_students::Entity::find()
            .filter(batch_students::Column::BatchId.eq(batch_id))
            .count(&txn)
            .await
            .map_err(|e| TuitionError::from_db("统计报名人数失败", e))? as i64;

        let already_enrolled: HashSet<String> = batch_students::Entity::find()
            .select_only()
            .column(batch_students::Column::StudentId)
            .filter(batch_students::Column::BatchId.eq(batch_id))
            .filter(batch_students::Column::StudentId.is_in(student_ids.iter().cloned()))
            .into_tuple::<String>()
            .all(&txn)
            .await
            .map_err(|e| TuitionError::from_db("查询报名记录失败", e))?
            .into_iter()
            .collect();

        let known_students: HashSet<String> = students::Entity::find()
            .select_only()
            .column(students::Column::Id)
            .filter(students::Column::Id.is_in(student_ids.iter().cloned()))
            .into_tuple::<String>()
            .all(&txn)
            .await
            .map_err(|e| TuitionError::from_db("查询学生失败", e))?
            .into_iter()
            .collect();

        let capacity = i64::from(batch.capacity);
        let mut seen = HashSet::new();
        let mut results = Vec::with_capacity(student_ids.len());

        for student_id in student_ids {
            let status = if !seen.insert(student_id.clone()) {
                EnrollmentStatus::DuplicateInRequest
            } else if !known_students.contains(&student_id) {
                EnrollmentStatus::NotFound
            } else if already_enrolled.contains(&student_id) {
                EnrollmentStatus::AlreadyEnrolled
            } else if enrolled_count >= capacity {
                EnrollmentStatus::BatchFull
            } else {
                batch_students::ActiveModel {
                    id: NotSet,
                    batch_id: Set(batch_id.to_string()),
                    student_id: Set(student_id.clone()),
                    enrolled_at: Set(now),
                }
                .insert(&txn)
                .await
                .map_err(|e| TuitionError::from_db("写入报名记录失败", e))?;
                enrolled_count += 1;
                EnrollmentStatus::Enrolled
            };

            results.push(EnrollmentOutcome::new(student_id, status));
        }

        txn.commit()
            .await
            .map_err(|e| TuitionError::from_db("提交事务失败", e))?;

        debug!(
            "Batch {} enrollment: {}/{} seats taken",
            batch_id, enrolled_count, capacity
        );

        Ok(Some(EnrollmentResult {
            batch_id: batch.id,
            capacity: batch.capacity,
            enrolled_count,
            results,
        }))
    }

    /// 取消报名
    pub async fn unenroll_student_impl(&self, batch_id: &str, student_id: &str) -> Result<bool> {
        let result = batch_students::Entity::delete_many()
            .filter(batch_students::Column::BatchId.eq(batch_id))
            .filter(batch_students::Column::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("取消报名失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 班次已报名学生
    pub async fn list_batch_students_impl(&self, batch_id: &str) -> Result<Vec<Student>> {
        let models = students::Entity::find()
            .filter(students::Column::Id.in_subquery(enrolled_in(batch_id)))
            .order_by_asc(students::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询班次学生失败", e))?;

        attach_batches(&self.db, models).await
    }

    /// 尚未报名该班次的学生
    pub async fn list_available_students_impl(&self, batch_id: &str) -> Result<Vec<Student>> {
        let models = students::Entity::find()
            .filter(students::Column::Id.not_in_subquery(enrolled_in(batch_id)))
            .order_by_asc(students::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| TuitionError::from_db("查询可报名学生失败", e))?;

        attach_batches(&self.db, models).await
    }
}

/// 报名了指定班次的学生 ID 子查询
pub(super) fn enrolled_in(batch_id: &str) -> sea_orm::sea_query::SelectStatement {
    Query::select()
        .column(batch_students::Column::StudentId)
        .from(batch_students::Entity)
        .and_where(batch_students::Column::BatchId.eq(batch_id))
        .to_owned()
}
