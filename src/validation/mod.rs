//! 声明式请求校验
//!
//! 每个资源声明一组字段规则，请求体在进入业务逻辑前按规则检查。
//! 规则按声明顺序执行，每个字段只记录第一条失败消息；字段之间互不影响。
//! 字段路径使用点号表示嵌套，如 `schedule.endTime`。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::models::common::dates::parse_date;
use crate::utils::validate::{is_valid_email, is_valid_id, is_valid_phone, is_valid_time};

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/validation.ts")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 校验模式：创建时检查必填项，更新时所有字段可选
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Update,
}

#[derive(Debug, Clone)]
enum Check {
    Length { min: usize, max: usize },
    Email,
    Phone,
    Date,
    Time,
    Id,
    OneOf(&'static [&'static str]),
    Integer { min: Option<i64>, max: Option<i64> },
    Number { min: Option<f64>, max: Option<f64> },
    Positive,
    Boolean,
    IdList,
    NonEmptyList,
    Members(&'static [&'static str]),
    DateAfter(&'static str),
    DateNotBefore(&'static str),
    TimeAfter(&'static str),
    NotInFuture,
}

impl Check {
    fn passes(&self, value: &Value, payload: &Value) -> bool {
        match self {
            Check::Length { min, max } => value.as_str().is_some_and(|s| {
                let len = s.trim().chars().count();
                len >= *min && len <= *max
            }),
            Check::Email => value.as_str().is_some_and(|s| is_valid_email(s.trim())),
            Check::Phone => value.as_str().is_some_and(is_valid_phone),
            Check::Date => value.as_str().and_then(parse_date).is_some(),
            Check::Time => value.as_str().is_some_and(is_valid_time),
            Check::Id => value.as_str().is_some_and(is_valid_id),
            Check::OneOf(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
            Check::Integer { min, max } => value.as_i64().is_some_and(|n| {
                min.is_none_or(|min| n >= min) && max.is_none_or(|max| n <= max)
            }),
            Check::Number { min, max } => value.as_f64().is_some_and(|n| {
                min.is_none_or(|min| n >= min) && max.is_none_or(|max| n <= max)
            }),
            Check::Positive => value.as_f64().is_some_and(|n| n > 0.0),
            Check::Boolean => value.is_boolean(),
            Check::IdList => value.as_array().is_some_and(|items| {
                items
                    .iter()
                    .all(|item| item.as_str().is_some_and(is_valid_id))
            }),
            Check::NonEmptyList => value.as_array().is_some_and(|items| !items.is_empty()),
            Check::Members(allowed) => value.as_array().is_some_and(|items| {
                items
                    .iter()
                    .all(|item| item.as_str().is_some_and(|s| allowed.contains(&s)))
            }),
            Check::DateAfter(sibling) => compare_dates(value, payload, sibling, |a, b| a > b),
            Check::DateNotBefore(sibling) => {
                compare_dates(value, payload, sibling, |a, b| a >= b)
            }
            Check::TimeAfter(sibling) => {
                match (value.as_str(), lookup(payload, sibling).and_then(Value::as_str)) {
                    // HH:mm 为定长格式，字典序即时间顺序
                    (Some(end), Some(start)) if is_valid_time(start) => end > start,
                    _ => true,
                }
            }
            Check::NotInFuture => value
                .as_str()
                .and_then(parse_date)
                .is_some_and(|date| date <= chrono::Utc::now().date_naive()),
        }
    }
}

impl Check {
    /// 期望非字符串值的检查
    fn expects_non_string(&self) -> bool {
        matches!(
            self,
            Check::Integer { .. }
                | Check::Number { .. }
                | Check::Positive
                | Check::Boolean
                | Check::IdList
                | Check::NonEmptyList
                | Check::Members(_)
        )
    }
}

/// 兄弟字段缺失或格式错误时不做比较，由兄弟字段自己的规则报告
fn compare_dates(
    value: &Value,
    payload: &Value,
    sibling: &str,
    ordered: fn(chrono::NaiveDate, chrono::NaiveDate) -> bool,
) -> bool {
    let Some(this) = value.as_str().and_then(parse_date) else {
        return true;
    };
    match lookup(payload, sibling)
        .and_then(Value::as_str)
        .and_then(parse_date)
    {
        Some(other) => ordered(this, other),
        None => true,
    }
}

/// 按点号路径取值
pub fn lookup<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(payload, |current, key| current.get(key))
}

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

/// 单个字段的规则链
#[derive(Debug, Clone)]
pub struct FieldRule {
    path: &'static str,
    required: Option<&'static str>,
    checks: Vec<(Check, &'static str)>,
}

impl FieldRule {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            required: None,
            checks: Vec::new(),
        }
    }

    fn check(mut self, check: Check, message: &'static str) -> Self {
        self.checks.push((check, message));
        self
    }

    /// 创建时必填；空字符串视为未填写
    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn length(self, min: usize, max: usize, message: &'static str) -> Self {
        self.check(Check::Length { min, max }, message)
    }

    pub fn max_length(self, max: usize, message: &'static str) -> Self {
        self.check(Check::Length { min: 0, max }, message)
    }

    pub fn email(self, message: &'static str) -> Self {
        self.check(Check::Email, message)
    }

    pub fn phone(self, message: &'static str) -> Self {
        self.check(Check::Phone, message)
    }

    pub fn date(self, message: &'static str) -> Self {
        self.check(Check::Date, message)
    }

    pub fn time(self, message: &'static str) -> Self {
        self.check(Check::Time, message)
    }

    pub fn id(self, message: &'static str) -> Self {
        self.check(Check::Id, message)
    }

    pub fn one_of(self, allowed: &'static [&'static str], message: &'static str) -> Self {
        self.check(Check::OneOf(allowed), message)
    }

    pub fn integer(self, min: Option<i64>, max: Option<i64>, message: &'static str) -> Self {
        self.check(Check::Integer { min, max }, message)
    }

    pub fn number(self, min: Option<f64>, max: Option<f64>, message: &'static str) -> Self {
        self.check(Check::Number { min, max }, message)
    }

    pub fn positive(self, message: &'static str) -> Self {
        self.check(Check::Positive, message)
    }

    pub fn boolean(self, message: &'static str) -> Self {
        self.check(Check::Boolean, message)
    }

    pub fn id_list(self, message: &'static str) -> Self {
        self.check(Check::IdList, message)
    }

    pub fn non_empty_list(self, message: &'static str) -> Self {
        self.check(Check::NonEmptyList, message)
    }

    pub fn members(self, allowed: &'static [&'static str], message: &'static str) -> Self {
        self.check(Check::Members(allowed), message)
    }

    /// 日期必须严格晚于兄弟字段
    pub fn date_after(self, sibling: &'static str, message: &'static str) -> Self {
        self.check(Check::DateAfter(sibling), message)
    }

    /// 日期不得早于兄弟字段
    pub fn date_not_before(self, sibling: &'static str, message: &'static str) -> Self {
        self.check(Check::DateNotBefore(sibling), message)
    }

    /// 时间必须严格晚于兄弟字段
    pub fn time_after(self, sibling: &'static str, message: &'static str) -> Self {
        self.check(Check::TimeAfter(sibling), message)
    }

    pub fn not_in_future(self, message: &'static str) -> Self {
        self.check(Check::NotInFuture, message)
    }

    fn evaluate(&self, payload: &Value, mode: Mode) -> Option<FieldError> {
        let value = lookup(payload, self.path);

        if is_absent(value) {
            // 更新时缺失字段表示不修改；空字符串交给规则链判断
            let blank_string = matches!(value, Some(Value::String(_)));
            return match (mode, self.required) {
                (Mode::Create, Some(message)) => Some(FieldError::new(self.path, message)),
                (Mode::Update, Some(_)) if blank_string => {
                    value.and_then(|v| self.first_failure(v, payload))
                }
                _ => None,
            };
        }

        value.and_then(|v| self.first_failure(v, payload))
    }

    fn expects_non_string(&self) -> bool {
        self.checks.iter().any(|(check, _)| check.expects_non_string())
    }

    fn first_failure(&self, value: &Value, payload: &Value) -> Option<FieldError> {
        self.checks
            .iter()
            .find(|(check, _)| !check.passes(value, payload))
            .map(|(_, message)| FieldError::new(self.path, *message))
    }
}

/// 一个资源的完整规则集
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    pub fn validate(&self, payload: &Value, mode: Mode) -> Result<(), Vec<FieldError>> {
        if !payload.is_object() {
            return Err(vec![FieldError::new(
                "body",
                "Request body must be a JSON object",
            )]);
        }

        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|rule| rule.evaluate(payload, mode))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// 表单里留空的数字、布尔和列表字段按未填写处理，从请求体中移除
    ///
    /// 在 `validate` 通过之后调用；必填字段留空已在校验中报告。
    pub fn clear_blank_values(&self, payload: &mut Value) {
        for rule in self.fields.iter().filter(|rule| rule.expects_non_string()) {
            let (parent, key) = match rule.path.rsplit_once('.') {
                Some((parent, key)) => (format!("/{}", parent.replace('.', "/")), key),
                None => (String::new(), rule.path),
            };
            if let Some(object) = payload.pointer_mut(&parent).and_then(Value::as_object_mut)
                && object.get(key).is_some_and(|value| is_absent(Some(value)))
            {
                object.remove(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn window_rules() -> RuleSet {
        RuleSet::new()
            .field(
                FieldRule::new("name")
                    .required("Name is required")
                    .length(1, 10, "Name must be at most 10 characters"),
            )
            .field(
                FieldRule::new("startDate")
                    .required("Start date is required")
                    .date("Start date must be a valid date"),
            )
            .field(
                FieldRule::new("endDate")
                    .required("End date is required")
                    .date("End date must be a valid date")
                    .date_after("startDate", "End date must be after start date"),
            )
            .field(
                FieldRule::new("schedule.startTime")
                    .time("Start time must be in HH:mm format"),
            )
            .field(
                FieldRule::new("schedule.endTime")
                    .time("End time must be in HH:mm format")
                    .time_after("schedule.startTime", "End time must be after start time"),
            )
            .field(FieldRule::new("email").email("Invalid email"))
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_missing_required_fields_on_create() {
        let errors = window_rules()
            .validate(&json!({}), Mode::Create)
            .unwrap_err();
        assert_eq!(fields(&errors), vec!["name", "startDate", "endDate"]);
        assert_eq!(errors[0].message, "Name is required");
    }

    #[test]
    fn test_missing_fields_allowed_on_update() {
        assert!(window_rules().validate(&json!({}), Mode::Update).is_ok());
    }

    #[test]
    fn test_blank_required_string_rejected_on_update() {
        let errors = window_rules()
            .validate(&json!({"name": "  "}), Mode::Update)
            .unwrap_err();
        assert_eq!(errors[0].message, "Name must be at most 10 characters");
    }

    #[test]
    fn test_end_date_before_start_date() {
        let payload = json!({
            "name": "Morning",
            "startDate": "2024-01-10",
            "endDate": "2024-01-05"
        });
        let errors = window_rules().validate(&payload, Mode::Create).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("endDate", "End date must be after start date")]);
    }

    #[test]
    fn test_equal_dates_rejected() {
        let payload = json!({
            "name": "Morning",
            "startDate": "2024-01-10",
            "endDate": "2024-01-10"
        });
        assert!(window_rules().validate(&payload, Mode::Create).is_err());
    }

    #[test]
    fn test_first_failure_per_field_wins() {
        let payload = json!({
            "name": "Morning",
            "startDate": "2024-01-10",
            "endDate": "not-a-date"
        });
        let errors = window_rules().validate(&payload, Mode::Create).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "End date must be a valid date");
    }

    #[test]
    fn test_nested_time_ordering() {
        let payload = json!({
            "schedule": {"startTime": "10:00", "endTime": "09:30"}
        });
        let errors = window_rules().validate(&payload, Mode::Update).unwrap_err();
        assert_eq!(fields(&errors), vec!["schedule.endTime"]);

        let payload = json!({
            "schedule": {"startTime": "10:00", "endTime": "10:00"}
        });
        assert!(window_rules().validate(&payload, Mode::Update).is_err());
    }

    #[test]
    fn test_sibling_missing_skips_comparison() {
        let payload = json!({"endDate": "2024-01-05"});
        assert!(window_rules().validate(&payload, Mode::Update).is_ok());
    }

    #[test]
    fn test_blank_optional_field_is_skipped() {
        let payload = json!({"email": ""});
        assert!(window_rules().validate(&payload, Mode::Update).is_ok());
        let payload = json!({"email": "nope"});
        assert!(window_rules().validate(&payload, Mode::Update).is_err());
    }

    #[test]
    fn test_blank_numeric_fields_are_dropped() {
        let rules = RuleSet::new()
            .field(FieldRule::new("salary").number(Some(0.0), None, "Salary must be positive"))
            .field(FieldRule::new("experience").integer(Some(0), None, "Invalid experience"))
            .field(FieldRule::new("address").max_length(500, "Address is too long"));
        let mut payload = json!({"salary": "", "experience": "  ", "address": ""});

        assert!(rules.validate(&payload, Mode::Create).is_ok());
        rules.clear_blank_values(&mut payload);
        assert_eq!(payload, json!({"address": ""}));
    }

    #[test]
    fn test_non_object_body() {
        let errors = window_rules().validate(&json!([1, 2]), Mode::Create).unwrap_err();
        assert_eq!(errors[0].field, "body");
    }

    #[test]
    fn test_lookup_dotted_path() {
        let payload = json!({"a": {"b": {"c": 3}}});
        assert_eq!(lookup(&payload, "a.b.c"), Some(&json!(3)));
        assert_eq!(lookup(&payload, "a.x"), None);
    }

    #[test]
    fn test_numeric_checks() {
        let rules = RuleSet::new()
            .field(FieldRule::new("level").integer(Some(1), Some(12), "Level must be 1-12"))
            .field(FieldRule::new("amount").positive("Amount must be positive"));
        assert!(rules.validate(&json!({"level": 12, "amount": 0.5}), Mode::Create).is_ok());
        let errors = rules
            .validate(&json!({"level": 13, "amount": 0}), Mode::Create)
            .unwrap_err();
        assert_eq!(fields(&errors), vec!["level", "amount"]);
        let errors = rules.validate(&json!({"level": "3"}), Mode::Create).unwrap_err();
        assert_eq!(fields(&errors), vec!["level"]);
    }
}
