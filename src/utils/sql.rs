use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, Condition};

/// 转义 LIKE 模式中的通配符，`\` 作为转义字符
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 构造「列包含关键字」条件，用户输入中的 `%`、`_` 按字面匹配
pub fn contains_condition<C: ColumnTrait>(column: C, keyword: &str) -> Condition {
    let pattern = format!("%{}%", escape_like_pattern(keyword));
    Condition::all().add(column.like(LikeExpr::new(pattern).escape('\\')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_wildcards() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like_pattern("Class 10"), "Class 10");
    }
}
