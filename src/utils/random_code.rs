use rand::Rng;

const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成随机码，去掉了容易混淆的 0/O、1/I
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CODE_CHARSET[rng.random_range(0..CODE_CHARSET.len())] as char)
        .collect()
}

/// 生成学号，如 `STU-4F2A9C7B`
pub fn generate_student_code() -> String {
    format!("STU-{}", generate_random_code(8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_code_charset() {
        let code = generate_random_code(32);
        assert_eq!(code.len(), 32);
        assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
    }

    #[test]
    fn test_student_code_fits_column() {
        let code = generate_student_code();
        assert!(code.starts_with("STU-"));
        assert!(code.len() <= 20);
    }
}
