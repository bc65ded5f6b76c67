//! 构造参数校验辅助函数。

use crate::error::DomainError;

/// 必填文本：去除首尾空格后不能为空。
pub fn required_text(value: &str, field: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} required")));
    }
    Ok(trimmed.to_string())
}

/// 可选文本：去除首尾空格，允许为空。
pub fn optional_text(value: &str) -> String {
    value.trim().to_string()
}

/// 数值必须是有限值（拒绝 NaN 与 ±∞）。
pub fn finite(value: f64, field: &str) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be finite")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims() {
        assert_eq!(required_text("  Boiler-01 ", "name").expect("text"), "Boiler-01");
    }

    #[test]
    fn required_text_rejects_blank() {
        let err = required_text("   ", "name").expect_err("blank");
        assert_eq!(err, DomainError::Validation("name required".to_string()));
    }

    #[test]
    fn finite_rejects_nan() {
        assert!(finite(f64::NAN, "value").is_err());
        assert!(finite(f64::INFINITY, "value").is_err());
        assert_eq!(finite(1.5, "value").expect("finite"), 1.5);
    }
}
