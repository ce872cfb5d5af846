use crate::domain::model::FieldMap;
use crate::domain::ports::TraceStrategy;
use crate::utils::error::StrategyResult;
use async_trait::async_trait;

/// 最後的保底策略：只看號碼格式
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatStrategy;

impl FormatStrategy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TraceStrategy for FormatStrategy {
    fn name(&self) -> &'static str {
        "basic-format"
    }

    async fn attempt(&self, query: &str) -> StrategyResult<FieldMap> {
        Ok(describe_format(query))
    }
}

pub fn describe_format(number: &str) -> FieldMap {
    let mut details = FieldMap::new();
    details.insert("Number", number);

    if number.starts_with('+') {
        details.insert("Format", "International");
    } else {
        details.insert("Format", "Local");
    }

    let digit_count = number.chars().filter(|c| *c != '+' && *c != ' ').count();
    if digit_count >= 10 {
        details.insert("Validity", "Valid Length");
    } else {
        details.insert("Validity", "Invalid Length");
    }

    if looks_like_test_number(number) {
        details.insert("Type", "Possibly Fake/Test Number");
    } else {
        details.insert("Type", "Regular Number");
    }

    details
}

/// 結尾四碼是同一個數字（0000、1111、9999…）
pub fn looks_like_test_number(number: &str) -> bool {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return false;
    }
    let suffix = &digits[digits.len() - 4..];
    suffix.iter().all(|digit| *digit == suffix[0])
}
