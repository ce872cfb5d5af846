use crate::domain::model::FieldMap;
use crate::domain::ports::TraceStrategy;
use crate::utils::error::StrategyResult;
use async_trait::async_trait;

/// 純本地推測：依號碼前綴判斷國家與網路類型
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkStrategy;

impl NetworkStrategy {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TraceStrategy for NetworkStrategy {
    fn name(&self) -> &'static str {
        "network-heuristic"
    }

    async fn attempt(&self, query: &str) -> StrategyResult<FieldMap> {
        Ok(classify_number(query))
    }
}

pub fn classify_number(number: &str) -> FieldMap {
    let mut details = FieldMap::new();
    details.insert("Number", number);

    if is_indian_number(number) {
        details.insert("Country", "India");
        details.insert("Region", indian_region(number));
        details.insert("Network Type", "Mobile");
    } else if number.starts_with("+1") {
        details.insert("Country", "United States/Canada");
        details.insert("Network Type", "Mobile/Landline");
    } else if number.starts_with("+44") {
        details.insert("Country", "United Kingdom");
        details.insert("Network Type", "Mobile/Landline");
    } else {
        details.insert("Country", "Unknown");
        details.insert("Network Type", "Unknown");
    }

    details
}

fn is_indian_number(number: &str) -> bool {
    number.starts_with("+91")
        || (number.len() == 10 && number.starts_with(['6', '7', '8', '9']))
}

/// 去掉 +91 後依第一碼粗分區域
pub fn indian_region(number: &str) -> &'static str {
    let local = number.strip_prefix("+91").unwrap_or(number);
    if local.len() < 10 {
        return "Unknown Region";
    }

    match local.chars().next() {
        Some('9') => "Northern/Western India",
        Some('8') => "Eastern/Southern India",
        Some('7') => "Central/Western India",
        Some('6') => "Eastern India",
        _ => "Unknown Region",
    }
}
