use crate::domain::model::QueryKind;
use once_cell::sync::Lazy;
use regex::Regex;

// 任一模式符合即視為合法
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^\+[0-9]{10,15}$", // International format
        r"^[0-9]{10}$",      // 10-digit local format
        r"^[0-9]{11}$",      // 11-digit format
        r"^\+91[0-9]{10}$",  // Indian format
        r"^\+1[0-9]{10}$",   // US/Canada format
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid phone pattern"))
    .collect()
});

static VEHICLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{1,2}[A-Z]{1,2}[0-9]{1,4}$").expect("valid vehicle pattern")
});

/// 只保留數字與開頭的 '+'
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim_start();
    let mut normalized = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        normalized.push('+');
    }
    normalized.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));
    normalized
}

/// 移除空白與連字號並轉成大寫
pub fn normalize_vehicle(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn is_valid_phone(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return false;
    }
    let normalized = normalize_phone(raw);
    PHONE_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(&normalized))
}

pub fn is_valid_vehicle(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return false;
    }
    VEHICLE_PATTERN.is_match(&normalize_vehicle(raw))
}

/// 判斷自由文字看起來像電話還是車牌，電話優先
pub fn detect(text: &str) -> Option<QueryKind> {
    let text = text.trim();
    if is_valid_phone(text) {
        Some(QueryKind::Phone)
    } else if is_valid_vehicle(text) {
        Some(QueryKind::Vehicle)
    } else {
        None
    }
}
