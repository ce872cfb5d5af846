use once_cell::sync::Lazy;
use regex::Regex;

pub const NOT_AVAILABLE: &str = "N/A";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\-.,()@+:]").expect("valid regex"));

/// 清理抓取到的文字：合併空白、移除特殊字元，空字串回傳 "N/A"
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
    let cleaned = DISALLOWED_CHARS.replace_all(&collapsed, "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        cleaned.to_string()
    }
}

pub fn is_not_available(value: &str) -> bool {
    value.is_empty() || value == NOT_AVAILABLE
}
