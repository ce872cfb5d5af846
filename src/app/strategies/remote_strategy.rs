use crate::domain::model::FieldMap;
use crate::domain::ports::{LookupTransport, TraceStrategy};
use crate::utils::error::{StrategyError, StrategyResult};
use crate::utils::text::{clean_text, is_not_available, NOT_AVAILABLE};
use async_trait::async_trait;
use scraper::{ElementRef, Html};
use std::sync::Arc;

/// (輸出 label, 頁面上的原始文字)；頁面上的拼字照抄，例如 "Refrence City"
pub const TRACER_FIELDS: [(&str, &str); 18] = [
    ("Complaints", "Complaints"),
    ("Owner Name", "Owner Name"),
    ("SIM Card", "SIM card"),
    ("Mobile State", "Mobile State"),
    ("IMEI Number", "IMEI number"),
    ("MAC Address", "MAC address"),
    ("Connection", "Connection"),
    ("IP Address", "IP address"),
    ("Owner Address", "Owner Address"),
    ("Hometown", "Hometown"),
    ("Reference City", "Refrence City"),
    ("Owner Personality", "Owner Personality"),
    ("Language", "Language"),
    ("Mobile Locations", "Mobile Locations"),
    ("Country", "Country"),
    ("Tracking History", "Tracking History"),
    ("Tracker ID", "Tracker Id"),
    ("Tower Locations", "Tower Locations"),
];

/// Remote lookup against the external tracer endpoint.
pub struct RemoteStrategy {
    transport: Arc<dyn LookupTransport>,
    country_hint: String,
}

impl RemoteStrategy {
    pub fn new(transport: Arc<dyn LookupTransport>, country_hint: impl Into<String>) -> Self {
        Self {
            transport,
            country_hint: country_hint.into(),
        }
    }
}

#[async_trait]
impl TraceStrategy for RemoteStrategy {
    fn name(&self) -> &'static str {
        "remote-tracer"
    }

    async fn attempt(&self, query: &str) -> StrategyResult<FieldMap> {
        let body = self.transport.fetch(&self.country_hint, query).await?;
        tracing::debug!("📡 Tracer response received ({} bytes)", body.len());

        let fields = parse_tracer_response(&body, query);
        let found = fields
            .iter()
            .skip(1)
            .filter(|(_, value)| !is_not_available(value))
            .count();

        // 全部都是 N/A 代表沒查到東西，交給下一個策略
        if found == 0 {
            return Err(StrategyError::NoUsableFields);
        }

        tracing::debug!(
            "📡 Tracer resolved {}/{} fields",
            found,
            TRACER_FIELDS.len()
        );
        Ok(fields)
    }
}

/// Extracts every known label from the tracer page. The cell following a
/// label's text node holds its value; missing labels become `"N/A"`, so the
/// result always carries the number plus the full label set.
pub fn parse_tracer_response(body: &str, number: &str) -> FieldMap {
    let document = Html::parse_document(body);
    let nodes: Vec<_> = document.tree.root().descendants().collect();

    let mut details = FieldMap::new();
    details.insert("Number", number);

    for (label, search_text) in TRACER_FIELDS {
        let label_index = nodes.iter().position(|node| {
            node.value()
                .as_text()
                .is_some_and(|text| text.trim() == search_text)
        });

        let value = label_index
            .and_then(|index| {
                nodes[index + 1..]
                    .iter()
                    .find(|node| {
                        node.value()
                            .as_element()
                            .is_some_and(|element| element.name() == "td")
                    })
                    .and_then(|node| ElementRef::wrap(*node))
            })
            .map(|cell| clean_text(&cell.text().collect::<String>()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        details.insert(label, value);
    }

    details
}
