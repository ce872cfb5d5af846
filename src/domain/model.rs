use chrono::{DateTime, Local};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// 查詢者的識別鍵，只用於限流分區
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for Identity {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for Identity {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for Identity {
    fn from(key: String) -> Self {
        Self(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Phone,
    Vehicle,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Phone => f.write_str("phone number"),
            QueryKind::Vehicle => f.write_str("vehicle registration"),
        }
    }
}

/// 保留插入順序的 label -> value 對照表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已存在的 label 會就地覆寫，不改變順序
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_str()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (label, value) in iter {
            map.insert(label, value);
        }
        map
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Which grammar alternative produced a registration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RegistrationFormat {
    /// Two-digit district, four-digit serial.
    Standard,
    /// Two-digit district, one to four digit serial.
    VariableSerial,
    /// One or two digit district.
    ShortDistrict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationKey {
    pub original: String,
    pub region_code: String,
    pub district_code: String,
    pub series: String,
    pub serial: String,
    pub office_code: String,
    pub format: RegistrationFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VehicleCategory {
    PrivateOldFormat,
    Private,
    Commercial,
    TwoWheeler,
    Special,
}

impl VehicleCategory {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::PrivateOldFormat => "Private Vehicle (Old Format)",
            VehicleCategory::Private => "Private Vehicle",
            VehicleCategory::Commercial => "Taxi/Commercial",
            VehicleCategory::TwoWheeler => "Two Wheeler",
            VehicleCategory::Special => "Special Vehicle",
        }
    }
}

/// Rough registration-age estimate derived from the serial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AgeBand {
    Before2005,
    From2005To2010,
    From2010To2015,
    After2015,
}

impl AgeBand {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Before2005 => "Before 2005 (Estimated)",
            AgeBand::From2005To2010 => "2005-2010 (Estimated)",
            AgeBand::From2010To2015 => "2010-2015 (Estimated)",
            AgeBand::After2015 => "After 2015 (Estimated)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRecord {
    pub key: RegistrationKey,
    pub region_name: String,
    pub office_name: String,
    pub category: Option<VehicleCategory>,
    pub age_band: Option<AgeBand>,
}

impl VehicleRecord {
    /// 轉成對外輸出的欄位，沒有分類或年份估計時省略該欄位
    pub fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("Registration Number", self.key.original.as_str());
        fields.insert("State", self.region_name.as_str());
        fields.insert("RTO Office", self.office_name.as_str());
        fields.insert("RTO Code", self.key.office_code.as_str());
        fields.insert("Series", self.key.series.as_str());
        fields.insert("Number", self.key.serial.as_str());
        fields.insert(
            "Registration Region",
            format!("{}-{}", self.key.region_code, self.key.district_code),
        );

        if let Some(category) = self.category {
            fields.insert("Vehicle Type", category.label());
        }
        if let Some(age_band) = self.age_band {
            fields.insert("Estimated Registration Year", age_band.label());
        }

        fields
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub kind: QueryKind,
    pub query: String,
    pub fields: FieldMap,
    pub looked_up_at: DateTime<Local>,
}

impl LookupReport {
    pub fn new(kind: QueryKind, query: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            kind,
            query: query.into(),
            fields,
            looked_up_at: Local::now(),
        }
    }
}
