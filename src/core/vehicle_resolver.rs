use crate::core::validator::normalize_vehicle;
use crate::domain::model::{
    AgeBand, RegistrationFormat, RegistrationKey, VehicleCategory, VehicleRecord,
};
use crate::domain::reference;
use crate::utils::error::{LookupError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_STATE: &str = "Unknown State";
pub const UNKNOWN_RTO: &str = "Unknown RTO";

// 由嚴格到寬鬆依序比對，第一個符合的勝出
static GRAMMAR: Lazy<Vec<(RegistrationFormat, Regex)>> = Lazy::new(|| {
    [
        (
            RegistrationFormat::Standard,
            r"^([A-Z]{2})([0-9]{2})([A-Z]{1,2})([0-9]{4})$",
        ),
        (
            RegistrationFormat::VariableSerial,
            r"^([A-Z]{2})([0-9]{2})([A-Z]{1,2})([0-9]{1,4})$",
        ),
        (
            RegistrationFormat::ShortDistrict,
            r"^([A-Z]{2})([0-9]{1,2})([A-Z]{1,2})([0-9]{1,4})$",
        ),
    ]
    .into_iter()
    .map(|(format, pattern)| {
        (
            format,
            Regex::new(pattern).expect("valid registration pattern"),
        )
    })
    .collect()
});

/// Parses registration strings and joins them against the reference tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleResolver;

impl VehicleResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, input: &str) -> Result<VehicleRecord> {
        let normalized = normalize_vehicle(input);
        let key = parse_registration(&normalized).ok_or_else(|| LookupError::NotFound {
            input: input.to_string(),
        })?;

        tracing::debug!(
            "🚗 Parsed {} as {:?} (office {})",
            key.original,
            key.format,
            key.office_code
        );

        Ok(build_record(key))
    }
}

pub fn parse_registration(normalized: &str) -> Option<RegistrationKey> {
    GRAMMAR.iter().find_map(|(format, pattern)| {
        let caps = pattern.captures(normalized)?;
        let region_code = caps[1].to_string();
        let district_code = caps[2].to_string();
        let office_code = office_code(&region_code, &district_code);

        Some(RegistrationKey {
            original: normalized.to_string(),
            region_code,
            district_code,
            series: caps[3].to_string(),
            serial: caps[4].to_string(),
            office_code,
            format: *format,
        })
    })
}

pub fn office_code(region_code: &str, district_code: &str) -> String {
    format!("{}{:0>2}", region_code, district_code)
}

pub fn build_record(key: RegistrationKey) -> VehicleRecord {
    let region_name = reference::region_name(&key.region_code).unwrap_or(UNKNOWN_STATE);
    let office_name = reference::office_name(&key.office_code).unwrap_or(UNKNOWN_RTO);
    let category = classify_series(&key.series);
    let age_band = estimate_age_band(&key.serial);

    VehicleRecord {
        region_name: region_name.to_string(),
        office_name: office_name.to_string(),
        category,
        age_band,
        key,
    }
}

pub fn classify_series(series: &str) -> Option<VehicleCategory> {
    let mut chars = series.chars();
    let first = chars.next()?;
    match series.chars().count() {
        1 => Some(VehicleCategory::PrivateOldFormat),
        2 => match first {
            'A'..='D' | 'P'..='S' => Some(VehicleCategory::Private),
            'E'..='H' => Some(VehicleCategory::Commercial),
            'T'..='W' => Some(VehicleCategory::TwoWheeler),
            'X'..='Z' => Some(VehicleCategory::Special),
            _ => None,
        },
        _ => None,
    }
}

/// 粗略估計，各邦編號規則不同
pub fn estimate_age_band(serial: &str) -> Option<AgeBand> {
    let number: u32 = serial.parse().ok()?;
    let band = if number < 1000 {
        AgeBand::Before2005
    } else if number < 5000 {
        AgeBand::From2005To2010
    } else if number < 9000 {
        AgeBand::From2010To2015
    } else {
        AgeBand::After2015
    };
    Some(band)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_standard_registration() {
        let record = VehicleResolver::new().resolve("MH01AB1234").unwrap();

        assert_eq!(record.key.region_code, "MH");
        assert_eq!(record.key.district_code, "01");
        assert_eq!(record.key.series, "AB");
        assert_eq!(record.key.serial, "1234");
        assert_eq!(record.key.office_code, "MH01");
        assert_eq!(record.region_name, "Maharashtra");
        assert_eq!(record.office_name, "Mumbai Central RTO");
        assert_eq!(record.category, Some(VehicleCategory::Private));
        assert_eq!(record.age_band, Some(AgeBand::From2005To2010));
    }

    #[test]
    fn test_unknown_region_degrades_to_sentinels() {
        let record = VehicleResolver::new().resolve("XY99ZZ9999").unwrap();

        assert_eq!(record.region_name, UNKNOWN_STATE);
        assert_eq!(record.office_name, UNKNOWN_RTO);
        assert_eq!(record.category, Some(VehicleCategory::Special));
        assert_eq!(record.age_band, Some(AgeBand::After2015));
    }

    #[test]
    fn test_known_region_unknown_office() {
        let record = VehicleResolver::new().resolve("MH99AB1234").unwrap();
        assert_eq!(record.region_name, "Maharashtra");
        assert_eq!(record.office_name, UNKNOWN_RTO);
    }

    #[test]
    fn test_unparseable_input_is_not_found() {
        let err = VehicleResolver::new().resolve("1234").unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[test]
    fn test_four_digit_serial_prefers_standard_pattern() {
        let key = parse_registration("DL05CD5678").unwrap();
        assert_eq!(key.format, RegistrationFormat::Standard);

        let key = parse_registration("DL05CD56").unwrap();
        assert_eq!(key.format, RegistrationFormat::VariableSerial);

        let key = parse_registration("DL5CD5678").unwrap();
        assert_eq!(key.format, RegistrationFormat::ShortDistrict);
    }

    #[test]
    fn test_single_digit_district_is_zero_padded() {
        let record = VehicleResolver::new().resolve("dl 5 c 12").unwrap();

        assert_eq!(record.key.original, "DL5C12");
        assert_eq!(record.key.district_code, "5");
        assert_eq!(record.key.office_code, "DL05");
        assert_eq!(record.office_name, "Delhi North RTO");
        assert_eq!(record.category, Some(VehicleCategory::PrivateOldFormat));
        assert_eq!(record.age_band, Some(AgeBand::Before2005));
    }

    #[test]
    fn test_office_code_is_region_plus_padded_district() {
        for input in ["KA51MN1", "TN1A1", "UP75ZZ9999", "WB25EF5000"] {
            let key = parse_registration(input).unwrap();
            assert_eq!(
                key.office_code,
                format!("{}{:0>2}", key.region_code, key.district_code)
            );
            // 從輸出再解析一次應得到相同結果
            let again = parse_registration(&key.original).unwrap();
            assert_eq!(again, key);
        }
    }

    #[test]
    fn test_series_classification() {
        assert_eq!(classify_series("A"), Some(VehicleCategory::PrivateOldFormat));
        assert_eq!(classify_series("CD"), Some(VehicleCategory::Private));
        assert_eq!(classify_series("QA"), Some(VehicleCategory::Private));
        assert_eq!(classify_series("FX"), Some(VehicleCategory::Commercial));
        assert_eq!(classify_series("UA"), Some(VehicleCategory::TwoWheeler));
        assert_eq!(classify_series("YB"), Some(VehicleCategory::Special));
        assert_eq!(classify_series("JK"), None);
        assert_eq!(classify_series("NO"), None);
        assert_eq!(classify_series(""), None);
    }

    #[test]
    fn test_age_band_boundaries() {
        assert_eq!(estimate_age_band("999"), Some(AgeBand::Before2005));
        assert_eq!(estimate_age_band("1000"), Some(AgeBand::From2005To2010));
        assert_eq!(estimate_age_band("4999"), Some(AgeBand::From2005To2010));
        assert_eq!(estimate_age_band("5000"), Some(AgeBand::From2010To2015));
        assert_eq!(estimate_age_band("8999"), Some(AgeBand::From2010To2015));
        assert_eq!(estimate_age_band("9000"), Some(AgeBand::After2015));
        assert_eq!(estimate_age_band("abc"), None);
    }

    #[test]
    fn test_record_fields_omit_missing_category() {
        let record = VehicleResolver::new().resolve("MH01JK1234").unwrap();
        let fields = record.to_fields();

        assert_eq!(fields.get("RTO Code"), Some("MH01"));
        assert_eq!(fields.get("Registration Region"), Some("MH-01"));
        assert!(!fields.contains_key("Vehicle Type"));
        assert_eq!(
            fields.get("Estimated Registration Year"),
            Some("2005-2010 (Estimated)")
        );
    }
}
