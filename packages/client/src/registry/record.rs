//! Certificate record as served by the registry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A certificate held by one person, as the registry reports it.
///
/// Field names follow the registry's wire format (`nombre`, `apellido`,
/// `numeroDeDocumento`, `tipo`, `createdAt`, `fechaVencimiento`). The record
/// is read-only here: once fetched it lives in session state until the next
/// reset or re-query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Holder's given name.
    #[serde(rename = "nombre")]
    pub given_name: String,

    /// Holder's family name.
    #[serde(rename = "apellido")]
    pub family_name: String,

    /// National identity document number; echoes the queried identifier.
    #[serde(rename = "numeroDeDocumento")]
    pub document_number: String,

    /// Certification programs completed, in registry order.
    #[serde(rename = "tipo")]
    pub certificate_types: Vec<String>,

    /// Issue date.
    #[serde(rename = "createdAt", with = "wire_date")]
    pub issued_at: NaiveDate,

    /// Expiry date.
    #[serde(rename = "fechaVencimiento", with = "wire_date")]
    pub expires_at: NaiveDate,
}

impl Certificate {
    /// Given and family name concatenated for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// Certificate types joined for display.
    #[must_use]
    pub fn joined_types(&self) -> String {
        self.certificate_types.join(", ")
    }
}

/// Wire format for the registry's date fields.
///
/// The registry emits either a plain `YYYY-MM-DD` date or a full RFC 3339
/// timestamp for the same field; both forms map to the calendar date.
pub(crate) mod wire_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|timestamp| timestamp.date_naive())
            .map_err(|_| de::Error::custom(format!("unrecognized registry date `{raw}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> &'static str {
        r#"{
            "nombre": "Ana",
            "apellido": "Gómez",
            "numeroDeDocumento": "123",
            "tipo": ["BPM"],
            "createdAt": "2024-01-15",
            "fechaVencimiento": "2025-01-15"
        }"#
    }

    #[test]
    fn parses_registry_response() {
        let certificate: Certificate = serde_json::from_str(sample()).expect("valid record");
        assert_eq!(certificate.given_name, "Ana");
        assert_eq!(certificate.family_name, "Gómez");
        assert_eq!(certificate.document_number, "123");
        assert_eq!(certificate.certificate_types, vec!["BPM".to_string()]);
        assert_eq!(
            certificate.issued_at,
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
        );
        assert_eq!(
            certificate.expires_at,
            NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
        );
    }

    #[test]
    fn full_timestamps_parse_to_the_same_dates() {
        let body = r#"{
            "nombre": "Ana",
            "apellido": "Gómez",
            "numeroDeDocumento": "123",
            "tipo": ["BPM"],
            "createdAt": "2024-01-15T10:30:00.000Z",
            "fechaVencimiento": "2025-01-15T10:30:00.000Z"
        }"#;
        let certificate: Certificate = serde_json::from_str(body).expect("valid record");
        assert_eq!(
            certificate.issued_at,
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
        );
        assert_eq!(
            certificate.expires_at,
            NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
        );
    }

    #[test]
    fn unrecognized_date_is_an_error() {
        let body = sample().replace("2024-01-15", "el quince de enero");
        assert!(serde_json::from_str::<Certificate>(&body).is_err());
    }

    #[test]
    fn display_helpers_concatenate_and_join() {
        let mut certificate: Certificate = serde_json::from_str(sample()).expect("valid record");
        assert_eq!(certificate.full_name(), "Ana Gómez");
        assert_eq!(certificate.joined_types(), "BPM");

        certificate
            .certificate_types
            .push("Manipulación de Alimentos".to_string());
        assert_eq!(certificate.joined_types(), "BPM, Manipulación de Alimentos");
    }

    #[test]
    fn missing_fields_fail_to_parse() {
        let body = r#"{"nombre": "Ana"}"#;
        assert!(serde_json::from_str::<Certificate>(body).is_err());
    }
}
