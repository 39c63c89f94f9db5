use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional value from its string form, treating a missing
/// field, `null`, and `""` all as `None`.
///
/// Used with `#[serde(default, deserialize_with = "...")]` for optional dates
/// and enumerations that clients often send as empty strings.
pub fn deserialize_empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "deserialize_empty_as_none")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn test_missing_field_is_none() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(p.date, None);
    }

    #[test]
    fn test_null_and_empty_are_none() {
        let p: Payload = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert_eq!(p.date, None);
        let p: Payload = serde_json::from_str(r#"{"date": ""}"#).unwrap();
        assert_eq!(p.date, None);
        let p: Payload = serde_json::from_str(r#"{"date": "  "}"#).unwrap();
        assert_eq!(p.date, None);
    }

    #[test]
    fn test_value_is_parsed() {
        let p: Payload = serde_json::from_str(r#"{"date": "1990-05-17"}"#).unwrap();
        assert_eq!(p.date, NaiveDate::from_ymd_opt(1990, 5, 17));
    }

    #[test]
    fn test_invalid_value_is_error() {
        assert!(serde_json::from_str::<Payload>(r#"{"date": "17/05/1990"}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"date": "1990-13-01"}"#).is_err());
    }
}
