//! Lenient deserializers for Google's loosely-typed JSON fields.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    Int(i64),
    Str(String),
}

/// Deserializes a 64-bit integer sent either as a JSON number or as a
/// decimal string. `null` and the empty string become `0`.
pub fn int64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Option::<StringOrInt>::deserialize(deserializer)? {
        None => Ok(0),
        Some(StringOrInt::Int(value)) => Ok(value),
        Some(StringOrInt::Str(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid integer value '{text}'")))
        }
    }
}

/// Like [`int64`], but keeps absence distinguishable from zero.
pub fn opt_int64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<StringOrInt>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrInt::Int(value)) => Ok(Some(value)),
        Some(StringOrInt::Str(text)) if text.trim().is_empty() => Ok(None),
        Some(StringOrInt::Str(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid integer value '{text}'"))),
    }
}

/// Deserializes an error code that may be numeric or textual into its text form.
pub fn code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<StringOrInt>::deserialize(deserializer)? {
        None => String::new(),
        Some(StringOrInt::Int(value)) => value.to_string(),
        Some(StringOrInt::Str(text)) => text,
    })
}

/// Deserializes a string field, treating `null` as empty.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "int64")]
        millis: i64,
        #[serde(default, deserialize_with = "opt_int64")]
        micros: Option<i64>,
        #[serde(default, deserialize_with = "code")]
        code: String,
        #[serde(default, deserialize_with = "string")]
        text: String,
    }

    fn sample(value: serde_json::Value) -> Result<Sample, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_int64_accepts_strings_and_numbers_beyond_32_bits() {
        assert_eq!(sample(json!({"millis": "4434573608845"})).unwrap().millis, 4_434_573_608_845);
        assert_eq!(sample(json!({"millis": 4_434_573_608_845_i64})).unwrap().millis, 4_434_573_608_845);
        assert_eq!(sample(json!({"millis": null})).unwrap().millis, 0);
        assert_eq!(sample(json!({})).unwrap().millis, 0);
    }

    #[test]
    fn test_int64_rejects_garbage_strings() {
        let error = sample(json!({"millis": "yesterday"})).unwrap_err();
        assert!(error.to_string().contains("invalid integer value 'yesterday'"));
    }

    #[test]
    fn test_opt_int64_keeps_absence() {
        assert_eq!(sample(json!({})).unwrap().micros, None);
        assert_eq!(sample(json!({"micros": "990000"})).unwrap().micros, Some(990_000));
        assert_eq!(sample(json!({"micros": ""})).unwrap().micros, None);
    }

    #[test]
    fn test_code_accepts_numbers_and_strings() {
        assert_eq!(sample(json!({"code": 404})).unwrap().code, "404");
        assert_eq!(sample(json!({"code": "invalid_grant"})).unwrap().code, "invalid_grant");
        assert_eq!(sample(json!({})).unwrap().code, "");
    }

    #[test]
    fn test_string_treats_null_as_empty() {
        assert_eq!(sample(json!({"text": null})).unwrap().text, "");
    }
}
