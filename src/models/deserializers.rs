use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts RFC 3339 strings as well as epoch milliseconds (older history blobs)
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {}", e))),
        Value::Number(n) => {
            let ms = n.as_i64().ok_or_else(|| Error::custom("invalid timestamp"))?;
            DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| Error::custom("timestamp out of range"))
        }
        _ => Err(Error::custom("timestamp must be a string or number")),
    }
}

/// Entry ids are opaque, but must not be blank. Numeric ids are kept as their
/// decimal text.
pub fn deserialize_entry_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => return Err(Error::custom("entry id must be a string")),
    };

    if id.trim().is_empty() {
        return Err(Error::custom("entry id cannot be empty"));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use crate::models::SavedEntry;

    #[test]
    fn test_saved_entry_timestamp_rfc3339() {
        let json = r#"{
            "id": "1730540480016",
            "timestamp": "2025-11-02T09:41:20.016Z",
            "qrType": "url",
            "formData": {"url": {"url": "example.com"}},
            "customization": {}
        }"#;

        let entry: SavedEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "1730540480016");
        assert_eq!(entry.created_at, DateTime::from_timestamp_millis(1762076480016).unwrap());
    }

    #[test]
    fn test_saved_entry_timestamp_millis() {
        let json = r#"{
            "id": 42,
            "timestamp": 1762076480016,
            "qrType": "text",
            "formData": {},
            "customization": {}
        }"#;

        let entry: SavedEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "42");
        assert_eq!(entry.created_at, DateTime::from_timestamp_millis(1762076480016).unwrap());
    }

    #[test]
    fn test_saved_entry_rejects_blank_id() {
        let json = r#"{
            "id": "  ",
            "timestamp": 1762076480016,
            "qrType": "text"
        }"#;

        assert!(serde_json::from_str::<SavedEntry>(json).is_err());
    }

    #[test]
    fn test_saved_entry_rejects_bad_timestamp() {
        let json = r#"{
            "id": "a",
            "timestamp": true,
            "qrType": "text"
        }"#;

        let err = serde_json::from_str::<SavedEntry>(json).unwrap_err();
        assert!(err.to_string().contains("timestamp must be a string or number"));
    }
}
