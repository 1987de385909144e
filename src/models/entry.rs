use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::payload::{FormDataMap, PayloadType};
use super::style::StyleOptions;
use crate::formatter::format_form;
use crate::utils::truncate_preview;

/// Length of the payload preview shown for a history entry
pub const SUMMARY_MAX_CHARS: usize = 30;

/// The configuration triple that history deduplicates on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveCandidate {
    #[serde(rename = "qrType")]
    pub payload_type: PayloadType,
    #[serde(rename = "formData", default)]
    pub form_data: FormDataMap,
    #[serde(rename = "customization", default)]
    pub style: StyleOptions,
}

/// One persisted configuration snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntry {
    #[serde(deserialize_with = "super::deserializers::deserialize_entry_id")]
    pub id: String,
    #[serde(
        rename = "timestamp",
        deserialize_with = "super::deserializers::deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "qrType")]
    pub payload_type: PayloadType,
    #[serde(rename = "formData", default)]
    pub form_data: FormDataMap,
    #[serde(rename = "customization", default)]
    pub style: StyleOptions,
}

impl SavedEntry {
    pub fn new(id: String, created_at: DateTime<Utc>, candidate: SaveCandidate) -> Self {
        let SaveCandidate { payload_type, form_data, style } = candidate;
        Self { id, created_at, payload_type, form_data, style }
    }

    /// Value equality on type, every form and style (logo included); id and
    /// timestamp are ignored
    pub fn matches(&self, candidate: &SaveCandidate) -> bool {
        self.payload_type == candidate.payload_type
            && self.form_data == candidate.form_data
            && self.style == candidate.style
    }

    pub fn snapshot(&self) -> SaveCandidate {
        SaveCandidate {
            payload_type: self.payload_type,
            form_data: self.form_data.clone(),
            style: self.style.clone(),
        }
    }

    /// Formatted payload of the entry's active type
    pub fn payload(&self) -> String {
        format_form(self.payload_type, &self.form_data)
    }

    /// Short payload preview, `(empty)` when nothing would be encoded
    pub fn summary(&self) -> String {
        let payload = self.payload();
        if payload.is_empty() {
            return "(empty)".to_string();
        }
        truncate_preview(&payload, SUMMARY_MAX_CHARS)
    }

    pub fn has_logo(&self) -> bool {
        self.style.has_logo()
    }
}
