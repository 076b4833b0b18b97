//! Wire types shared by the HTTP API and the client.
//!
//! Request bodies use camelCase keys; stored records keep the snake_case column
//! names and report `is_edited` as `0`/`1`.

use crate::entities::translation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored translation as returned by `GET /history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Row id
    pub id: i64,
    /// Original Korean input
    pub korean_text: String,
    /// Machine translation
    pub english_text: String,
    /// User edit, when it differs from the machine translation
    pub edited_english_text: Option<String>,
    /// `1` when `edited_english_text` is set, `0` otherwise
    pub is_edited: u8,
    /// Insert time
    pub created_at: DateTime<Utc>,
    /// Same as `created_at`
    pub updated_at: DateTime<Utc>,
}

impl TranslationRecord {
    /// The text a user would copy: the edit when present, else the machine translation.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.edited_english_text
            .as_deref()
            .unwrap_or(&self.english_text)
    }

    /// Whether the record carries a user edit
    #[must_use]
    pub const fn is_edited(&self) -> bool {
        self.is_edited != 0
    }
}

impl From<translation::Model> for TranslationRecord {
    fn from(model: translation::Model) -> Self {
        Self {
            id: model.id,
            korean_text: model.korean_text,
            english_text: model.english_text,
            edited_english_text: model.edited_english_text,
            is_edited: u8::from(model.is_edited),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Body of `POST /translate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Korean text to translate; absent is treated like empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub korean_text: Option<String>,
}

/// Successful response of `POST /translate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    /// Trimmed English translation
    pub english_text: String,
}

/// Body of `POST /history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveHistoryRequest {
    /// Original Korean input
    pub korean_text: String,
    /// Machine translation
    pub english_text: String,
    /// User edit of the machine translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_english_text: Option<String>,
}

/// Successful response of `POST /history`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveHistoryResponse {
    /// Id of the inserted row
    pub id: i64,
    /// Always `true`
    pub success: bool,
}

/// Response of `GET /history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPage {
    /// Up to one page of records, newest first
    pub translations: Vec<TranslationRecord>,
}

/// Response of `DELETE /history`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`
    pub success: bool,
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Message safe to show to the user
    pub error: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use serde_json::json;

    fn sample_model(edited: Option<&str>) -> translation::Model {
        let now = Utc::now();
        translation::Model {
            id: 7,
            korean_text: "안녕".to_string(),
            english_text: "Hello".to_string(),
            edited_english_text: edited.map(ToString::to_string),
            is_edited: edited.is_some(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_record_serializes_is_edited_as_integer() {
        let record = TranslationRecord::from(sample_model(None));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["is_edited"], json!(0));
        assert_eq!(value["edited_english_text"], json!(null));
        assert_eq!(value["korean_text"], json!("안녕"));

        let record = TranslationRecord::from(sample_model(Some("Hi there")));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["is_edited"], json!(1));
    }

    #[test]
    fn test_display_text_prefers_edit() {
        assert_eq!(
            TranslationRecord::from(sample_model(None)).display_text(),
            "Hello"
        );
        assert_eq!(
            TranslationRecord::from(sample_model(Some("Hi there"))).display_text(),
            "Hi there"
        );
    }

    #[test]
    fn test_request_bodies_use_camel_case() {
        let request: SaveHistoryRequest = serde_json::from_value(json!({
            "koreanText": "안녕",
            "englishText": "Hello",
            "editedEnglishText": null
        }))
        .unwrap();
        assert_eq!(request.edited_english_text, None);

        let request: TranslateRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.korean_text, None);

        let response = serde_json::to_value(TranslateResponse {
            english_text: "Hello".to_string(),
        })
        .unwrap();
        assert_eq!(response, json!({ "englishText": "Hello" }));
    }
}
