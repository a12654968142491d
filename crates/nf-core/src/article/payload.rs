use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Article;
use crate::ids::ArticleId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("article payload has an empty `_id`")]
    MissingId,
}

/// Server-shaped article as carried by REST responses and realtime events.
///
/// Unknown fields (such as `likes`) are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    #[serde(rename = "_id")]
    pub id: String,
    pub image_link: String,
    pub heading: String,
    pub text: String,
    pub uploaded_at: DateTime<Utc>,
}

impl TryFrom<ArticlePayload> for Article {
    type Error = PayloadError;

    /// Field renames only; the one semantic check is a non-blank id.
    fn try_from(payload: ArticlePayload) -> Result<Self, Self::Error> {
        let id = ArticleId::from(payload.id);
        if id.is_blank() {
            return Err(PayloadError::MissingId);
        }
        Ok(Article {
            id,
            image_uri: payload.image_link,
            heading: payload.heading,
            text: payload.text,
            updated_at: payload.uploaded_at,
        })
    }
}

/// Canonical stored article on the server side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    #[serde(rename = "_id")]
    pub id: ArticleId,
    pub image_link: String,
    pub heading: String,
    pub text: String,
    #[serde(default)]
    pub likes: i64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&ArticleRecord> for ArticlePayload {
    fn from(record: &ArticleRecord) -> Self {
        Self {
            id: record.id.to_string(),
            image_link: record.image_link.clone(),
            heading: record.heading.clone(),
            text: record.text.clone(),
            uploaded_at: record.uploaded_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_json() -> &'static str {
        r#"{
            "_id": "65a1",
            "imageLink": "https://cdn.example.com/a.png",
            "heading": "Heading",
            "text": "Body",
            "likes": 3,
            "uploadedAt": "2024-12-15T12:44:00.000Z",
            "__v": 0
        }"#
    }

    #[test]
    fn payload_translates_to_client_shape() {
        let payload: ArticlePayload = serde_json::from_str(sample_json()).unwrap();
        let article = Article::try_from(payload).unwrap();

        assert_eq!(article.id, ArticleId::from("65a1"));
        assert_eq!(article.image_uri, "https://cdn.example.com/a.png");
        assert_eq!(article.heading, "Heading");
        assert_eq!(article.text, "Body");
        assert_eq!(
            article.updated_at,
            Utc.with_ymd_and_hms(2024, 12, 15, 12, 44, 0).unwrap()
        );
    }

    #[test]
    fn blank_id_is_rejected() {
        let payload = ArticlePayload {
            id: " ".into(),
            image_link: String::new(),
            heading: "h".into(),
            text: "t".into(),
            uploaded_at: Utc::now(),
        };
        assert_eq!(Article::try_from(payload), Err(PayloadError::MissingId));
    }

    #[test]
    fn missing_heading_fails_to_decode() {
        let json = r#"{"_id":"1","imageLink":"x","text":"t","uploadedAt":"2024-12-15T12:44:00Z"}"#;
        assert!(serde_json::from_str::<ArticlePayload>(json).is_err());
    }

    #[test]
    fn record_serializes_server_field_names() {
        let record = ArticleRecord {
            id: ArticleId::from("abc"),
            image_link: "https://x/y.png".into(),
            heading: "h".into(),
            text: "t".into(),
            likes: 0,
            uploaded_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["_id"], "abc");
        assert_eq!(value["imageLink"], "https://x/y.png");
        assert!(value.get("uploadedAt").is_some());
        assert_eq!(value["likes"], 0);
    }
}
