use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MediaRef;
use crate::ids::ArticleId;

/// Client-side projection of one published feed item.
///
/// This is also the persisted bookmark encoding, so the field names are
/// part of the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub image_uri: String,
    pub heading: String,
    pub text: String,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn media(&self) -> MediaRef {
        MediaRef::classify(&self.image_uri)
    }
}
