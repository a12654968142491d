use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::media::youtube_video_id;

pub const MAX_HEADING_WORDS: usize = 10;
pub const MAX_TEXT_WORDS: usize = 80;

static IMAGE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://.*\.(jpeg|jpg|gif|png|webp|svg)$").expect("image link pattern")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    #[error("Image URL or YouTube URL is required.")]
    MissingImageLink,

    #[error("Please enter a valid image URL or YouTube URL.")]
    InvalidImageLink,

    #[error("Heading is required.")]
    MissingHeading,

    #[error("Heading cannot exceed 10 words (got {0}).")]
    HeadingTooLong(usize),

    #[error("Text is required.")]
    MissingText,

    #[error("Text cannot exceed 80 words (got {0}).")]
    TextTooLong(usize),
}

/// Body of article create / update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub image_link: String,
    pub heading: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl ArticleDraft {
    pub fn new(
        image_link: impl Into<String>,
        heading: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            image_link: image_link.into(),
            heading: heading.into(),
            text: text.into(),
            uploaded_at: None,
        }
    }

    /// Trim every text field.
    pub fn normalized(self) -> Self {
        Self {
            image_link: self.image_link.trim().to_string(),
            heading: self.heading.trim().to_string(),
            text: self.text.trim().to_string(),
            uploaded_at: self.uploaded_at,
        }
    }

    /// Checks the draft as-is; call [`ArticleDraft::normalized`] first.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.image_link.is_empty() {
            return Err(DraftValidationError::MissingImageLink);
        }
        if !IMAGE_LINK.is_match(&self.image_link) && youtube_video_id(&self.image_link).is_none()
        {
            return Err(DraftValidationError::InvalidImageLink);
        }

        let heading_words = word_count(&self.heading);
        if heading_words == 0 {
            return Err(DraftValidationError::MissingHeading);
        }
        if heading_words > MAX_HEADING_WORDS {
            return Err(DraftValidationError::HeadingTooLong(heading_words));
        }

        let text_words = word_count(&self.text);
        if text_words == 0 {
            return Err(DraftValidationError::MissingText);
        }
        if text_words > MAX_TEXT_WORDS {
            return Err(DraftValidationError::TextTooLong(text_words));
        }

        Ok(())
    }
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ArticleDraft {
        ArticleDraft::new(
            "https://cdn.example.com/cat.JPG",
            "Cats take over the internet",
            "A short body.",
        )
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn youtube_link_is_accepted() {
        let mut draft = valid();
        draft.image_link = "https://youtu.be/dQw4w9WgXcQ".into();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn non_image_link_is_rejected() {
        let mut draft = valid();
        draft.image_link = "https://example.com/page.html".into();
        assert_eq!(draft.validate(), Err(DraftValidationError::InvalidImageLink));
    }

    #[test]
    fn normalization_trims_before_validation() {
        let draft = ArticleDraft::new("  https://x.io/a.png ", "  ", "text").normalized();
        assert_eq!(draft.image_link, "https://x.io/a.png");
        assert_eq!(draft.validate(), Err(DraftValidationError::MissingHeading));
    }

    #[test]
    fn word_limits_are_enforced() {
        let mut draft = valid();
        draft.heading = "one two three four five six seven eight nine ten eleven".into();
        assert_eq!(draft.validate(), Err(DraftValidationError::HeadingTooLong(11)));

        let mut draft = valid();
        draft.text = vec!["word"; 81].join(" ");
        assert_eq!(draft.validate(), Err(DraftValidationError::TextTooLong(81)));

        let mut draft = valid();
        draft.text = vec!["word"; 80].join(" ");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn uploaded_at_is_optional_on_the_wire() {
        let draft: ArticleDraft =
            serde_json::from_str(r#"{"imageLink":"a","heading":"b","text":"c"}"#).unwrap();
        assert_eq!(draft.uploaded_at, None);
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("uploadedAt").is_none());
    }
}
