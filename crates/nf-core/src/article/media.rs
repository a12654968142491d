use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})")
        .expect("youtube link pattern")
});

/// What an article's media link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRef {
    Image { url: String },
    Video { url: String, embed_url: String },
}

impl MediaRef {
    pub fn classify(url: &str) -> Self {
        match youtube_video_id(url) {
            Some(video_id) => MediaRef::Video {
                url: url.to_string(),
                embed_url: format!("https://www.youtube.com/embed/{video_id}"),
            },
            None => MediaRef::Image {
                url: url.to_string(),
            },
        }
    }

    pub fn url(&self) -> &str {
        match self {
            MediaRef::Image { url } | MediaRef::Video { url, .. } => url,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaRef::Video { .. })
    }
}

pub(crate) fn youtube_video_id(url: &str) -> Option<&str> {
    YOUTUBE_LINK
        .captures(url)
        .and_then(|caps| caps.get(4))
        .map(|m| m.as_str())
}
