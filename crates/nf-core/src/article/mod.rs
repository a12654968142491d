//! Article domain: the client projection, the server wire shapes and the
//! admin draft.

mod draft;
mod media;
mod model;
mod payload;

pub use draft::{ArticleDraft, DraftValidationError, MAX_HEADING_WORDS, MAX_TEXT_WORDS};
pub use media::MediaRef;
pub use model::Article;
pub use payload::{ArticlePayload, ArticleRecord, PayloadError};
