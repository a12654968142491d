//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Opaque, server-assigned article identifier.
///
/// Immutable for the article's lifetime; the only key shared between the
/// bookmark set and the feed state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArticleId(String);

impl_id!(ArticleId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_not_blank() {
        let a = ArticleId::generate();
        let b = ArticleId::generate();
        assert_ne!(a, b);
        assert!(!a.is_blank());
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ArticleId::from("abc123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
        let back: ArticleId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn whitespace_id_is_blank() {
        assert!(ArticleId::from("  ").is_blank());
        assert!(ArticleId::from("").is_blank());
    }
}
