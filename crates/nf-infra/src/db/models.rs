use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;
use nf_core::article::ArticleRecord;
use nf_core::ids::ArticleId;
use nf_core::ports::ArticleRepositoryError;

use crate::db::schema::articles;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = articles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArticleRow {
    pub seq: i32,
    pub id: String,
    pub image_link: String,
    pub heading: String,
    pub body: String,
    pub likes: i64,
    pub uploaded_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = articles)]
pub struct NewArticleRow<'a> {
    pub id: &'a str,
    pub image_link: &'a str,
    pub heading: &'a str,
    pub body: &'a str,
    pub likes: i64,
    pub uploaded_at: String,
}

/// Fixed-width UTC timestamps so text ordering matches time ordering.
pub fn encode_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<'a> From<&'a ArticleRecord> for NewArticleRow<'a> {
    fn from(record: &'a ArticleRecord) -> Self {
        Self {
            id: record.id.as_str(),
            image_link: &record.image_link,
            heading: &record.heading,
            body: &record.text,
            likes: record.likes,
            uploaded_at: encode_timestamp(&record.uploaded_at),
        }
    }
}

impl TryFrom<ArticleRow> for ArticleRecord {
    type Error = ArticleRepositoryError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let uploaded_at = DateTime::parse_from_rfc3339(&row.uploaded_at)
            .map_err(|e| {
                ArticleRepositoryError::Storage(format!(
                    "article {} has bad uploaded_at `{}`: {e}",
                    row.id, row.uploaded_at
                ))
            })?
            .with_timezone(&Utc);
        Ok(ArticleRecord {
            id: ArticleId::from(row.id),
            image_link: row.image_link,
            heading: row.heading,
            text: row.body,
            likes: row.likes,
            uploaded_at,
        })
    }
}
