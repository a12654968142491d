use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use nf_core::article::ArticleRecord;
use nf_core::ids::ArticleId;
use nf_core::ports::{ArticleRepositoryError, ArticleRepositoryPort};

use crate::db::models::{encode_timestamp, ArticleRow, NewArticleRow};
use crate::db::pool::DbPool;
use crate::db::schema::articles::dsl::*;

pub struct DieselArticleRepository {
    pool: DbPool,
}

impl DieselArticleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run `f` on a pooled connection on the blocking thread pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, ArticleRepositoryError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, ArticleRepositoryError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| ArticleRepositoryError::Storage(e.to_string()))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| ArticleRepositoryError::Storage(e.to_string()))?
    }
}

fn storage(e: diesel::result::Error) -> ArticleRepositoryError {
    ArticleRepositoryError::Storage(e.to_string())
}

fn into_records(rows: Vec<ArticleRow>) -> Result<Vec<ArticleRecord>, ArticleRepositoryError> {
    rows.into_iter().map(ArticleRecord::try_from).collect()
}

/// `LIKE` pattern matching `term` literally anywhere in the column.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ArticleRepositoryPort for DieselArticleRepository {
    async fn list(&self) -> Result<Vec<ArticleRecord>, ArticleRepositoryError> {
        self.with_conn(|conn| {
            let rows = articles
                .order((uploaded_at.desc(), seq.desc()))
                .select(ArticleRow::as_select())
                .load(conn)
                .map_err(storage)?;
            into_records(rows)
        })
        .await
    }

    async fn search(&self, term: &str) -> Result<Vec<ArticleRecord>, ArticleRepositoryError> {
        // LIKE folds ASCII case only; compare lower-cased text as well.
        let pattern = contains_pattern(&term.to_lowercase());
        self.with_conn(move |conn| {
            let rows = articles
                .filter(
                    lower(heading)
                        .like(pattern.clone())
                        .escape('\\')
                        .or(lower(body).like(pattern).escape('\\')),
                )
                .order(seq.asc())
                .select(ArticleRow::as_select())
                .load(conn)
                .map_err(storage)?;
            into_records(rows)
        })
        .await
    }

    async fn find_by_id(
        &self,
        article_id: &ArticleId,
    ) -> Result<Option<ArticleRecord>, ArticleRepositoryError> {
        let key = article_id.to_string();
        self.with_conn(move |conn| {
            articles
                .filter(id.eq(key.as_str()))
                .select(ArticleRow::as_select())
                .first(conn)
                .optional()
                .map_err(storage)?
                .map(ArticleRecord::try_from)
                .transpose()
        })
        .await
    }

    async fn insert(&self, record: ArticleRecord) -> Result<ArticleRecord, ArticleRepositoryError> {
        self.with_conn(move |conn| {
            let row = NewArticleRow::from(&record);
            let stored = diesel::insert_into(articles)
                .values(&row)
                .on_conflict(id)
                .do_update()
                .set((
                    image_link.eq(row.image_link),
                    heading.eq(row.heading),
                    body.eq(row.body),
                    uploaded_at.eq(row.uploaded_at.as_str()),
                ))
                .returning(ArticleRow::as_returning())
                .get_result(conn)
                .map_err(storage)?;
            ArticleRecord::try_from(stored)
        })
        .await
    }

    async fn update(&self, record: ArticleRecord) -> Result<ArticleRecord, ArticleRepositoryError> {
        self.with_conn(move |conn| {
            let stored = diesel::update(articles.filter(id.eq(record.id.as_str())))
                .set((
                    image_link.eq(record.image_link.as_str()),
                    heading.eq(record.heading.as_str()),
                    body.eq(record.text.as_str()),
                    uploaded_at.eq(encode_timestamp(&record.uploaded_at)),
                ))
                .returning(ArticleRow::as_returning())
                .get_result(conn)
                .optional()
                .map_err(storage)?
                .ok_or(ArticleRepositoryError::NotFound)?;
            ArticleRecord::try_from(stored)
        })
        .await
    }

    async fn delete(&self, article_id: &ArticleId) -> Result<bool, ArticleRepositoryError> {
        let key = article_id.to_string();
        self.with_conn(move |conn| {
            let removed = diesel::delete(articles.filter(id.eq(key.as_str())))
                .execute(conn)
                .map_err(storage)?;
            Ok(removed > 0)
        })
        .await
    }
}

diesel::define_sql_function!(fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("cat"), "%cat%");
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
