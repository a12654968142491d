use anyhow::Context;
use nf_core::ids::ArticleId;

use super::print_articles;
use crate::bootstrap::ClientDeps;

pub async fn list(deps: &ClientDeps) -> anyhow::Result<()> {
    deps.bookmarks
        .initialize()
        .await
        .context("Failed to read bookmarks")?;
    print_articles(&deps.bookmarks.bookmarks(), "No bookmarks yet.");
    Ok(())
}

/// Bookmark the article as the server has it now, or remove the existing
/// bookmark. Removing does not need the server.
pub async fn toggle(deps: &ClientDeps, id: &str) -> anyhow::Result<()> {
    deps.bookmarks
        .initialize()
        .await
        .context("Failed to read bookmarks")?;
    let id = ArticleId::from(id);

    let article = match deps.bookmarks.bookmarks().into_iter().find(|a| a.id == id) {
        Some(snapshot) => snapshot,
        None => deps
            .get_article
            .execute(&id)
            .await
            .with_context(|| format!("Failed to fetch article {id}"))?,
    };

    let mut notices = deps.bookmarks.subscribe_notices();
    let outcome = deps.bookmarks.toggle_bookmark(article).await;
    if let Ok(notice) = notices.try_recv() {
        println!("{}: {} ({})", notice.title, notice.message, notice.article_id);
    }
    outcome
        .persisted
        .context("Bookmark changed but could not be saved")?;
    Ok(())
}

pub async fn refresh(deps: &ClientDeps) -> anyhow::Result<()> {
    let count = deps
        .bookmarks
        .refresh_bookmarks()
        .await
        .context("Failed to reload bookmarks")?;
    println!("{count} bookmark(s) loaded.");
    Ok(())
}

pub async fn clear(deps: &ClientDeps) -> anyhow::Result<()> {
    deps.bookmarks
        .initialize()
        .await
        .context("Failed to read bookmarks")?;
    deps.bookmarks
        .clear()
        .await
        .context("Failed to clear bookmarks")?;
    println!("Bookmarks cleared.");
    Ok(())
}
