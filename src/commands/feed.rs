use anyhow::Context;
use nf_core::feed::FeedStatus;
use nf_core::ids::ArticleId;
use nf_core::notification::TapTarget;
use tracing::warn;

use super::print_articles;
use crate::bootstrap::ClientDeps;

/// Initial fetch with one retry through `refresh` when the feed is left in
/// the retryable `Failed` state.
async fn load_feed(deps: &ClientDeps) -> anyhow::Result<()> {
    if let Err(err) = deps.feed.load().await {
        if !deps.feed.status().is_retryable() {
            return Err(err).context("Failed to load articles");
        }
        warn!(error = %err, "Feed load failed, retrying once");
        deps.feed.refresh().await.context("Failed to load articles")?;
    }
    Ok(())
}

pub async fn list(deps: &ClientDeps) -> anyhow::Result<()> {
    load_feed(deps).await?;
    print_articles(&deps.feed.articles(), "No articles yet.");
    Ok(())
}

/// Open the article a notification points at: its place in the feed when
/// it is still there, otherwise fetched directly.
pub async fn open(deps: &ClientDeps, id: &str) -> anyhow::Result<()> {
    load_feed(deps).await?;
    let id = ArticleId::from(id);
    match deps.feed.resolve_tap(&id) {
        TapTarget::ScrollTo(index) => {
            println!("Article #{} in the feed:\n", index + 1);
            let articles = deps.feed.articles();
            print_articles(&articles[index..=index], "");
        }
        TapTarget::Navigate(id) => {
            let article = deps
                .get_article
                .execute(&id)
                .await
                .with_context(|| format!("Failed to fetch article {id}"))?;
            println!("Article is no longer in the feed:\n");
            print_articles(&[article], "");
        }
    }
    Ok(())
}

/// Print the feed, then follow realtime updates until Ctrl-C or until the
/// server goes away.
pub async fn watch(deps: &ClientDeps) -> anyhow::Result<()> {
    let mut status = deps.feed.subscribe();
    load_feed(deps).await?;
    let _ = status.borrow_and_update();
    print_articles(&deps.feed.articles(), "No articles yet.");

    let mut subscription = deps
        .realtime
        .attach(deps.feed.clone())
        .await
        .context("Failed to connect to realtime channel")?;
    println!("\nWatching for updates (Ctrl-C to stop)...");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = subscription.closed() => {
                warn!("Realtime channel closed");
                println!("Connection to server lost; feed is no longer updating.");
                return Ok(());
            }
            changed = status.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = status.borrow_and_update().clone();
                if let FeedStatus::Ready(state) = current {
                    println!("\n--- feed updated ({} articles) ---", state.len());
                    print_articles(state.articles(), "No articles.");
                }
            }
        }
    }

    subscription.detach();
    Ok(())
}
