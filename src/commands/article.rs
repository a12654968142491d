use anyhow::Context;
use chrono::{DateTime, Utc};
use nf_core::article::ArticleDraft;
use nf_core::ids::ArticleId;

use super::print_articles;
use crate::bootstrap::ClientDeps;

pub struct DraftArgs {
    pub image_link: String,
    pub heading: String,
    pub text: String,
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl From<DraftArgs> for ArticleDraft {
    fn from(args: DraftArgs) -> Self {
        let mut draft = ArticleDraft::new(args.image_link, args.heading, args.text);
        draft.uploaded_at = args.uploaded_at;
        draft
    }
}

pub async fn create(deps: &ClientDeps, args: DraftArgs) -> anyhow::Result<()> {
    let created = deps
        .admin
        .create(args.into())
        .await
        .context("Failed to create article")?;
    println!("Article created.\n");
    print_articles(&[created], "");
    Ok(())
}

pub async fn update(deps: &ClientDeps, id: &str, args: DraftArgs) -> anyhow::Result<()> {
    let updated = deps
        .admin
        .update(&ArticleId::from(id), args.into())
        .await
        .context("Failed to update article")?;
    println!("Article updated.\n");
    print_articles(&[updated], "");
    Ok(())
}

pub async fn delete(deps: &ClientDeps, id: &str) -> anyhow::Result<()> {
    deps.admin
        .delete(&ArticleId::from(id))
        .await
        .context("Failed to delete article")?;
    println!("Article deleted: {id}");
    Ok(())
}
