use anyhow::Context;
use nf_core::theme::Theme;

use crate::bootstrap::ClientDeps;

pub async fn get(deps: &ClientDeps) -> anyhow::Result<()> {
    let theme = deps
        .theme
        .initialize()
        .await
        .context("Failed to read theme")?;
    print_theme(theme, true);
    Ok(())
}

pub async fn set(deps: &ClientDeps, id: &str) -> anyhow::Result<()> {
    let theme: Theme = id.parse()?;
    deps.theme.set(theme).await.context("Failed to save theme")?;
    println!("Theme set to {}.", theme.name());
    Ok(())
}

pub async fn list(deps: &ClientDeps) -> anyhow::Result<()> {
    // An unreadable saved theme still lets the list print.
    let current = deps.theme.initialize().await.unwrap_or_default();
    for theme in Theme::ALL {
        print_theme(theme, theme == current);
    }
    Ok(())
}

fn print_theme(theme: Theme, current: bool) {
    let palette = theme.palette();
    println!(
        "{} {:<8} {:<7} background {} text {} primary {} secondary {}",
        if current { "*" } else { " " },
        theme.id(),
        theme.name(),
        palette.background,
        palette.text,
        palette.primary,
        palette.secondary,
    );
}
