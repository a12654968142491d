use tracing::warn;

use super::print_articles;
use crate::bootstrap::ClientDeps;

/// Transport failures show as an empty result, as the search screen does.
pub async fn run(deps: &ClientDeps, query: &str) -> anyhow::Result<()> {
    let results = match deps.search.execute(query).await {
        Ok(results) => results,
        Err(err) => {
            warn!(error = %err, "Search failed");
            Vec::new()
        }
    };
    print_articles(&results, "No results found.");
    Ok(())
}
