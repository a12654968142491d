use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use newsfeed_lib::bootstrap::{init_tracing_subscriber, resolve_config, wire_client};
use newsfeed_lib::commands::{self, article::DraftArgs};

#[derive(Parser)]
#[command(name = "newsfeed", version, about = "News feed server and client")]
struct Cli {
    /// Config file; defaults to ./newsfeed.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the REST + WebSocket backend
    Serve {
        /// Address to bind, overrides server.listen
        #[arg(long)]
        listen: Option<String>,
    },
    /// Show the article feed
    Feed {
        #[command(subcommand)]
        action: FeedAction,
    },
    /// Search articles by heading or text
    Search { query: String },
    /// Manage local bookmarks
    Bookmarks {
        #[command(subcommand)]
        action: BookmarkAction,
    },
    /// Show or change the color theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Create, edit or delete articles
    Article {
        #[command(subcommand)]
        action: ArticleAction,
    },
    /// Relay a push notification through the backend
    Push {
        #[arg(long)]
        token: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
        /// Extra JSON payload
        #[arg(long)]
        data: Option<String>,
    },
}

#[derive(Subcommand)]
enum FeedAction {
    List,
    /// Keep the feed open and print live updates
    Watch,
    /// Show the article a notification refers to
    Open { id: String },
}

#[derive(Subcommand)]
enum BookmarkAction {
    List,
    Toggle { id: String },
    /// Reload bookmarks from disk
    Refresh,
    Clear,
}

#[derive(Subcommand)]
enum ThemeAction {
    Get,
    Set { id: String },
    List,
}

#[derive(Subcommand)]
enum ArticleAction {
    Create(DraftFlags),
    Update {
        id: String,
        #[command(flatten)]
        draft: DraftFlags,
    },
    Delete { id: String },
}

#[derive(Args)]
struct DraftFlags {
    #[arg(long)]
    image_link: String,
    #[arg(long)]
    heading: String,
    #[arg(long)]
    text: String,
    /// RFC 3339 timestamp, e.g. 2024-01-31T12:00:00Z
    #[arg(long)]
    uploaded_at: Option<DateTime<Utc>>,
}

impl From<DraftFlags> for DraftArgs {
    fn from(flags: DraftFlags) -> Self {
        DraftArgs {
            image_link: flags.image_link,
            heading: flags.heading,
            text: flags.text,
            uploaded_at: flags.uploaded_at,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref())?;
    init_tracing_subscriber(Some(&config.client.data_dir))?;
    info!(
        listen = %config.server.listen,
        backend = %config.client.backend_url,
        data_dir = %config.client.data_dir.display(),
        "Configuration resolved"
    );

    if let Command::Serve { listen } = &cli.command {
        return commands::serve::run(&config, listen.as_deref()).await;
    }

    let deps = wire_client(&config)?;
    match cli.command {
        Command::Serve { .. } => Ok(()),
        Command::Feed { action } => match action {
            FeedAction::List => commands::feed::list(&deps).await,
            FeedAction::Watch => commands::feed::watch(&deps).await,
            FeedAction::Open { id } => commands::feed::open(&deps, &id).await,
        },
        Command::Search { query } => commands::search::run(&deps, &query).await,
        Command::Bookmarks { action } => match action {
            BookmarkAction::List => commands::bookmarks::list(&deps).await,
            BookmarkAction::Toggle { id } => commands::bookmarks::toggle(&deps, &id).await,
            BookmarkAction::Refresh => commands::bookmarks::refresh(&deps).await,
            BookmarkAction::Clear => commands::bookmarks::clear(&deps).await,
        },
        Command::Theme { action } => match action {
            ThemeAction::Get => commands::theme::get(&deps).await,
            ThemeAction::Set { id } => commands::theme::set(&deps, &id).await,
            ThemeAction::List => commands::theme::list(&deps).await,
        },
        Command::Article { action } => match action {
            ArticleAction::Create(draft) => commands::article::create(&deps, draft.into()).await,
            ArticleAction::Update { id, draft } => {
                commands::article::update(&deps, &id, draft.into()).await
            }
            ArticleAction::Delete { id } => commands::article::delete(&deps, &id).await,
        },
        Command::Push {
            token,
            title,
            body,
            data,
        } => commands::push::run(&deps, token, title, body, data.as_deref()).await,
    }
}
