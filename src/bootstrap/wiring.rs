//! Dependency assembly. The only place that knows both the adapters in
//! `nf-infra` and the use cases in `nf-app`; no decisions are made here.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use nf_app::{
    ArticleService, BookmarkManager, FeedController, GetArticle, ManageArticles,
    RealtimeSyncClient, SearchArticles, SendPushNotification, ThemePreferences,
};
use nf_core::config::AppConfig;
use nf_core::ports::{ArticleApiPort, NotificationPort};
use nf_infra::{
    init_db_pool, DieselArticleRepository, ExpoPushSender, FileBookmarkStore, FileKvStore,
    FileThemeStore, HttpArticleApi, SystemClock, WsRealtimeChannel,
};
use nf_server::{AppState, EventHub};

use crate::notifier::ConsoleNotifier;

const PUSH_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything a client command may need. Constructing it performs no I/O.
pub struct ClientDeps {
    pub api: Arc<dyn ArticleApiPort>,
    pub feed: Arc<FeedController>,
    pub realtime: RealtimeSyncClient,
    pub bookmarks: BookmarkManager,
    pub theme: ThemePreferences,
    pub search: SearchArticles,
    pub get_article: GetArticle,
    pub admin: ManageArticles,
}

pub fn wire_client(config: &AppConfig) -> anyhow::Result<ClientDeps> {
    let timeout = match config.client.http_timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };
    let api: Arc<dyn ArticleApiPort> = Arc::new(
        HttpArticleApi::new(&config.client.backend_url, timeout)
            .context("Failed to build backend client")?,
    );

    let kv = FileKvStore::new(&config.client.data_dir);
    let channel = WsRealtimeChannel::from_backend_url(
        &config.client.backend_url,
        config.client.reconnect,
    );
    let notifier: Arc<dyn NotificationPort> = Arc::new(ConsoleNotifier);

    Ok(ClientDeps {
        feed: Arc::new(FeedController::new(api.clone())),
        realtime: RealtimeSyncClient::new(Arc::new(channel), notifier),
        bookmarks: BookmarkManager::new(Arc::new(FileBookmarkStore::new(kv.clone()))),
        theme: ThemePreferences::new(Arc::new(FileThemeStore::new(kv))),
        search: SearchArticles::new(api.clone()),
        get_article: GetArticle::new(api.clone()),
        admin: ManageArticles::new(api.clone()),
        api,
    })
}

/// Open the database (running migrations) and assemble the handler state.
pub fn wire_server(config: &AppConfig) -> anyhow::Result<AppState> {
    let db_path = &config.server.database_path;
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create database directory {}", parent.display()))?;
    }
    let db_url = db_path
        .to_str()
        .with_context(|| format!("Database path is not valid UTF-8: {}", db_path.display()))?;
    let pool = init_db_pool(db_url)?;

    let http = reqwest::Client::builder()
        .timeout(PUSH_TIMEOUT)
        .build()
        .context("Failed to build push client")?;

    let hub = EventHub::new();
    let articles = ArticleService::new(
        Arc::new(DieselArticleRepository::new(pool)),
        Arc::new(hub.clone()),
        Arc::new(SystemClock),
    );
    let push = SendPushNotification::new(Arc::new(ExpoPushSender::new(
        http,
        config.server.expo_push_url.clone(),
    )));

    Ok(AppState {
        articles: Arc::new(articles),
        push: Arc::new(push),
        hub,
    })
}
