//! NewsFeed infrastructure adapters
//!
//! Implementations of the `nf-core` ports: local key-value files, SQLite
//! (diesel), the backend HTTP API, the realtime WebSocket channel and the
//! Expo push service.

pub mod config;
pub mod db;
pub mod fs;
pub mod http;
pub mod push;
pub mod realtime;
pub mod time;

pub use config::load_config;
pub use db::{init_db_pool, DbPool, DieselArticleRepository};
pub use fs::{FileBookmarkStore, FileKvStore, FileThemeStore};
pub use http::HttpArticleApi;
pub use push::ExpoPushSender;
pub use realtime::WsRealtimeChannel;
pub use time::SystemClock;
