mod app_data_dir;
mod bookmark_store;
mod kv_store;
mod theme_store;

pub use app_data_dir::{app_data_dir, log_dir};
pub use bookmark_store::{FileBookmarkStore, BOOKMARKS_KEY};
pub use kv_store::{FileKvStore, KvError};
pub use theme_store::{FileThemeStore, THEME_KEY};
