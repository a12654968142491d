use async_trait::async_trait;
use nf_core::ports::{ThemeStoreError, ThemeStorePort};
use nf_core::theme::Theme;

use super::kv_store::{FileKvStore, KvError};

pub const THEME_KEY: &str = "@theme";

/// Theme stored as its id string.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    kv: FileKvStore,
}

impl FileThemeStore {
    pub fn new(kv: FileKvStore) -> Self {
        Self { kv }
    }
}

fn map_err(err: KvError) -> ThemeStoreError {
    match err {
        KvError::Io { .. } => ThemeStoreError::Unavailable(err.to_string()),
        KvError::Serde { .. } => ThemeStoreError::Corrupt(err.to_string()),
    }
}

#[async_trait]
impl ThemeStorePort for FileThemeStore {
    async fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        let Some(id) = self.kv.get::<String>(THEME_KEY).await.map_err(map_err)? else {
            return Ok(None);
        };
        id.parse::<Theme>()
            .map(Some)
            .map_err(|e| ThemeStoreError::Corrupt(e.to_string()))
    }

    async fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        self.kv.set(THEME_KEY, theme.id()).await.map_err(map_err)
    }
}
