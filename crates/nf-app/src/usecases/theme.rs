//! Theme preference with subscribe/notify and durable storage.

use std::sync::Arc;

use nf_core::ports::{ThemeStoreError, ThemeStorePort};
use nf_core::theme::Theme;
use tokio::sync::{watch, Mutex};
use tracing::{info, info_span, warn, Instrument};

pub struct ThemePreferences {
    store: Arc<dyn ThemeStorePort>,
    current: watch::Sender<Theme>,
    write_lock: Mutex<()>,
}

impl ThemePreferences {
    pub fn new(store: Arc<dyn ThemeStorePort>) -> Self {
        let (current, _) = watch::channel(Theme::default());
        Self {
            store,
            current,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the saved theme; keeps the default when none was saved.
    pub async fn initialize(&self) -> Result<Theme, ThemeStoreError> {
        let span = info_span!("usecase.theme.initialize");
        async {
            match self.store.load().await {
                Ok(Some(theme)) => {
                    self.current.send_replace(theme);
                    info!(theme = %theme, "Theme loaded");
                    Ok(theme)
                }
                Ok(None) => Ok(self.current()),
                Err(err) => {
                    warn!(error = %err, "Failed to load theme; using current");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }

    pub fn current(&self) -> Theme {
        *self.current.borrow()
    }

    /// Switch theme in memory, then persist it.
    pub async fn set(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        let span = info_span!("usecase.theme.set", theme = %theme);
        async {
            self.current.send_replace(theme);
            let _guard = self.write_lock.lock().await;
            let latest = self.current();
            self.store.save(latest).await.inspect_err(|err| {
                warn!(error = %err, "Theme change kept in memory but not persisted");
            })
        }
        .instrument(span)
        .await
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.current.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct MockThemeStore {
        saved: StdMutex<Option<Theme>>,
        fail: bool,
    }

    #[async_trait]
    impl ThemeStorePort for MockThemeStore {
        async fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
            if self.fail {
                return Err(ThemeStoreError::Corrupt("neon".into()));
            }
            Ok(*self.saved.lock().unwrap())
        }

        async fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
            if self.fail {
                return Err(ThemeStoreError::Unavailable("read-only".into()));
            }
            *self.saved.lock().unwrap() = Some(theme);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_defaults_to_light() {
        let prefs = ThemePreferences::new(Arc::new(MockThemeStore::default()));

        assert_eq!(prefs.initialize().await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn test_set_persists_and_notifies() {
        let store = Arc::new(MockThemeStore::default());
        let prefs = ThemePreferences::new(store.clone());
        let mut rx = prefs.subscribe();

        prefs.set(Theme::Ocean).await.unwrap();

        assert_eq!(*store.saved.lock().unwrap(), Some(Theme::Ocean));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Theme::Ocean);

        let reloaded = ThemePreferences::new(store);
        assert_eq!(reloaded.initialize().await.unwrap(), Theme::Ocean);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_selection() {
        let prefs = ThemePreferences::new(Arc::new(MockThemeStore {
            fail: true,
            ..Default::default()
        }));

        assert!(prefs.set(Theme::Dark).await.is_err());
        assert_eq!(prefs.current(), Theme::Dark);
        assert!(prefs.initialize().await.is_err());
        assert_eq!(prefs.current(), Theme::Dark);
    }
}
