use async_trait::async_trait;

use crate::ports::errors::ThemeStoreError;
use crate::theme::Theme;

#[async_trait]
pub trait ThemeStorePort: Send + Sync {
    async fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;
    async fn save(&self, theme: Theme) -> Result<(), ThemeStoreError>;
}
