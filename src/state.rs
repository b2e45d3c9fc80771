use crate::application::query::DEFAULT_DEBOUNCE;
use crate::domain::error::TrqError;
use crate::domain::model::LanguageCapability;
use crate::domain::traits::{ClipboardService, TranslationProvider};
use crate::infrastructure::clipboard::SystemClipboard;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::AggregatorProvider;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Everything query handling needs, shared across concurrent sessions.
///
/// Settings and the capability snapshot sit behind their own locks so a
/// settings change never blocks on an in-flight translation.
#[derive(Clone)]
pub struct PluginState {
    pub config: Arc<RwLock<Config>>,
    pub capability: Arc<RwLock<LanguageCapability>>,
    pub provider: Arc<dyn TranslationProvider>,
    pub clipboard: Arc<dyn ClipboardService>,
    /// Config file settings changes are written back to, when there is one.
    pub persist: Option<PathBuf>,
    pub debounce: Duration,
}

impl PluginState {
    pub fn new(config: Config) -> Result<Self, TrqError> {
        let provider = AggregatorProvider::new(config.engines.clone())?;
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    pub fn with_provider(config: Config, provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            capability: Arc::new(RwLock::new(LanguageCapability::default())),
            provider,
            clipboard: Arc::new(SystemClipboard::new()),
            persist: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_persist_path(mut self, path: PathBuf) -> Self {
        self.persist = Some(path);
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardService>) -> Self {
        self.clipboard = clipboard;
        self
    }
}
