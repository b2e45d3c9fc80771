// Host-facing plugin surface: registration metadata, configuration
// widgets, the per-keystroke query context, and the plugin facade itself.
use crate::application::query;
use crate::application::settings::{self, RefreshOutcome};
use crate::domain::error::TrqError;
use crate::domain::model::{ActionCommand, IconSource, ResultAction, ResultItem};
use crate::state::PluginState;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Launcher prefix that routes input to this plugin.
pub const TRIGGER: &str = "tr ";

/// Registration block hosts read once at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginMetadata {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub license: String,
    pub authors: Vec<String>,
}

impl Default for PluginMetadata {
    fn default() -> Self {
        Self {
            id: "translator".to_string(),
            name: "Translator".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            license: "MIT".to_string(),
            authors: env!("CARGO_PKG_AUTHORS")
                .split(':')
                .filter(|a| !a.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// Configuration UI descriptors, in display order. Data only; rendering
/// belongs to the host toolkit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "widget")]
pub enum ConfigWidget {
    /// Static markdown text.
    Label { text: String },
    /// Fixed-choice selector bound to a settings property.
    Combobox { property: String, items: Vec<String> },
    /// Free-text entry bound to a settings property.
    Lineedit { property: String },
}

/// Icon shared by the plugin and every item it produces.
pub fn plugin_icon() -> IconSource {
    IconSource::Name("accessories-dictionary".to_string())
}

/// One query-bar input plus its liveness signal. The host creates a fresh
/// context per keystroke and cancels the previous token.
#[derive(Debug, Clone)]
pub struct QueryContext {
    query: String,
    live: watch::Receiver<bool>,
}

/// Cancellation handle for one context. Dropping it cancels too, so a host
/// that simply forgets an old query gets the right behaviour.
#[derive(Debug)]
pub struct QueryToken {
    live: watch::Sender<bool>,
}

impl QueryContext {
    pub fn new(query: impl Into<String>) -> (Self, QueryToken) {
        let (tx, rx) = watch::channel(true);
        (
            Self {
                query: query.into(),
                live: rx,
            },
            QueryToken { live: tx },
        )
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Still the newest query?
    pub fn is_valid(&self) -> bool {
        *self.live.borrow()
    }

    /// Resolves once the query is superseded; immediately if it already is.
    pub async fn cancelled(&self) {
        let mut live = self.live.clone();
        loop {
            if !*live.borrow_and_update() {
                return;
            }
            if live.changed().await.is_err() {
                // Sender gone; Drop marked the channel cancelled.
                return;
            }
        }
    }
}

impl QueryToken {
    /// Mark the query as superseded.
    pub fn cancel(&self) {
        self.live.send_replace(false);
    }
}

impl Drop for QueryToken {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The facade a launcher embeds. The `trq` binary is the reference host.
pub struct TranslatorPlugin {
    state: PluginState,
}

impl TranslatorPlugin {
    pub fn new(state: PluginState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &PluginState {
        &self.state
    }

    /// Initial capability fetch. Best effort: after a failure the parser
    /// runs in fallback mode until a later refresh succeeds.
    pub async fn startup(&self) -> RefreshOutcome {
        settings::refresh_capabilities(&self.state).await
    }

    /// Items for one query context; the host calls this per keystroke.
    pub async fn items(&self, ctx: &QueryContext) -> Vec<ResultItem> {
        query::evaluate(&self.state, ctx).await
    }

    pub async fn update_settings(
        &self,
        translator: Option<String>,
        lang: Option<String>,
    ) -> Result<RefreshOutcome, TrqError> {
        settings::update_settings(&self.state, translator, lang).await
    }

    /// Execute a picked action through the clipboard service.
    pub fn run_action(&self, action: &ResultAction) -> Result<(), TrqError> {
        match &action.command {
            ActionCommand::CopyToClipboard(text) => self.state.clipboard.set_text(text),
            ActionCommand::CopyAndPaste(text) => self.state.clipboard.set_text_and_paste(text),
        }
    }

    pub fn metadata(&self) -> PluginMetadata {
        PluginMetadata::default()
    }

    pub fn default_trigger(&self) -> &'static str {
        TRIGGER
    }

    pub fn synopsis(&self) -> &'static str {
        "[[from] to] text"
    }

    pub fn config_widgets(&self) -> Vec<ConfigWidget> {
        vec![
            ConfigWidget::Label {
                text: env!("CARGO_PKG_DESCRIPTION").to_string(),
            },
            ConfigWidget::Combobox {
                property: "translator".to_string(),
                items: self
                    .state
                    .provider
                    .engines()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            ConfigWidget::Lineedit {
                property: "lang".to_string(),
            },
        ]
    }
}
