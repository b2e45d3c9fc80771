use crate::domain::error::TrqError;
use crate::domain::model::{LanguageMap, TranslateRequest};
use async_trait::async_trait;

/// Abstraction over the translation aggregator.
///
/// The HTTP aggregator and the mock used by tests and offline hosts both
/// live behind this trait, so the query flow never knows which one it talks
/// to.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Language map of one engine: source code -> valid destination codes.
    async fn languages(&self, engine: &str) -> Result<LanguageMap, TrqError>;

    /// Translate a single text. Any failure (network, timeout, engine error,
    /// unsupported pair) comes back as an error; the invoker turns it into
    /// a user-visible item instead of propagating it.
    async fn translate(&self, request: &TranslateRequest) -> Result<String, TrqError>;

    /// Discoverable engine identifiers, in configuration-UI order.
    fn engines(&self) -> &[&'static str];
}

/// Host clipboard operations backing the result-item actions.
pub trait ClipboardService: Send + Sync {
    /// Whether the host can synthesise a paste keystroke after copying.
    fn paste_supported(&self) -> bool;

    fn set_text(&self, text: &str) -> Result<(), TrqError>;

    /// Copy, then paste into the focused window.
    fn set_text_and_paste(&self, text: &str) -> Result<(), TrqError>;
}
