// Deterministic provider for tests and offline hosts.
use crate::domain::error::TrqError;
use crate::domain::model::{LanguageMap, TranslateRequest};
use crate::domain::traits::TranslationProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// How the mock answers translation calls.
#[derive(Debug, Clone)]
pub enum MockMode {
    /// `hello` -> `hello_fr`
    Suffix,
    /// Exact `(text, target)` lookups; misses fall back to `Suffix`.
    Mappings(HashMap<(String, String), String>),
    /// Every call fails with this message.
    Error(String),
}

pub struct MockProvider {
    mode: MockMode,
    languages: Result<LanguageMap, String>,
    delay: Duration,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            languages: Ok(default_map()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_languages(mut self, map: LanguageMap) -> Self {
        self.languages = Ok(map);
        self
    }

    /// Make the language listing fail, as a dead endpoint would.
    pub fn without_languages(mut self, reason: &str) -> Self {
        self.languages = Err(reason.to_string());
        self
    }

    /// Simulated network latency applied to every translate call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of translate calls made so far.
    pub fn translate_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn default_map() -> LanguageMap {
    let codes = ["en", "fr", "de", "es"];
    let targets: Vec<String> = codes.iter().map(|s| s.to_string()).collect();
    let mut map = LanguageMap::new();
    map.insert("auto".to_string(), targets.clone());
    for code in codes {
        map.insert(code.to_string(), targets.clone());
    }
    map
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn languages(&self, _engine: &str) -> Result<LanguageMap, TrqError> {
        match &self.languages {
            Ok(map) => Ok(map.clone()),
            Err(reason) => Err(TrqError::Api(reason.clone())),
        }
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<String, TrqError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", request.text, request.target)),
            MockMode::Mappings(map) => {
                let key = (request.text.clone(), request.target.clone());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", request.text, request.target)))
            }
            MockMode::Error(message) => Err(TrqError::Api(message.clone())),
        }
    }

    fn engines(&self) -> &[&'static str] {
        &["mock"]
    }
}
