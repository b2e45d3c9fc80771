use crate::domain::error::TrqError;
use crate::domain::model::{LanguageMap, TranslateRequest};
use crate::domain::traits::TranslationProvider;
use crate::infrastructure::config::Engines;
use crate::infrastructure::network::{deepl, google, http, libre};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Engine identifiers, in the order they appear in configuration UIs.
pub const ENGINE_POOL: &[&'static str] = &["google", "deepl", "libre"];

/// HTTP-backed provider that dispatches on the engine id.
pub struct AggregatorProvider {
    client: Client,
    engines: Engines,
}

impl AggregatorProvider {
    pub fn new(engines: Engines) -> Result<Self, TrqError> {
        Ok(Self {
            client: http::create_client()?,
            engines,
        })
    }
}

#[async_trait]
impl TranslationProvider for AggregatorProvider {
    async fn languages(&self, engine: &str) -> Result<LanguageMap, TrqError> {
        match engine {
            "google" => Ok(google::language_map()),
            "deepl" => Ok(deepl::language_map()),
            "libre" => libre::languages(&self.client, &self.engines.libre_url).await,
            other => Err(TrqError::Engine(other.to_string())),
        }
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<String, TrqError> {
        debug!(
            engine = %request.engine,
            source = %request.source,
            target = %request.target,
            "dispatching translation"
        );
        match request.engine.as_str() {
            "google" => google::translate(&self.client, request).await,
            "deepl" => {
                deepl::translate(
                    &self.client,
                    self.engines.deepl_api_key.as_deref(),
                    request,
                )
                .await
            }
            "libre" => libre::translate(&self.client, &self.engines.libre_url, request).await,
            other => Err(TrqError::Engine(other.to_string())),
        }
    }

    fn engines(&self) -> &[&'static str] {
        ENGINE_POOL
    }
}
