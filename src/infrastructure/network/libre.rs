// LibreTranslate engine
//
// Talks to a configurable instance (self-hosted by default). The only
// engine whose language table is fetched live, via `GET /languages`.
use crate::domain::error::TrqError;
use crate::domain::model::{LanguageMap, TranslateRequest};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeout for the language listing; translation calls carry their own.
const LANGUAGES_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct LibreLanguage {
    code: String,
    #[serde(default)]
    targets: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LibreTranslation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Debug, Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

pub async fn languages(client: &Client, base_url: &str) -> Result<LanguageMap, TrqError> {
    let url = format!("{}/languages", base_url.trim_end_matches('/'));
    let response = client.get(&url).timeout(LANGUAGES_TIMEOUT).send().await?;
    if !response.status().is_success() {
        return Err(TrqError::Api(format!(
            "libre returned {} for /languages",
            response.status()
        )));
    }
    let entries = response.json::<Vec<LibreLanguage>>().await?;
    Ok(map_from_entries(entries))
}

pub async fn translate(
    client: &Client,
    base_url: &str,
    request: &TranslateRequest,
) -> Result<String, TrqError> {
    let url = format!("{}/translate", base_url.trim_end_matches('/'));
    let payload = LibreRequest {
        q: &request.text,
        source: &request.source,
        target: &request.target,
        format: "text",
    };

    let response = client
        .post(&url)
        .timeout(request.timeout)
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        // The instance reports problems as {"error": "..."}.
        let status = response.status();
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from));
        return Err(TrqError::Api(match detail {
            Some(message) => message,
            None => format!("libre returned {}", status),
        }));
    }

    Ok(response.json::<LibreTranslation>().await?.translated_text)
}

fn map_from_entries(entries: Vec<LibreLanguage>) -> LanguageMap {
    entries
        .into_iter()
        .map(|entry| (entry.code, entry.targets))
        .collect()
}
