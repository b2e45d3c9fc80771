// DeepL REST engine (free-tier endpoint)
use crate::domain::error::TrqError;
use crate::domain::model::{LanguageMap, TranslateRequest};
use once_cell::sync::Lazy;
use reqwest::Client;

const ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

/// Codes DeepL accepts. The API is pickier than google; regional variants
/// are folded into their base code.
const LANGUAGES: &[&str] = &[
    "ar", "bg", "cs", "da", "de", "el", "en", "es", "et", "fi", "fr", "hu", "id", "it", "ja",
    "ko", "lt", "lv", "nb", "nl", "pl", "pt", "ro", "ru", "sk", "sl", "sv", "tr", "uk", "zh",
];

static LANGUAGE_MAP: Lazy<LanguageMap> = Lazy::new(|| {
    let targets: Vec<String> = LANGUAGES.iter().map(|s| s.to_string()).collect();
    let mut map = LanguageMap::new();
    map.insert("auto".to_string(), targets.clone());
    for code in LANGUAGES {
        map.insert(code.to_string(), targets.clone());
    }
    map
});

pub fn language_map() -> LanguageMap {
    LANGUAGE_MAP.clone()
}

/// Resolve the API key: environment first, config file second.
fn api_key(configured: Option<&str>) -> Result<String, TrqError> {
    if let Ok(key) = std::env::var("DEEPL_API_KEY") {
        if !key.trim().is_empty() {
            return Ok(key);
        }
    }
    match configured {
        Some(key) if !key.trim().is_empty() => Ok(key.to_string()),
        _ => Err(TrqError::Config(
            "DeepL API key missing; set DEEPL_API_KEY or deepl_api_key under [engines]"
                .to_string(),
        )),
    }
}

pub async fn translate(
    client: &Client,
    configured_key: Option<&str>,
    request: &TranslateRequest,
) -> Result<String, TrqError> {
    let key = api_key(configured_key)?;

    let mut form: Vec<(&str, String)> = vec![
        ("text", request.text.clone()),
        ("target_lang", request.target.to_uppercase()),
    ];
    // Omitting source_lang asks DeepL to detect it.
    if request.source != "auto" {
        form.push(("source_lang", request.source.to_uppercase()));
    }

    let response = client
        .post(ENDPOINT)
        .timeout(request.timeout)
        .header("Authorization", format!("DeepL-Auth-Key {}", key))
        .form(&form)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(TrqError::Api(format!(
            "deepl returned {}",
            response.status()
        )));
    }

    let body = response.json::<serde_json::Value>().await?;
    extract_translation(&body)
}

fn extract_translation(body: &serde_json::Value) -> Result<String, TrqError> {
    body.get("translations")
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("text"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| TrqError::Api("missing translation text in deepl response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_translation_reads_first_entry() {
        let body = json!({
            "translations": [
                { "detected_source_language": "EN", "text": "Hallo Welt" }
            ]
        });
        assert_eq!(extract_translation(&body).unwrap(), "Hallo Welt");
    }

    #[test]
    fn extract_translation_rejects_empty_lists() {
        assert!(extract_translation(&json!({ "translations": [] })).is_err());
        assert!(extract_translation(&json!({ "message": "quota exceeded" })).is_err());
    }

    #[test]
    fn api_key_prefers_non_blank_config_value() {
        // Runs without DEEPL_API_KEY in the test environment.
        if std::env::var("DEEPL_API_KEY").is_ok() {
            return;
        }
        assert_eq!(api_key(Some("abc:fx")).unwrap(), "abc:fx");
        assert!(api_key(Some("   ")).is_err());
        assert!(api_key(None).is_err());
    }
}
