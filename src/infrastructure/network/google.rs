// Google web translation endpoint
//
// Speaks the unofficial `client=gtx` endpoint used by the translate widget.
// No API key, and the language table is fixed at build time.
use crate::domain::error::TrqError;
use crate::domain::model::{LanguageMap, TranslateRequest};
use once_cell::sync::Lazy;
use reqwest::Client;

/// ISO 639-1 codes the endpoint accepts on either side of a pair.
const LANGUAGES: &[&str] = &[
    "af", "am", "ar", "az", "be", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en",
    "eo", "es", "et", "eu", "fa", "fi", "fr", "ga", "gd", "gl", "gu", "ha", "he", "hi", "hr",
    "ht", "hu", "hy", "id", "ig", "is", "it", "ja", "jv", "ka", "kk", "km", "kn", "ko", "ku",
    "ky", "la", "lb", "lo", "lt", "lv", "mg", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my",
    "ne", "nl", "no", "ny", "pa", "pl", "ps", "pt", "ro", "ru", "sd", "si", "sk", "sl", "sm",
    "sn", "so", "sq", "sr", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "tl", "tr", "uk",
    "ur", "uz", "vi", "xh", "yi", "yo", "zh", "zu",
];

static LANGUAGE_MAP: Lazy<LanguageMap> = Lazy::new(|| {
    let targets: Vec<String> = LANGUAGES.iter().map(|s| s.to_string()).collect();
    let mut map = LanguageMap::new();
    // "auto" is a valid source here, never a destination.
    map.insert("auto".to_string(), targets.clone());
    for code in LANGUAGES {
        map.insert(code.to_string(), targets.clone());
    }
    map
});

pub fn language_map() -> LanguageMap {
    LANGUAGE_MAP.clone()
}

pub async fn translate(client: &Client, request: &TranslateRequest) -> Result<String, TrqError> {
    let url = format!(
        "https://translate.googleapis.com/translate_a/single?client=gtx&sl={}&tl={}&dt=t&q={}",
        request.source,
        request.target,
        urlencoding::encode(&request.text)
    );

    let response = client
        .get(&url)
        .timeout(request.timeout)
        // The gtx endpoint rejects non-browser agents now and then.
        .header("User-Agent", "Mozilla/5.0")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(TrqError::Api(format!(
            "google endpoint returned {}",
            response.status()
        )));
    }

    let body = response.json::<serde_json::Value>().await?;
    parse_segments(&body)
}

/// The endpoint answers a nested array; the translation is the
/// concatenation of `body[0][i][0]` over all sentence segments.
fn parse_segments(body: &serde_json::Value) -> Result<String, TrqError> {
    let segments = body
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TrqError::Api("unexpected response shape from google".to_string()))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|v| v.as_str()) {
            translated.push_str(text);
        }
    }

    if translated.is_empty() {
        return Err(TrqError::Api(
            "google returned an empty translation".to_string(),
        ));
    }
    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_segments_concatenates_sentence_chunks() {
        let body = json!([
            [["Bonjour ", "Hello ", null], ["le monde", "world", null]],
            null,
            "en"
        ]);
        assert_eq!(parse_segments(&body).unwrap(), "Bonjour le monde");
    }

    #[test]
    fn parse_segments_rejects_unexpected_shapes() {
        assert!(parse_segments(&json!({ "error": 403 })).is_err());
        assert!(parse_segments(&json!([])).is_err());
        assert!(parse_segments(&json!([[]])).is_err());
    }

    #[test]
    fn language_map_has_auto_source_but_not_auto_target() {
        let map = language_map();
        assert!(map.contains_key("auto"));
        assert!(map["en"].iter().any(|c| c == "fr"));
        assert!(!map["auto"].iter().any(|c| c == "auto"));
    }
}
