//! Settings update and capability refresh tests

use std::sync::Arc;
use trq::application::settings::{refresh_capabilities, update_settings, RefreshOutcome};
use trq::domain::error::TrqError;
use trq::domain::model::LanguageMap;
use trq::infrastructure::config::{load_config_from, Config};
use trq::infrastructure::network::{MockMode, MockProvider};
use trq::state::PluginState;

fn mock_config() -> Config {
    let mut config = Config::default();
    config.translator = "mock".to_string();
    config.lang = "fr".to_string();
    config
}

fn mock_state() -> PluginState {
    PluginState::with_provider(mock_config(), Arc::new(MockProvider::new(MockMode::Suffix)))
}

#[tokio::test]
async fn test_unknown_translator_is_rejected_unchanged() {
    let state = mock_state();
    let result = update_settings(&state, Some("yandex".to_string()), None).await;
    assert!(matches!(result, Err(TrqError::Engine(_))));
    assert_eq!(state.config.read().await.translator, "mock");
}

#[tokio::test]
async fn test_successful_refresh_reports_set_sizes() {
    // Default mock map: auto + en/fr/de/es as sources, four targets.
    let state = mock_state();
    match refresh_capabilities(&state).await {
        RefreshOutcome::Refreshed { sources, targets } => {
            assert_eq!(sources, 5);
            assert_eq!(targets, 4);
        }
        RefreshOutcome::Stale { reason } => panic!("refresh failed: {}", reason),
    }
    assert!(!state.capability.read().await.is_empty());
}

#[tokio::test]
async fn test_refresh_failure_keeps_previous_capability() {
    let mut state = mock_state();
    refresh_capabilities(&state).await;

    // Swap in a provider whose listing endpoint is down.
    state.provider =
        Arc::new(MockProvider::new(MockMode::Suffix).without_languages("instance down"));

    let outcome = update_settings(&state, None, Some("de".to_string()))
        .await
        .unwrap();
    assert!(matches!(outcome, RefreshOutcome::Stale { .. }));

    // The setting stuck, the old sets did not move.
    assert_eq!(state.config.read().await.lang, "de");
    let cap = state.capability.read().await;
    assert!(cap.sources.contains("en"));
    assert!(cap.targets.contains("fr"));
}

#[tokio::test]
async fn test_language_change_recomputes_targets() {
    let mut map = LanguageMap::new();
    map.insert("auto".to_string(), vec!["en".to_string(), "fr".to_string()]);
    map.insert("en".to_string(), vec!["fr".to_string()]);
    map.insert("fr".to_string(), vec!["en".to_string(), "de".to_string()]);
    let provider = Arc::new(MockProvider::new(MockMode::Suffix).with_languages(map));
    let state = PluginState::with_provider(mock_config(), provider);

    update_settings(&state, None, Some("en".to_string()))
        .await
        .unwrap();
    {
        let cap = state.capability.read().await;
        assert!(cap.targets.contains("fr"));
        assert!(!cap.targets.contains("de"));
    }

    update_settings(&state, None, Some("fr".to_string()))
        .await
        .unwrap();
    let cap = state.capability.read().await;
    assert!(cap.targets.contains("de"));
}

#[tokio::test]
async fn test_language_missing_from_the_map_is_stale() {
    let state = mock_state();
    refresh_capabilities(&state).await;

    let outcome = update_settings(&state, None, Some("zz".to_string()))
        .await
        .unwrap();
    assert!(matches!(outcome, RefreshOutcome::Stale { .. }));

    // Previous view survives for the parser.
    let cap = state.capability.read().await;
    assert!(cap.targets.contains("fr"));
}

#[tokio::test]
async fn test_settings_changes_persist_to_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let state = mock_state().with_persist_path(path.clone());

    update_settings(&state, None, Some("de".to_string()))
        .await
        .unwrap();

    let reloaded = load_config_from(&path).unwrap();
    assert_eq!(reloaded.lang, "de");
    assert_eq!(reloaded.translator, "mock");
}

#[tokio::test]
async fn test_persisting_keeps_the_engine_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
translator = "mock"
lang = "fr"

[engines]
libre_url = "https://libre.example.org"
deepl_api_key = "abc:fx"
"#,
    )
    .unwrap();

    let state = mock_state().with_persist_path(path.clone());
    update_settings(&state, None, Some("de".to_string()))
        .await
        .unwrap();

    let reloaded = load_config_from(&path).unwrap();
    assert_eq!(reloaded.lang, "de");
    assert_eq!(reloaded.engines.libre_url, "https://libre.example.org");
    assert_eq!(reloaded.engines.deepl_api_key.as_deref(), Some("abc:fx"));
}

#[tokio::test]
async fn test_update_without_persist_path_only_touches_memory() {
    let state = mock_state();
    let outcome = update_settings(&state, None, Some("es".to_string()))
        .await
        .unwrap();
    assert!(matches!(outcome, RefreshOutcome::Refreshed { .. }));
    assert_eq!(state.config.read().await.lang, "es");
}
