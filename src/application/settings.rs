use crate::domain::error::TrqError;
use crate::domain::model::LanguageCapability;
use crate::infrastructure::config::persist_settings;
use crate::state::PluginState;
use tracing::{info, warn};

/// What a settings update did to the capability sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Language map re-fetched and both sets recomputed.
    Refreshed { sources: usize, targets: usize },
    /// Settings applied but the refresh failed; previous sets kept.
    Stale { reason: String },
}

/// Apply new settings values, persist them, and refresh the capability
/// sets from the provider.
///
/// An unknown translator id is rejected before anything changes. A failed
/// refresh is not an error: the new settings stick and the previous
/// capability stays in place until a later refresh succeeds.
pub async fn update_settings(
    state: &PluginState,
    new_translator: Option<String>,
    new_lang: Option<String>,
) -> Result<RefreshOutcome, TrqError> {
    if let Some(engine) = &new_translator {
        if !state.provider.engines().contains(&engine.as_str()) {
            return Err(TrqError::Engine(engine.clone()));
        }
    }

    let settings = {
        let mut config = state.config.write().await;
        if let Some(translator) = new_translator {
            config.translator = translator;
        }
        if let Some(lang) = new_lang {
            config.lang = lang;
        }
        config.settings()
    };

    if let Some(path) = &state.persist {
        persist_settings(path, &settings)?;
    }
    info!(translator = %settings.translator, lang = %settings.lang, "settings updated");

    Ok(refresh_capabilities(state).await)
}

/// Re-fetch the language map for the configured translator and swap the
/// capability sets. Failures keep whatever sets were there before, so the
/// parser works from the last known-good view.
pub async fn refresh_capabilities(state: &PluginState) -> RefreshOutcome {
    let settings = state.config.read().await.settings();

    let map = match state.provider.languages(&settings.translator).await {
        Ok(map) => map,
        Err(e) => {
            warn!(
                engine = %settings.translator,
                error = %e,
                "language refresh failed; keeping previous capability"
            );
            return RefreshOutcome::Stale {
                reason: e.to_string(),
            };
        }
    };

    match LanguageCapability::from_map(&map, &settings.lang) {
        Some(capability) => {
            let sources = capability.sources.len();
            let targets = capability.targets.len();
            *state.capability.write().await = capability;
            RefreshOutcome::Refreshed { sources, targets }
        }
        None => {
            let reason = format!(
                "language '{}' not in {}'s map",
                settings.lang, settings.translator
            );
            warn!(%reason, "language refresh failed; keeping previous capability");
            RefreshOutcome::Stale { reason }
        }
    }
}
