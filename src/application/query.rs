use crate::domain::model::{
    ActionCommand, ParsedQuery, ResultAction, ResultItem, TranslateRequest,
};
use crate::domain::parser::parse_query;
use crate::interfaces::plugin::{plugin_icon, QueryContext};
use crate::state::PluginState;
use std::time::Duration;
use tracing::warn;

/// Pause between the keystroke and the provider call; queries superseded
/// inside the window are dropped before any network traffic happens.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Per-request provider timeout.
pub const TRANSLATE_TIMEOUT: Duration = Duration::from_secs(5);

/// Wait out the debounce window. Returns false when the query was
/// superseded while waiting; a zero wait only checks liveness.
pub async fn debounce_gate(ctx: &QueryContext, wait: Duration) -> bool {
    if wait.is_zero() {
        return ctx.is_valid();
    }
    tokio::select! {
        _ = tokio::time::sleep(wait) => ctx.is_valid(),
        _ = ctx.cancelled() => false,
    }
}

/// Evaluate one query-bar input: debounce, parse, translate, build items.
///
/// At most one item comes back: the translation on success, an error card
/// on failure, nothing when the input is empty or the query went stale.
pub async fn evaluate(state: &PluginState, ctx: &QueryContext) -> Vec<ResultItem> {
    if !debounce_gate(ctx, state.debounce).await {
        return Vec::new();
    }

    // Snapshot settings and capability together, before parsing, so a
    // concurrent settings change cannot produce a mixed view.
    let (settings, capability) = {
        let config = state.config.read().await;
        let capability = state.capability.read().await;
        (config.settings(), capability.clone())
    };

    let Some(parsed) = parse_query(ctx.query(), &capability, &settings.lang) else {
        return Vec::new();
    };

    let request = TranslateRequest {
        text: parsed.text.clone(),
        engine: settings.translator.clone(),
        source: parsed.source.clone(),
        target: parsed.target.clone(),
        timeout: TRANSLATE_TIMEOUT,
    };

    let outcome = state.provider.translate(&request).await;

    // The user may have typed on while the provider was out; a stale
    // evaluation must not flash its result into the newer query's list.
    if !ctx.is_valid() {
        return Vec::new();
    }

    match outcome {
        Ok(translation) => vec![success_item(state, &parsed, translation)],
        Err(e) => {
            warn!(engine = %request.engine, error = %e, "translation failed");
            vec![error_item(e.to_string())]
        }
    }
}

fn success_item(state: &PluginState, parsed: &ParsedQuery, translation: String) -> ResultItem {
    let mut actions = Vec::new();
    if state.clipboard.paste_supported() {
        actions.push(ResultAction {
            id: "copy-paste".to_string(),
            label: "Copy to clipboard and paste to front-most window".to_string(),
            command: ActionCommand::CopyAndPaste(translation.clone()),
        });
    }
    actions.push(ResultAction {
        id: "copy".to_string(),
        label: "Copy to clipboard".to_string(),
        command: ActionCommand::CopyToClipboard(translation.clone()),
    });

    ResultItem {
        id: "translation".to_string(),
        title: translation,
        subtitle: parsed.direction(),
        icon: plugin_icon(),
        actions,
    }
}

fn error_item(message: String) -> ResultItem {
    ResultItem {
        id: "translation-error".to_string(),
        title: "Error".to_string(),
        subtitle: message,
        icon: plugin_icon(),
        actions: Vec::new(),
    }
}
