use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

/// Language map returned by a provider: source code -> valid destination codes.
pub type LanguageMap = HashMap<String, Vec<String>>;

// The two persisted settings keys, snapshotted per evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub translator: String,
    pub lang: String,
}

/// Language codes the current translator accepts.
///
/// `targets` is the destination set valid with the configured default lang as
/// source context (`map[lang]`), so both sets must be recomputed whenever
/// either setting changes. Empty until the first successful refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCapability {
    pub sources: HashSet<String>,
    pub targets: HashSet<String>,
}

impl LanguageCapability {
    /// Derive both sets from a provider language map. `None` when the map has
    /// no entry for `lang` (the refresh then keeps the previous sets).
    pub fn from_map(map: &LanguageMap, lang: &str) -> Option<Self> {
        let targets: HashSet<String> = map.get(lang)?.iter().cloned().collect();
        Some(Self {
            sources: map.keys().cloned().collect(),
            targets,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.targets.is_empty()
    }
}

/// A query string interpreted as (source, target, text). Derived per query,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// `"auto"` or a source language code.
    pub source: String,
    pub target: String,
    pub text: String,
}

impl ParsedQuery {
    /// Subtitle under the translation, built from the *requested* codes (the
    /// provider may still have detected a different source).
    pub fn direction(&self) -> String {
        format!(
            "{} > {}",
            self.source.to_uppercase(),
            self.target.to_uppercase()
        )
    }
}

/// Boundary type for one provider call.
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    pub text: String,
    pub engine: String,
    pub source: String,
    pub target: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IconSource {
    /// Freedesktop theme icon name.
    Name(String),
    /// Image file resolved by the host.
    Path(PathBuf),
}

/// What the host should do when the user picks an action. The plugin only
/// describes the effect; execution goes through `ClipboardService`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum ActionCommand {
    CopyToClipboard(String),
    CopyAndPaste(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultAction {
    pub id: String,
    pub label: String,
    pub command: ActionCommand,
}

/// One row in the host's result list. Constructed per evaluation and
/// discarded after presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub icon: IconSource,
    pub actions: Vec<ResultAction>,
}
