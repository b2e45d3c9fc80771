use crate::domain::model::{LanguageCapability, ParsedQuery};

/// Split on runs of whitespace into at most `limit` fields; the last field
/// keeps its internal spacing. Same semantics as Python's
/// `str.split(maxsplit=limit-1)`.
fn split_limit(s: &str, limit: usize) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut rest = s.trim_start();
    while fields.len() + 1 < limit {
        match rest.find(char::is_whitespace) {
            Some(at) => {
                fields.push(&rest[..at]);
                rest = rest[at..].trim_start();
            }
            None => break,
        }
    }
    let rest = rest.trim_end();
    if !rest.is_empty() {
        fields.push(rest);
    }
    fields
}

/// Interpret a raw query as `[[from] to] text`.
///
/// Ordered rules, first match wins:
/// 1. empty after trimming -> `None`
/// 2. three fields with field0 a known source and field1 a known target ->
///    explicit pair
/// 3. two fields with field0 a known code -> auto-detect source, field0 is
///    the target (membership is deliberately checked against the source
///    set)
/// 4. anything else -> auto-detect source, default target, whole query as
///    text
///
/// Rule 3 will swallow an ordinary first word that happens to be a language
/// code ("is this real" with `is` known). Known ambiguity, kept as is.
///
/// Pure function of its inputs; callers snapshot the capability sets first.
pub fn parse_query(
    raw: &str,
    caps: &LanguageCapability,
    default_lang: &str,
) -> Option<ParsedQuery> {
    let query = raw.trim();
    if query.is_empty() {
        return None;
    }

    if let [from, to, text] = split_limit(query, 3)[..] {
        if caps.sources.contains(from) && caps.targets.contains(to) {
            return Some(ParsedQuery {
                source: from.to_string(),
                target: to.to_string(),
                text: text.to_string(),
            });
        }
    }

    if let [to, text] = split_limit(query, 2)[..] {
        if caps.sources.contains(to) {
            return Some(ParsedQuery {
                source: "auto".to_string(),
                target: to.to_string(),
                text: text.to_string(),
            });
        }
    }

    Some(ParsedQuery {
        source: "auto".to_string(),
        target: default_lang.to_string(),
        text: query.to_string(),
    })
}
