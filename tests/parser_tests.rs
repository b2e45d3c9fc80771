//! Query parser tests

use trq::domain::model::LanguageCapability;
use trq::domain::parser::parse_query;

/// Small capability set: "pt" is a valid source but not a valid target,
/// which the single-code rule tests rely on.
fn capability() -> LanguageCapability {
    let sources = ["auto", "en", "de", "fr", "is", "pt"];
    let targets = ["en", "de", "fr", "is"];
    LanguageCapability {
        sources: sources.iter().map(|s| s.to_string()).collect(),
        targets: targets.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_blank_input_parses_to_none() {
    let caps = capability();
    assert!(parse_query("", &caps, "en").is_none());
    assert!(parse_query("   ", &caps, "en").is_none());
    assert!(parse_query("\t\n", &caps, "en").is_none());
}

#[test]
fn test_explicit_pair() {
    let parsed = parse_query("en fr hello world", &capability(), "en").unwrap();
    assert_eq!(parsed.source, "en");
    assert_eq!(parsed.target, "fr");
    assert_eq!(parsed.text, "hello world");
}

#[test]
fn test_single_code_sets_target() {
    let parsed = parse_query("fr hello world", &capability(), "en").unwrap();
    assert_eq!(parsed.source, "auto");
    assert_eq!(parsed.target, "fr");
    assert_eq!(parsed.text, "hello world");
}

#[test]
fn test_fallback_uses_default_lang() {
    let parsed = parse_query("hello there friend", &capability(), "es").unwrap();
    assert_eq!(parsed.source, "auto");
    assert_eq!(parsed.target, "es");
    assert_eq!(parsed.text, "hello there friend");
}

#[test]
fn test_explicit_pair_wins_over_single_code() {
    // "en fr is": rule 2 must consume en/fr before rule 3 can see "en".
    let parsed = parse_query("en fr is", &capability(), "en").unwrap();
    assert_eq!(parsed.source, "en");
    assert_eq!(parsed.target, "fr");
    assert_eq!(parsed.text, "is");
}

#[test]
fn test_leading_word_that_is_a_code_becomes_the_target() {
    // Long-standing ambiguity: "is" is Icelandic, so the first word is
    // eaten as a language code rather than translated.
    let parsed = parse_query("is this real", &capability(), "en").unwrap();
    assert_eq!(parsed.source, "auto");
    assert_eq!(parsed.target, "is");
    assert_eq!(parsed.text, "this real");
}

#[test]
fn test_single_code_rule_checks_the_source_set() {
    // "pt" is only in the source set; the rule still fires.
    let parsed = parse_query("pt bom dia", &capability(), "en").unwrap();
    assert_eq!(parsed.source, "auto");
    assert_eq!(parsed.target, "pt");
    assert_eq!(parsed.text, "bom dia");
}

#[test]
fn test_unknown_codes_are_plain_text() {
    let parsed = parse_query("xx yy hello", &capability(), "en").unwrap();
    assert_eq!(parsed.source, "auto");
    assert_eq!(parsed.target, "en");
    assert_eq!(parsed.text, "xx yy hello");
}

#[test]
fn test_half_valid_pair_degrades_to_single_code() {
    // "fr" is a valid source but "xx" is no target, so rule 2 fails and
    // rule 3 takes "fr" as the target.
    let parsed = parse_query("fr xx hello", &capability(), "en").unwrap();
    assert_eq!(parsed.source, "auto");
    assert_eq!(parsed.target, "fr");
    assert_eq!(parsed.text, "xx hello");
}

#[test]
fn test_two_tokens_make_the_second_the_text() {
    let parsed = parse_query("en fr", &capability(), "de").unwrap();
    assert_eq!(parsed.source, "auto");
    assert_eq!(parsed.target, "en");
    assert_eq!(parsed.text, "fr");
}

#[test]
fn test_single_word_falls_back() {
    let parsed = parse_query("hello", &capability(), "de").unwrap();
    assert_eq!(parsed.source, "auto");
    assert_eq!(parsed.target, "de");
    assert_eq!(parsed.text, "hello");
}

#[test]
fn test_whitespace_runs_collapse_but_text_spacing_survives() {
    let parsed = parse_query("  en   fr   hello   world  ", &capability(), "en").unwrap();
    assert_eq!(parsed.source, "en");
    assert_eq!(parsed.target, "fr");
    assert_eq!(parsed.text, "hello   world");
}

#[test]
fn test_empty_capability_always_falls_back() {
    // Before the first successful refresh, nothing is a language code.
    let caps = LanguageCapability::default();
    let parsed = parse_query("en fr hello", &caps, "en").unwrap();
    assert_eq!(parsed.source, "auto");
    assert_eq!(parsed.target, "en");
    assert_eq!(parsed.text, "en fr hello");
}

#[test]
fn test_parsing_is_a_pure_function_of_its_inputs() {
    let caps = capability();
    for query in ["en fr hello", "fr hello", "hello world", "is this real"] {
        let first = parse_query(query, &caps, "en");
        let second = parse_query(query, &caps, "en");
        assert_eq!(first, second);
    }
}

#[test]
fn test_direction_label_uppercases_requested_codes() {
    let parsed = parse_query("en fr hello", &capability(), "en").unwrap();
    assert_eq!(parsed.direction(), "EN > FR");
    let fallback = parse_query("hello", &capability(), "de").unwrap();
    assert_eq!(fallback.direction(), "AUTO > DE");
}
