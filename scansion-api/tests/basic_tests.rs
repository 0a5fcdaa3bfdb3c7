//! Basic tests for scansion-api

use scansion_api::*;
use std::sync::Arc;

struct TwoWords;

impl PronouncingDictionary for TwoWords {
    fn phones_for_word(&self, word: &str) -> Vec<String> {
        match word {
            "record" => vec!["R IH0 K AO1 R D".to_string()],
            "tomato" => vec!["T AH0 M EY1 T OW2".to_string()],
            _ => Vec::new(),
        }
    }
}

#[test]
fn test_config_builder() {
    let config = Config::builder().rules("english").build().unwrap();
    assert_eq!(config.rules_code(), "english");

    let analyzer = StressAnalyzer::with_config(config).unwrap();
    assert_eq!(analyzer.resolver().rules().code(), "en");
}

#[test]
fn test_unsupported_rules() {
    let config = Config::builder().rules("klingon").build().unwrap();
    assert!(matches!(
        StressAnalyzer::with_config(config),
        Err(ApiError::Core(_))
    ));
}

#[test]
fn test_custom_dictionary() {
    let config = Config::builder()
        .dictionary(Arc::new(TwoWords))
        .build()
        .unwrap();
    let analyzer = StressAnalyzer::with_config(config).unwrap();
    assert!(analyzer.config().has_custom_dictionary());
    assert_eq!(
        analyzer.resolver().dictionary().phones_for_word("tomato"),
        vec!["T AH0 M EY1 T OW2".to_string()]
    );

    assert_eq!(
        analyzer.word_stress("tomato", "", None).unwrap().digits(),
        vec![0, 1, 2]
    );
    // Overrides still apply on top of the custom dictionary
    assert_eq!(
        analyzer
            .word_stress("record", "the record shows", None)
            .unwrap()
            .digits(),
        vec![0, 1]
    );
    assert_eq!(analyzer.word_stress("hello", "", None), None);
}

#[test]
fn test_analyzer_word_and_line() {
    let analyzer = StressAnalyzer::new().unwrap();
    assert_eq!(
        analyzer
            .word_stress("record", "I will record the meeting", None)
            .unwrap()
            .digits(),
        vec![1, 0]
    );

    let entries = analyzer.line_stress("The record shows");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].stress.digits(), vec![0, 1]);
    assert_eq!(analyzer.detect_pos("record", "we record"), PosLabel::Verb);
}

#[test]
fn test_line_report() {
    let analyzer = StressAnalyzer::new().unwrap();
    let report = analyzer.line_report("hello asdkfjhasd world");
    assert_eq!(report.token_count(), 3);
    assert_eq!(report.resolved, 2);
    assert_eq!(report.unresolved, 1);
    assert_eq!(report.words[1], WordStressDTO::new(UNRESOLVED_WORD, vec![]));
}

#[test]
fn test_get_word_stress_convenience() {
    assert_eq!(
        get_word_stress("record", "the record shows", None)
            .unwrap()
            .unwrap()
            .digits(),
        vec![0, 1]
    );
    assert_eq!(
        get_word_stress("asdkfjhasd", "the asdkfjhasd is here", None).unwrap(),
        None
    );

    let hello = get_word_stress("hello", "", None).unwrap().unwrap();
    assert!(!hello.is_empty());
    assert!(hello.digits().iter().all(|d| *d <= 2));
}

#[test]
fn test_default_dictionary_covers_everyday_english() {
    let analyzer = StressAnalyzer::new().unwrap();
    assert!(!analyzer.config().has_custom_dictionary());
    assert!(!analyzer.resolver().dictionary().phones_for_word("water").is_empty());

    for word in ["sun", "night", "water", "love", "time"] {
        assert!(
            get_word_stress(word, "", None).unwrap().is_some(),
            "'{word}' should resolve"
        );
    }

    for line in [
        "The sun is bright and the night is long",
        "Because I could not stop for Death",
        "I wandered lonely as a cloud",
    ] {
        let report = analyzer.line_report(line);
        assert_eq!(report.unresolved, 0, "{line}: {:?}", report.words);
        assert_eq!(report.resolved, line.split_whitespace().count());
    }
}

#[test]
fn test_get_line_stress_convenience() {
    let entries = get_line_stress("hello asdkfjhasd").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].word, "hello");
    assert!(!entries[0].stress.is_empty());
    assert_eq!(entries[1], WordStress::unresolved());

    assert!(get_line_stress("   ").unwrap().is_empty());
}

#[test]
fn test_detect_pos_simple() {
    assert_eq!(
        detect_pos_simple("record", "the record shows").unwrap(),
        PosLabel::Noun
    );
    assert_eq!(
        detect_pos_simple("record", "I will record the meeting").unwrap(),
        PosLabel::Verb
    );
    assert_eq!(detect_pos_simple("record", "").unwrap(), PosLabel::Unknown);
    assert_eq!(
        detect_pos_simple("record", "records").unwrap().as_str(),
        "noun"
    );
}

#[test]
fn test_hints_for_every_override() {
    let analyzer = StressAnalyzer::new().unwrap();
    let overrides = analyzer.resolver().rules().overrides();
    for word in overrides.headwords() {
        for label in [PosLabel::Noun, PosLabel::Verb] {
            assert_eq!(
                get_word_stress(word, "", Some(label)).unwrap(),
                overrides.pattern_for(word, label).cloned(),
                "{label} hint for '{word}'"
            );
        }
    }
}

#[test]
fn test_invariance() {
    assert_eq!(
        get_word_stress("RECORD.", "The RECORD shows", None).unwrap(),
        get_word_stress("record", "the record shows", None).unwrap()
    );
}

#[test]
#[cfg(feature = "serde")]
fn test_dto_serialization() {
    let entries = get_line_stress("hello asdkfjhasd").unwrap();
    let json = serde_json::to_string(&entries).unwrap();
    assert_eq!(
        json,
        r#"[{"word":"hello","stress":[0,1]},{"word":"none","stress":[]}]"#
    );

    let report = StressAnalyzer::new()
        .unwrap()
        .line_report("hello asdkfjhasd");
    let parsed: LineReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(parsed, report);
}
