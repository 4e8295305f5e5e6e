use isg_core::{
    detect_language, label_set, lookup, ExtractError, Label, LabelSet, Language, Page,
};

fn page_with_markers(markers: &[&str]) -> Page {
    Page {
        language_markers: markers.iter().map(|m| m.to_string()).collect(),
        ..Page::default()
    }
}

#[test]
fn missing_marker_defaults_to_english() {
    isg_logging::initialize_for_tests();
    assert_eq!(detect_language(&Page::default()), Language::English);
    assert_eq!(detect_language(&page_with_markers(&[""])), Language::English);
}

#[test]
fn first_marker_wins() {
    let page = page_with_markers(&["DEUTSCH", "ENGLISH"]);
    assert_eq!(detect_language(&page), Language::Deutsch);
}

#[test]
fn unknown_marker_passes_through() {
    let page = page_with_markers(&["KLINGON"]);
    assert_eq!(detect_language(&page), Language::Unknown("KLINGON".to_string()));
}

#[test]
fn known_names_round_trip() {
    for name in ["FRANÇAIS", "ČEŠTINA", "ESPAÑOL", "DANSK"] {
        let language = Language::from_marker(name);
        assert!(!matches!(language, Language::Unknown(_)), "{name}");
        assert_eq!(language.name(), name);
    }
}

#[test]
fn lookup_returns_localized_label() {
    assert_eq!(lookup(Label::Compressor, &Language::English), Ok("COMPRESSOR"));
    assert_eq!(lookup(Label::Compressor, &Language::Deutsch), Ok("VERDICHTER"));
    assert_eq!(
        lookup(Label::HeatPumpStatus, &Language::Deutsch),
        Ok("STATUS WÄRMEPUMPE")
    );
}

#[test]
fn unimplemented_and_unknown_languages_share_one_error() {
    assert_eq!(label_set(&Language::Svenska), Some(LabelSet::Unimplemented));
    assert_eq!(
        lookup(Label::Defrost, &Language::Svenska),
        Err(ExtractError::UnsupportedLanguage {
            language: "SVENSKA".to_string(),
            label: Label::Defrost,
        })
    );

    let unknown = Language::Unknown("KLINGON".to_string());
    assert_eq!(label_set(&unknown), None);
    assert!(matches!(
        lookup(Label::Defrost, &unknown),
        Err(ExtractError::UnsupportedLanguage { .. })
    ));
}
