//! Tests for `EditorPreferences` defaults, documents and typed access.

use babel_core::error::PreferencesError;
use babel_core::observable::PropertyValue;
use babel_core::preferences::{keys, EditorPreferences, NewLineStyle};

#[test]
fn defaults_match_the_editor_initializer() {
    let prefs = EditorPreferences::default();

    assert!(prefs.unicode_unescape_enabled);
    assert!(prefs.field_tab_inserts);
    assert!(prefs.key_tree_hierarchical);
    assert!(prefs.key_tree_expanded);
    assert!(prefs.support_fragments);
    assert!(!prefs.loading_only_fragment_resources);
    assert!(prefs.unicode_escape_enabled);
    assert!(prefs.unicode_escape_uppercase);
    assert!(prefs.spaces_around_equals_enabled);
    assert_eq!(prefs.group_level_separator, ".");
    assert!(prefs.align_equals_enabled);
    assert!(prefs.show_support_enabled);
    assert!(prefs.group_keys_enabled);
    assert_eq!(prefs.group_level_deep, 1);
    assert_eq!(prefs.group_sep_blank_line_count, 1);
    assert!(prefs.group_align_equals_enabled);
    assert_eq!(prefs.wrap_line_length, 80);
    assert_eq!(prefs.wrap_indent_length, 8);
    assert_eq!(prefs.new_line_style, NewLineStyle::Unix);
    assert!(!prefs.keep_empty_fields);
    assert!(prefs.sort_keys);
    assert!(prefs.report_missing_values);
    assert!(prefs.report_duplicate_values);
    assert!(prefs.report_similar_values_word_compare);
    assert_eq!(prefs.report_similar_values_precision, 0.75);
    assert!(!prefs.editor_tree_hidden);
}

#[test]
fn every_key_is_readable() {
    let prefs = EditorPreferences::default();
    for key in EditorPreferences::keys() {
        assert!(prefs.get(key).is_some(), "missing getter for {key}");
    }
    assert_eq!(EditorPreferences::keys().len(), 26);
    assert_eq!(prefs.get("noSuchKey"), None);
}

#[test]
fn partial_document_overrides_only_given_keys() {
    let prefs = EditorPreferences::from_json_str(
        r#"{ "wrapLineLength": 120, "newLineStyle": "windows", "sortKeys": false }"#,
    )
    .unwrap();

    assert_eq!(prefs.wrap_line_length, 120);
    assert_eq!(prefs.new_line_style, NewLineStyle::Windows);
    assert!(!prefs.sort_keys);
    assert_eq!(prefs.wrap_indent_length, 8);
    assert_eq!(prefs.group_level_separator, ".");
}

#[test]
fn empty_document_is_all_defaults() {
    let prefs = EditorPreferences::from_json_str("{}").unwrap();
    assert_eq!(prefs, EditorPreferences::default());
}

#[test]
fn unknown_key_in_document_is_rejected() {
    let err = EditorPreferences::from_json_str(r#"{ "colour": "blue" }"#).unwrap_err();
    assert!(matches!(err, PreferencesError::Json(_)), "got {err:?}");
}

#[test]
fn out_of_range_precision_in_document_is_rejected() {
    let err =
        EditorPreferences::from_json_str(r#"{ "reportSimilarValuesPrecision": 1.5 }"#).unwrap_err();
    assert!(matches!(err, PreferencesError::OutOfRange { .. }), "got {err:?}");
}

#[test]
fn empty_separator_in_document_is_rejected() {
    let err = EditorPreferences::from_json_str(r#"{ "groupLevelSeparator": "" }"#).unwrap_err();
    assert!(matches!(err, PreferencesError::EmptySeparator));
}

#[test]
fn json_document_survives_a_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.json");
    let mut prefs = EditorPreferences::default();
    prefs.group_level_separator = "_".to_owned();
    prefs.report_similar_values_precision = 0.5;

    prefs.save(&path).unwrap();
    let loaded = EditorPreferences::from_path(&path).unwrap();

    assert_eq!(loaded, prefs);
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"groupLevelSeparator\": \"_\""));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EditorPreferences::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, PreferencesError::Io(_)));
}

#[test]
fn set_checks_type_and_range() {
    let mut prefs = EditorPreferences::default();

    prefs.set(keys::WRAP_LINE_LENGTH, 100.into()).unwrap();
    prefs.set(keys::NEW_LINE_STYLE, "mac".into()).unwrap();
    prefs.set(keys::REPORT_SIMILAR_VALUES_PRECISION, 0.9.into()).unwrap();
    assert_eq!(prefs.wrap_line_length, 100);
    assert_eq!(prefs.new_line_style, NewLineStyle::Mac);
    assert_eq!(prefs.report_similar_values_precision, 0.9);

    let err = prefs.set(keys::SORT_KEYS, PropertyValue::Int(1)).unwrap_err();
    assert!(matches!(
        err,
        PreferencesError::TypeMismatch { expected: "bool", received: "int", .. }
    ));
    assert!(matches!(
        prefs.set(keys::WRAP_INDENT_LENGTH, (-1).into()),
        Err(PreferencesError::OutOfRange { .. })
    ));
    assert!(matches!(
        prefs.set(keys::NEW_LINE_STYLE, "amiga".into()),
        Err(PreferencesError::OutOfRange { .. })
    ));
    assert!(matches!(
        prefs.set("noSuchKey", true.into()),
        Err(PreferencesError::UnknownKey(_))
    ));

    // Failed sets leave the previous values alone.
    assert_eq!(prefs.wrap_indent_length, 8);
    assert!(prefs.sort_keys);
}

#[test]
fn new_line_style_terminators() {
    assert_eq!(NewLineStyle::Default.terminator(), None);
    assert_eq!(NewLineStyle::Unix.terminator(), Some("\n"));
    assert_eq!(NewLineStyle::Windows.terminator(), Some("\r\n"));
    assert_eq!(NewLineStyle::Mac.terminator(), Some("\r"));
    assert_eq!("windows".parse::<NewLineStyle>().unwrap(), NewLineStyle::Windows);
}
