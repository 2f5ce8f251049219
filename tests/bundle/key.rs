//! Tests for bundle id parsing and name derivation.

use std::collections::HashSet;

use babel_core::bundle::{derive_unused_name, sanitize_bundle_name, BundleKey};
use babel_core::error::BundleError;

#[test]
fn parse_splits_package_and_name() {
    let key = BundleKey::parse("com.example.messages").unwrap();
    assert_eq!(key.package(), "com.example");
    assert_eq!(key.name(), "messages");
    assert_eq!(key.package_path(), "com/example");
    assert_eq!(key.qualified_name(), "com.example.messages");
}

#[test]
fn parse_without_dots_uses_default_package() {
    let key = BundleKey::parse("messages").unwrap();
    assert_eq!(key.package(), "");
    assert_eq!(key.name(), "messages");
    assert_eq!(key.to_string(), "messages");
}

#[test]
fn parse_rejects_empty_segments() {
    for bad in ["", ".", "com..messages", "messages.", ".messages"] {
        assert!(
            matches!(BundleKey::parse(bad), Err(BundleError::InvalidKey(ref k)) if k == bad),
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn sanitize_keeps_letters_digits_and_dots() {
    assert_eq!(sanitize_bundle_name("com.example/my-bundle_2"), "com.examplemybundle2");
    assert_eq!(sanitize_bundle_name("Ünïcödé"), "ncd");
}

#[test]
fn free_name_is_kept() {
    assert_eq!(derive_unused_name("messages", |_| false), "messages");
}

#[test]
fn taken_name_gets_the_first_free_suffix() {
    let taken: HashSet<&str> = ["mybundle", "mybundle1", "mybundle2"].into_iter().collect();
    assert_eq!(
        derive_unused_name("my-bundle", |n| taken.contains(n)),
        "mybundle3"
    );
}

#[test]
fn empty_proposal_gets_a_numeric_name() {
    assert_eq!(derive_unused_name("!!!", |_| false), "1");
    assert_eq!(derive_unused_name("", |n| n == "1"), "2");
}
