//! EditorPreferences — the editor's preference values and their defaults.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PreferencesError;
use crate::observable::PropertyValue;

use super::keys;

// ============================================================================
// NewLineStyle
// ============================================================================

/// Line terminator written when a bundle file is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewLineStyle {
    /// Keep whatever the file already uses.
    Default,
    Unix,
    Windows,
    Mac,
}

impl NewLineStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Unix => "unix",
            Self::Windows => "windows",
            Self::Mac => "mac",
        }
    }

    /// The terminator itself; `None` for [`NewLineStyle::Default`].
    pub fn terminator(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Unix => Some("\n"),
            Self::Windows => Some("\r\n"),
            Self::Mac => Some("\r"),
        }
    }
}

impl fmt::Display for NewLineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewLineStyle {
    type Err = PreferencesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "unix" => Ok(Self::Unix),
            "windows" => Ok(Self::Windows),
            "mac" => Ok(Self::Mac),
            other => Err(PreferencesError::OutOfRange {
                key: keys::NEW_LINE_STYLE.to_owned(),
                value: other.to_owned(),
            }),
        }
    }
}

// ============================================================================
// EditorPreferences
// ============================================================================

/// Preference values for the resource-bundle editor, builder and formatter.
///
/// Documents use the camelCase names from [`keys`]; keys left out of a
/// document keep their default, unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EditorPreferences {
    pub unicode_unescape_enabled: bool,
    pub field_tab_inserts: bool,
    pub key_tree_hierarchical: bool,
    pub key_tree_expanded: bool,
    pub support_fragments: bool,
    pub loading_only_fragment_resources: bool,

    pub unicode_escape_enabled: bool,
    pub unicode_escape_uppercase: bool,
    pub spaces_around_equals_enabled: bool,
    pub group_level_separator: String,
    pub align_equals_enabled: bool,
    pub show_support_enabled: bool,
    pub group_keys_enabled: bool,
    pub group_level_deep: i32,
    pub group_sep_blank_line_count: i32,
    pub group_align_equals_enabled: bool,
    pub wrap_line_length: i32,
    pub wrap_indent_length: i32,
    pub new_line_style: NewLineStyle,
    pub keep_empty_fields: bool,
    pub sort_keys: bool,

    pub report_missing_values: bool,
    pub report_duplicate_values: bool,
    pub report_similar_values_word_compare: bool,
    /// Similarity threshold in `0.0..=1.0` above which two values are
    /// reported as similar.
    pub report_similar_values_precision: f64,
    pub editor_tree_hidden: bool,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            unicode_unescape_enabled: true,
            field_tab_inserts: true,
            key_tree_hierarchical: true,
            key_tree_expanded: true,
            support_fragments: true,
            loading_only_fragment_resources: false,

            unicode_escape_enabled: true,
            unicode_escape_uppercase: true,
            spaces_around_equals_enabled: true,
            group_level_separator: ".".to_owned(),
            align_equals_enabled: true,
            show_support_enabled: true,
            group_keys_enabled: true,
            group_level_deep: 1,
            group_sep_blank_line_count: 1,
            group_align_equals_enabled: true,
            wrap_line_length: 80,
            wrap_indent_length: 8,
            new_line_style: NewLineStyle::Unix,
            keep_empty_fields: false,
            sort_keys: true,

            report_missing_values: true,
            report_duplicate_values: true,
            report_similar_values_word_compare: true,
            report_similar_values_precision: 0.75,
            editor_tree_hidden: false,
        }
    }
}

impl EditorPreferences {
    /// Every preference key.
    pub fn keys() -> &'static [&'static str] {
        keys::ALL
    }

    /// Parse a JSON preference document.
    pub fn from_json_str(json: &str) -> Result<Self, PreferencesError> {
        let prefs: Self = serde_json::from_str(json)?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Read and parse a JSON preference document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PreferencesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let prefs = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded editor preferences");
        Ok(prefs)
    }

    pub fn to_json_string(&self) -> Result<String, PreferencesError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the preferences to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PreferencesError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Check the range constraints serde cannot express.
    pub fn validate(&self) -> Result<(), PreferencesError> {
        if self.group_level_separator.is_empty() {
            return Err(PreferencesError::EmptySeparator);
        }
        check_precision(self.report_similar_values_precision)?;
        for (key, value) in [
            (keys::GROUP_LEVEL_DEEP, self.group_level_deep),
            (keys::GROUP_SEP_BLANK_LINE_COUNT, self.group_sep_blank_line_count),
            (keys::WRAP_LINE_LENGTH, self.wrap_line_length),
            (keys::WRAP_INDENT_LENGTH, self.wrap_indent_length),
        ] {
            check_count(key, value)?;
        }
        Ok(())
    }

    /// Current value of `key`, or `None` for an unknown key.
    pub fn get(&self, key: &str) -> Option<PropertyValue> {
        let value: PropertyValue = match key {
            keys::UNICODE_UNESCAPE_ENABLED => self.unicode_unescape_enabled.into(),
            keys::FIELD_TAB_INSERTS => self.field_tab_inserts.into(),
            keys::KEY_TREE_HIERARCHICAL => self.key_tree_hierarchical.into(),
            keys::KEY_TREE_EXPANDED => self.key_tree_expanded.into(),
            keys::SUPPORT_FRAGMENTS => self.support_fragments.into(),
            keys::LOADING_ONLY_FRAGMENT_RESOURCES => self.loading_only_fragment_resources.into(),
            keys::UNICODE_ESCAPE_ENABLED => self.unicode_escape_enabled.into(),
            keys::UNICODE_ESCAPE_UPPERCASE => self.unicode_escape_uppercase.into(),
            keys::SPACES_AROUND_EQUALS_ENABLED => self.spaces_around_equals_enabled.into(),
            keys::GROUP_LEVEL_SEPARATOR => self.group_level_separator.as_str().into(),
            keys::ALIGN_EQUALS_ENABLED => self.align_equals_enabled.into(),
            keys::SHOW_SUPPORT_ENABLED => self.show_support_enabled.into(),
            keys::GROUP_KEYS_ENABLED => self.group_keys_enabled.into(),
            keys::GROUP_LEVEL_DEEP => self.group_level_deep.into(),
            keys::GROUP_SEP_BLANK_LINE_COUNT => self.group_sep_blank_line_count.into(),
            keys::GROUP_ALIGN_EQUALS_ENABLED => self.group_align_equals_enabled.into(),
            keys::WRAP_LINE_LENGTH => self.wrap_line_length.into(),
            keys::WRAP_INDENT_LENGTH => self.wrap_indent_length.into(),
            keys::NEW_LINE_STYLE => self.new_line_style.as_str().into(),
            keys::KEEP_EMPTY_FIELDS => self.keep_empty_fields.into(),
            keys::SORT_KEYS => self.sort_keys.into(),
            keys::REPORT_MISSING_VALUES => self.report_missing_values.into(),
            keys::REPORT_DUPLICATE_VALUES => self.report_duplicate_values.into(),
            keys::REPORT_SIMILAR_VALUES_WORD_COMPARE => {
                self.report_similar_values_word_compare.into()
            }
            keys::REPORT_SIMILAR_VALUES_PRECISION => self.report_similar_values_precision.into(),
            keys::EDITOR_TREE_HIDDEN => self.editor_tree_hidden.into(),
            _ => return None,
        };
        Some(value)
    }

    /// Set `key` to `value`.
    ///
    /// The value must have the key's type and satisfy its range; on error
    /// nothing is modified.
    pub fn set(&mut self, key: &str, value: PropertyValue) -> Result<(), PreferencesError> {
        match key {
            keys::UNICODE_UNESCAPE_ENABLED => self.unicode_unescape_enabled = bool_value(key, &value)?,
            keys::FIELD_TAB_INSERTS => self.field_tab_inserts = bool_value(key, &value)?,
            keys::KEY_TREE_HIERARCHICAL => self.key_tree_hierarchical = bool_value(key, &value)?,
            keys::KEY_TREE_EXPANDED => self.key_tree_expanded = bool_value(key, &value)?,
            keys::SUPPORT_FRAGMENTS => self.support_fragments = bool_value(key, &value)?,
            keys::LOADING_ONLY_FRAGMENT_RESOURCES => {
                self.loading_only_fragment_resources = bool_value(key, &value)?
            }
            keys::UNICODE_ESCAPE_ENABLED => self.unicode_escape_enabled = bool_value(key, &value)?,
            keys::UNICODE_ESCAPE_UPPERCASE => self.unicode_escape_uppercase = bool_value(key, &value)?,
            keys::SPACES_AROUND_EQUALS_ENABLED => {
                self.spaces_around_equals_enabled = bool_value(key, &value)?
            }
            keys::GROUP_LEVEL_SEPARATOR => {
                let separator = text_value(key, &value)?;
                if separator.is_empty() {
                    return Err(PreferencesError::EmptySeparator);
                }
                self.group_level_separator = separator.to_owned();
            }
            keys::ALIGN_EQUALS_ENABLED => self.align_equals_enabled = bool_value(key, &value)?,
            keys::SHOW_SUPPORT_ENABLED => self.show_support_enabled = bool_value(key, &value)?,
            keys::GROUP_KEYS_ENABLED => self.group_keys_enabled = bool_value(key, &value)?,
            keys::GROUP_LEVEL_DEEP => self.group_level_deep = count_value(key, &value)?,
            keys::GROUP_SEP_BLANK_LINE_COUNT => {
                self.group_sep_blank_line_count = count_value(key, &value)?
            }
            keys::GROUP_ALIGN_EQUALS_ENABLED => {
                self.group_align_equals_enabled = bool_value(key, &value)?
            }
            keys::WRAP_LINE_LENGTH => self.wrap_line_length = count_value(key, &value)?,
            keys::WRAP_INDENT_LENGTH => self.wrap_indent_length = count_value(key, &value)?,
            keys::NEW_LINE_STYLE => self.new_line_style = text_value(key, &value)?.parse()?,
            keys::KEEP_EMPTY_FIELDS => self.keep_empty_fields = bool_value(key, &value)?,
            keys::SORT_KEYS => self.sort_keys = bool_value(key, &value)?,
            keys::REPORT_MISSING_VALUES => self.report_missing_values = bool_value(key, &value)?,
            keys::REPORT_DUPLICATE_VALUES => self.report_duplicate_values = bool_value(key, &value)?,
            keys::REPORT_SIMILAR_VALUES_WORD_COMPARE => {
                self.report_similar_values_word_compare = bool_value(key, &value)?
            }
            keys::REPORT_SIMILAR_VALUES_PRECISION => {
                let precision = value
                    .as_double()
                    .ok_or_else(|| mismatch(key, "double", &value))?;
                check_precision(precision)?;
                self.report_similar_values_precision = precision;
            }
            keys::EDITOR_TREE_HIDDEN => self.editor_tree_hidden = bool_value(key, &value)?,
            _ => return Err(PreferencesError::UnknownKey(key.to_owned())),
        }
        Ok(())
    }
}

// ============================================================================
// Value checks
// ============================================================================

fn mismatch(key: &str, expected: &'static str, value: &PropertyValue) -> PreferencesError {
    PreferencesError::TypeMismatch {
        key: key.to_owned(),
        expected,
        received: value.kind(),
    }
}

fn bool_value(key: &str, value: &PropertyValue) -> Result<bool, PreferencesError> {
    value.as_bool().ok_or_else(|| mismatch(key, "bool", value))
}

fn text_value<'v>(key: &str, value: &'v PropertyValue) -> Result<&'v str, PreferencesError> {
    value.as_str().ok_or_else(|| mismatch(key, "text", value))
}

fn count_value(key: &str, value: &PropertyValue) -> Result<i32, PreferencesError> {
    let count = value.as_int().ok_or_else(|| mismatch(key, "int", value))?;
    check_count(key, count)?;
    Ok(count)
}

fn check_count(key: &str, value: i32) -> Result<(), PreferencesError> {
    if value < 0 {
        return Err(PreferencesError::OutOfRange {
            key: key.to_owned(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_precision(value: f64) -> Result<(), PreferencesError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(PreferencesError::OutOfRange {
            key: keys::REPORT_SIMILAR_VALUES_PRECISION.to_owned(),
            value: value.to_string(),
        });
    }
    Ok(())
}
