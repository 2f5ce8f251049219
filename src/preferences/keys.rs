//! Preference keys, as they appear in preference documents and in change
//! events emitted by [`PreferenceStore`](super::PreferenceStore).

// General
pub const UNICODE_UNESCAPE_ENABLED: &str = "unicodeUnescapeEnabled";
pub const FIELD_TAB_INSERTS: &str = "fieldTabInserts";
pub const KEY_TREE_HIERARCHICAL: &str = "keyTreeHierarchical";
pub const KEY_TREE_EXPANDED: &str = "keyTreeExpanded";
pub const SUPPORT_FRAGMENTS: &str = "supportFragments";
pub const LOADING_ONLY_FRAGMENT_RESOURCES: &str = "loadingOnlyFragmentResources";

// Formatting
pub const UNICODE_ESCAPE_ENABLED: &str = "unicodeEscapeEnabled";
pub const UNICODE_ESCAPE_UPPERCASE: &str = "unicodeEscapeUppercase";
pub const SPACES_AROUND_EQUALS_ENABLED: &str = "spacesAroundEqualsEnabled";
pub const GROUP_LEVEL_SEPARATOR: &str = "groupLevelSeparator";
pub const ALIGN_EQUALS_ENABLED: &str = "alignEqualsEnabled";
pub const SHOW_SUPPORT_ENABLED: &str = "showSupportEnabled";
pub const GROUP_KEYS_ENABLED: &str = "groupKeysEnabled";
pub const GROUP_LEVEL_DEEP: &str = "groupLevelDeep";
pub const GROUP_SEP_BLANK_LINE_COUNT: &str = "groupSepBlankLineCount";
pub const GROUP_ALIGN_EQUALS_ENABLED: &str = "groupAlignEqualsEnabled";
pub const WRAP_LINE_LENGTH: &str = "wrapLineLength";
pub const WRAP_INDENT_LENGTH: &str = "wrapIndentLength";
pub const NEW_LINE_STYLE: &str = "newLineStyle";
pub const KEEP_EMPTY_FIELDS: &str = "keepEmptyFields";
pub const SORT_KEYS: &str = "sortKeys";

// Reporting
pub const REPORT_MISSING_VALUES: &str = "reportMissingValues";
pub const REPORT_DUPLICATE_VALUES: &str = "reportDuplicateValues";
pub const REPORT_SIMILAR_VALUES_WORD_COMPARE: &str = "reportSimilarValuesWordCompare";
pub const REPORT_SIMILAR_VALUES_PRECISION: &str = "reportSimilarValuesPrecision";
pub const EDITOR_TREE_HIDDEN: &str = "editorTreeHidden";

/// Every key, in declaration order.
pub const ALL: &[&str] = &[
    UNICODE_UNESCAPE_ENABLED,
    FIELD_TAB_INSERTS,
    KEY_TREE_HIERARCHICAL,
    KEY_TREE_EXPANDED,
    SUPPORT_FRAGMENTS,
    LOADING_ONLY_FRAGMENT_RESOURCES,
    UNICODE_ESCAPE_ENABLED,
    UNICODE_ESCAPE_UPPERCASE,
    SPACES_AROUND_EQUALS_ENABLED,
    GROUP_LEVEL_SEPARATOR,
    ALIGN_EQUALS_ENABLED,
    SHOW_SUPPORT_ENABLED,
    GROUP_KEYS_ENABLED,
    GROUP_LEVEL_DEEP,
    GROUP_SEP_BLANK_LINE_COUNT,
    GROUP_ALIGN_EQUALS_ENABLED,
    WRAP_LINE_LENGTH,
    WRAP_INDENT_LENGTH,
    NEW_LINE_STYLE,
    KEEP_EMPTY_FIELDS,
    SORT_KEYS,
    REPORT_MISSING_VALUES,
    REPORT_DUPLICATE_VALUES,
    REPORT_SIMILAR_VALUES_WORD_COMPARE,
    REPORT_SIMILAR_VALUES_PRECISION,
    EDITOR_TREE_HIDDEN,
];
