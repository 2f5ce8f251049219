//! CreateBundleProposal — the quick-fix offered on a reference to a bundle
//! that does not exist yet.
//!
//! Only the host-independent parts live here: which id the new bundle gets,
//! how the proposal is presented and ranked, and the string literal that
//! should replace the reference once the bundle has been created.

use std::ops::Range;

use crate::error::BundleError;

use super::{derive_unused_name, BundleKey};

const RELEVANCE_EMPTY_SPAN: i32 = 99;
const RELEVANCE: i32 = 1099;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBundleProposal {
    bundle_id: String,
    span: Range<usize>,
}

impl CreateBundleProposal {
    /// `key` is the unresolved reference and `span` its character range in
    /// the source; `is_taken` reports ids of bundles that already exist.
    pub fn new(key: &str, span: Range<usize>, is_taken: impl Fn(&str) -> bool) -> Self {
        Self {
            bundle_id: derive_unused_name(key, is_taken),
            span,
        }
    }

    /// Id the new bundle will be created with.
    pub fn bundle_id(&self) -> &str {
        &self.bundle_id
    }

    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn label(&self) -> String {
        format!("Create Resource-Bundle '{}'", self.bundle_id)
    }

    pub fn description(&self) -> String {
        format!("Creates a new Resource-Bundle with the id '{}'", self.bundle_id)
    }

    /// Ranking among completion proposals; a proposal on an empty selection
    /// sorts below one on an actual reference.
    pub fn relevance(&self) -> i32 {
        if self.span.end == self.span.start {
            RELEVANCE_EMPTY_SPAN
        } else {
            RELEVANCE
        }
    }

    pub fn bundle_key(&self) -> Result<BundleKey, BundleError> {
        BundleKey::parse(&self.bundle_id)
    }

    /// Quoted literal that replaces the reference after creation.
    pub fn replacement(&self) -> Result<String, BundleError> {
        Ok(format!("\"{}\"", self.bundle_key()?.qualified_name()))
    }
}
