//! Resource-bundle ids: parsing dotted keys and picking names that do not
//! collide with bundles that already exist.

pub mod proposal;

pub use proposal::CreateBundleProposal;

use std::fmt;

use crate::error::BundleError;

/// A bundle id split into its package and base name.
///
/// `com.example.messages` has package `com.example` and name `messages`; a
/// key without dots lives in the default (empty) package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BundleKey {
    package: String,
    name: String,
}

impl BundleKey {
    pub fn parse(key: &str) -> Result<Self, BundleError> {
        if key.is_empty() || key.split('.').any(str::is_empty) {
            return Err(BundleError::InvalidKey(key.to_owned()));
        }
        let (package, name) = match key.rsplit_once('.') {
            Some((package, name)) => (package, name),
            None => ("", key),
        };
        Ok(Self {
            package: package.to_owned(),
            name: name.to_owned(),
        })
    }

    /// Dotted package, empty for the default package.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Base name of the bundle files.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package path with `/` separators, as used for the bundle's folder.
    pub fn package_path(&self) -> String {
        self.package.replace('.', "/")
    }

    pub fn qualified_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BundleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

/// Drop every character a bundle id cannot contain (anything but ASCII
/// letters, digits and `.`).
pub fn sanitize_bundle_name(proposal: &str) -> String {
    proposal
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect()
}

/// Sanitize `proposal` and, if the result is empty or `is_taken`, append
/// `1`, `2`, ... until it is free.
pub fn derive_unused_name(proposal: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let base = sanitize_bundle_name(proposal);
    if !base.is_empty() && !is_taken(&base) {
        return base;
    }
    let mut suffix: u64 = 1;
    loop {
        let candidate = format!("{base}{suffix}");
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
