//! Append-only registry of known build releases.
//!
//! The registry is the single source of truth for which releases exist and
//! how they are ordered. It is populated once during initialization and then
//! shared by reference with everything that parses or queries release sets.

use crate::{Error, Release, ReleaseSet, Result};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Releases known to the build, earliest first.
pub const BUILTIN_RELEASES: &[&str] = &["S", "T"];

/// An ordered catalog of build releases.
///
/// Each registered release receives an ordinal equal to its position in
/// registration order. Releases are never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    releases: Vec<Release>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of releases the build currently supports.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for name in BUILTIN_RELEASES {
            registry.push(name);
        }
        registry
    }

    /// Build a registry from names given in release order.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or repeated.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new().with_releases(names)
    }

    /// Extend this registry with later releases.
    ///
    /// Used to model releases that come after the builtin ones, e.g. in tests
    /// that need "future" releases without touching production registrations.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or already registered.
    pub fn with_releases<I, S>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.register(name.as_ref())?;
        }
        Ok(self)
    }

    /// Append a release with the next ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegistration`] if `name` is empty or already
    /// registered. Both indicate a mistake in the static release list, so
    /// callers usually abort initialization on this error.
    pub fn register(&mut self, name: &str) -> Result<Release> {
        if name.is_empty() {
            return Err(Error::invalid_registration(
                name,
                "release names must not be empty",
            ));
        }
        if self.by_name.contains_key(name) {
            return Err(Error::invalid_registration(name, "already registered"));
        }
        Ok(self.push(name).clone())
    }

    fn push(&mut self, name: &str) -> &Release {
        let ordinal = self.releases.len();
        self.releases.push(Release::new(name, ordinal));
        self.by_name.insert(name.to_string(), ordinal);
        debug!(release = name, ordinal, "Registered build release");
        &self.releases[ordinal]
    }

    /// Look up a release by its exact name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRelease`] listing every registered release if
    /// `name` is not registered.
    pub fn name_to_release(&self, name: &str) -> Result<&Release> {
        trace!(release = name, "Resolving build release");
        self.by_name
            .get(name)
            .and_then(|&ordinal| self.releases.get(ordinal))
            .ok_or_else(|| Error::unknown_release(name, self.all_releases()))
    }

    /// Every registered release, in order.
    #[must_use]
    pub fn all_releases(&self) -> ReleaseSet {
        self.releases.iter().cloned().collect()
    }

    /// The most recently registered release.
    #[must_use]
    pub fn latest_release(&self) -> Option<&Release> {
        self.releases.last()
    }

    /// All releases from `start` to `end` inclusive.
    ///
    /// Empty if `start` is later than `end`.
    #[must_use]
    pub fn range(&self, start: &Release, end: &Release) -> ReleaseSet {
        self.releases
            .get(start.ordinal()..=end.ordinal())
            .unwrap_or_default()
            .iter()
            .cloned()
            .collect()
    }

    /// All releases from `start` through the latest one.
    #[must_use]
    pub fn range_from(&self, start: &Release) -> ReleaseSet {
        self.releases
            .get(start.ordinal()..)
            .unwrap_or_default()
            .iter()
            .cloned()
            .collect()
    }

    /// Registered releases as a slice, earliest first.
    #[must_use]
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// Number of registered releases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether no releases are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
