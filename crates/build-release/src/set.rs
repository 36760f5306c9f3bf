//! Ordered sets of build releases.

use crate::Release;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// An ordered, duplicate-free collection of releases from one registry.
///
/// Sets are normally produced by [`parse_release_set`](crate::parse_release_set)
/// or by the range helpers on [`Registry`](crate::Registry). Members always
/// iterate in ordinal order, which gives every set exactly one rendering:
///
/// ```
/// use build_release::{parse_release_set, Registry};
///
/// let registry = Registry::builtin();
/// let set = parse_release_set(&registry, "S+").unwrap();
/// assert_eq!(set.to_string(), "[S,T]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ReleaseSet {
    members: BTreeSet<Release>,
}

impl ReleaseSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `release` is one of the members.
    #[must_use]
    pub fn contains(&self, release: &Release) -> bool {
        self.members.contains(release)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over members in ordinal order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Release> + ExactSizeIterator {
        self.members.iter()
    }

    /// The earliest member.
    #[must_use]
    pub fn first(&self) -> Option<&Release> {
        self.members.first()
    }

    /// The latest member.
    #[must_use]
    pub fn last(&self) -> Option<&Release> {
        self.members.last()
    }
}

impl FromIterator<Release> for ReleaseSet {
    fn from_iter<I: IntoIterator<Item = Release>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ReleaseSet {
    type Item = &'a Release;
    type IntoIter = std::collections::btree_set::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for ReleaseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, release) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{release}")?;
        }
        f.write_str("]")
    }
}

impl Serialize for ReleaseSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
