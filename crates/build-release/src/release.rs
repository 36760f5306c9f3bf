//! A single named build release.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A named point in the ordered sequence of build releases.
///
/// Releases are only created by a [`Registry`](crate::Registry), which assigns
/// each one an ordinal equal to its registration order. Ordering and equality
/// follow the ordinal first, so releases from one registry sort in the order
/// they were registered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Release {
    // Field order matters: the derived `Ord` compares the ordinal first.
    ordinal: usize,
    name: Arc<str>,
}

impl Release {
    pub(crate) fn new(name: &str, ordinal: usize) -> Self {
        Self {
            ordinal,
            name: Arc::from(name),
        }
    }

    /// The release name, e.g. `"S"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of this release in registration order.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Whether this release was registered before `other`.
    #[must_use]
    pub const fn is_earlier_than(&self, other: &Self) -> bool {
        self.ordinal < other.ordinal
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Release {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}
