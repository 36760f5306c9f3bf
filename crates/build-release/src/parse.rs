//! Release set specifications.
//!
//! A specification is one of three forms, tried in this order:
//!
//! - `START-END`: closed range, both endpoints included
//! - `START+`: open range, `START` through the latest release
//! - `NAME`: a single release
//!
//! Whitespace around the specification and around each release name is
//! ignored, so ` S - T ` is the same as `S-T`. Names themselves are exact.

use crate::{Error, Registry, ReleaseSet, Result};
use std::fmt;
use tracing::debug;

/// Separator between the endpoints of a closed range.
pub const RANGE_SEPARATOR: char = '-';

/// Suffix marking an open range.
pub const OPEN_RANGE_SUFFIX: char = '+';

/// A tokenized specification whose names have not been resolved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseSpec<'a> {
    /// A bare release name.
    Single(&'a str),
    /// A release and every later one.
    OpenRange(&'a str),
    /// Every release between two endpoints, inclusive.
    ClosedRange {
        /// First release of the range.
        start: &'a str,
        /// Last release of the range.
        end: &'a str,
    },
}

impl<'a> ReleaseSpec<'a> {
    /// Split a specification string into its form and names.
    ///
    /// Tokenizing never fails; unknown names are caught by [`Self::resolve`].
    #[must_use]
    pub fn parse(specification: &'a str) -> Self {
        let specification = specification.trim();
        if let Some((start, end)) = specification.split_once(RANGE_SEPARATOR) {
            Self::ClosedRange {
                start: start.trim(),
                end: end.trim(),
            }
        } else if let Some(start) = specification.strip_suffix(OPEN_RANGE_SUFFIX) {
            Self::OpenRange(start.trim())
        } else {
            Self::Single(specification)
        }
    }

    /// Resolve the names against `registry` and build the set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRelease`] for the first name that is not
    /// registered. For closed ranges whose endpoints both resolve, returns
    /// [`Error::ReversedRange`] if the start is later than the end.
    pub fn resolve(&self, registry: &Registry) -> Result<ReleaseSet> {
        match *self {
            Self::Single(name) => {
                let release = registry.name_to_release(name)?;
                Ok(std::iter::once(release.clone()).collect())
            }
            Self::OpenRange(start) => {
                let start = registry.name_to_release(start)?;
                Ok(registry.range_from(start))
            }
            Self::ClosedRange { start, end } => {
                let start = registry.name_to_release(start)?;
                let end = registry.name_to_release(end)?;
                if end.is_earlier_than(start) {
                    return Err(Error::reversed_range(start.name(), end.name()));
                }
                Ok(registry.range(start, end))
            }
        }
    }
}

impl fmt::Display for ReleaseSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(name) => f.write_str(name),
            Self::OpenRange(start) => write!(f, "{start}{OPEN_RANGE_SUFFIX}"),
            Self::ClosedRange { start, end } => write!(f, "{start}{RANGE_SEPARATOR}{end}"),
        }
    }
}

/// Parse a release set specification against `registry`.
///
/// ```
/// use build_release::{parse_release_set, Registry};
///
/// let registry = Registry::builtin();
/// assert_eq!(parse_release_set(&registry, "S-T").unwrap().to_string(), "[S,T]");
/// assert!(parse_release_set(&registry, "T-S").is_err());
/// ```
///
/// # Errors
///
/// See [`ReleaseSpec::resolve`].
pub fn parse_release_set(registry: &Registry, specification: &str) -> Result<ReleaseSet> {
    let spec = ReleaseSpec::parse(specification);
    let set = spec.resolve(registry)?;
    debug!(%spec, %set, "Parsed build release set");
    Ok(set)
}
