//! Error types for release registry and release set operations.

use crate::ReleaseSet;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for build release operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while registering, resolving or parsing releases.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A release name did not match any registered release.
    #[error("unknown release \"{name}\", expected one of {expected}")]
    #[diagnostic(
        code(build_release::unknown_release),
        help("Release names are case-sensitive and must be registered before use")
    )]
    UnknownRelease {
        /// The name that failed to resolve
        name: String,
        /// Every release registered at the time of the lookup
        expected: ReleaseSet,
    },

    /// Both endpoints of a closed range are valid but the start is later than the end.
    #[error("invalid closed range, start release \"{start}\" is later than end release \"{end}\"")]
    #[diagnostic(
        code(build_release::reversed_range),
        help("Write closed ranges as EARLIER-LATER, e.g. S-T")
    )]
    ReversedRange {
        /// Name of the start release
        start: String,
        /// Name of the end release
        end: String,
    },

    /// A release could not be added to the registry.
    #[error("cannot register release \"{name}\": {reason}")]
    #[diagnostic(code(build_release::invalid_registration))]
    InvalidRegistration {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// An operation needed at least one registered release.
    #[error("no build releases are registered")]
    #[diagnostic(
        code(build_release::empty_registry),
        help("Register releases before selecting a target release")
    )]
    EmptyRegistry,

    /// A property rule carries a release specification that does not parse.
    #[error("invalid supported releases for property \"{property}\": {source}")]
    #[diagnostic(code(build_release::invalid_property_rule))]
    InvalidPropertyRule {
        /// Dotted path of the property
        property: String,
        /// The parse failure
        #[source]
        source: Box<Error>,
    },

    /// Two property rules name the same property path.
    #[error("duplicate supported releases for property \"{property}\"")]
    #[diagnostic(
        code(build_release::duplicate_property_rule),
        help("Give each property path a single release specification")
    )]
    DuplicatePropertyRule {
        /// Dotted path of the property
        property: String,
    },

    /// Failed to read a configuration file.
    #[error("failed to read release config {}: {source}", .path.display())]
    #[diagnostic(
        code(build_release::io),
        help("Check that the file exists and is readable")
    )]
    Io {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Wrapped TOML parsing error.
    #[error("TOML parse error: {0}")]
    #[diagnostic(code(build_release::toml_parse))]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Create a new unknown release error.
    #[must_use]
    pub fn unknown_release(name: impl Into<String>, expected: ReleaseSet) -> Self {
        Self::UnknownRelease {
            name: name.into(),
            expected,
        }
    }

    /// Create a new reversed range error.
    #[must_use]
    pub fn reversed_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::ReversedRange {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Create a new registration error.
    #[must_use]
    pub fn invalid_registration(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRegistration {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a parse failure with the property it was attached to.
    #[must_use]
    pub fn invalid_property_rule(property: impl Into<String>, source: Self) -> Self {
        Self::InvalidPropertyRule {
            property: property.into(),
            source: Box::new(source),
        }
    }

    /// Create a new duplicate property rule error.
    #[must_use]
    pub fn duplicate_property_rule(property: impl Into<String>) -> Self {
        Self::DuplicatePropertyRule {
            property: property.into(),
        }
    }

    /// Create a new I/O error for a config file.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
