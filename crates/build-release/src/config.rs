//! Release gating configuration.
//!
//! Configuration selects the target release and attaches release set
//! specifications to properties:
//!
//! ```toml
//! target = "T"
//!
//! [properties]
//! "java_header_libs" = "S+"
//! "sdk.compile_dex" = "T-T"
//! ```
//!
//! The target can be overridden with the `BUILD_RELEASE_TARGET` environment
//! variable.

use crate::{Error, Registry, Release, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env::VarError;
use std::path::Path;
use tracing::{debug, warn};

/// Environment variable that overrides the configured target release.
pub const TARGET_RELEASE_ENV: &str = "BUILD_RELEASE_TARGET";

/// Complete release gating configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Name of the release the build targets. Defaults to the latest release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Property paths mapped to the releases that support them.
    pub properties: BTreeMap<String, String>,
}

impl ReleaseConfig {
    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this structure.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), "Loaded release config");
        Self::from_toml_str(&content)
    }

    /// Apply `BUILD_RELEASE_TARGET` if it is set to a non-empty value.
    ///
    /// A value that is not valid UTF-8 is logged and ignored.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        match std::env::var(TARGET_RELEASE_ENV) {
            Ok(target) if !target.trim().is_empty() => {
                debug!(target = %target, "Target release overridden from environment");
                self.target = Some(target.trim().to_string());
            }
            Ok(_) | Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(value)) => {
                warn!(
                    variable = TARGET_RELEASE_ENV,
                    value = ?value,
                    "Ignoring target release override that is not valid UTF-8"
                );
            }
        }
        self
    }

    /// Resolve the target release against `registry`.
    ///
    /// Without an explicit target this is the latest registered release.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRelease`] if the configured target is not
    /// registered, or [`Error::EmptyRegistry`] if there is no target and no
    /// release to default to.
    pub fn target_release<'r>(&self, registry: &'r Registry) -> Result<&'r Release> {
        match &self.target {
            Some(name) => registry.name_to_release(name),
            None => registry.latest_release().ok_or(Error::EmptyRegistry),
        }
    }
}
