//! Release-gated property pruning.
//!
//! Some properties are only understood by particular releases. A
//! [`PropertyPruner`] holds the supported release set for each such property
//! and removes the properties the target release does not support from a
//! JSON property document before it is emitted.

use crate::{Error, Registry, Release, ReleaseConfig, ReleaseSet, Result, parse_release_set};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Separator between segments of a property path.
pub const PATH_SEPARATOR: char = '.';

/// A property path together with the releases that support it.
#[derive(Debug, Clone)]
struct PropertyRule {
    path: String,
    supported: ReleaseSet,
}

/// Removes properties unsupported by a target release.
#[derive(Debug, Clone, Default)]
pub struct PropertyPruner {
    rules: Vec<PropertyRule>,
}

impl PropertyPruner {
    /// Build a pruner from `(property path, release specification)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPropertyRule`] for the first specification that
    /// does not parse against `registry`, or [`Error::DuplicatePropertyRule`]
    /// if a path appears more than once.
    pub fn new<I, P, S>(registry: &Registry, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<String>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut parsed = Vec::new();
        for (path, specification) in rules {
            let path = path.into();
            if !seen.insert(path.clone()) {
                return Err(Error::duplicate_property_rule(path));
            }
            let supported = match parse_release_set(registry, specification.as_ref()) {
                Ok(supported) => supported,
                Err(e) => return Err(Error::invalid_property_rule(path, e)),
            };
            parsed.push(PropertyRule { path, supported });
        }
        Ok(Self { rules: parsed })
    }

    /// Build a pruner from the `properties` table of a config.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(registry: &Registry, config: &ReleaseConfig) -> Result<Self> {
        Self::new(
            registry,
            config
                .properties
                .iter()
                .map(|(path, specification)| (path.clone(), specification)),
        )
    }

    /// The supported releases recorded for `path`, if it has a rule.
    #[must_use]
    pub fn supported_releases(&self, path: &str) -> Option<&ReleaseSet> {
        self.rules
            .iter()
            .find(|rule| rule.path == path)
            .map(|rule| &rule.supported)
    }

    /// Whether `target` may see the property at `path`.
    ///
    /// Properties without a rule are supported by every release.
    #[must_use]
    pub fn is_supported(&self, path: &str, target: &Release) -> bool {
        self.supported_releases(path)
            .is_none_or(|supported| supported.contains(target))
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the pruner has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Remove every property `target` does not support from `document`.
    ///
    /// Paths descend through objects; an array along the path applies the
    /// rest of the path to each element. Missing properties are ignored.
    /// Returns the paths that removed at least one value, in rule order.
    pub fn prune(&self, document: &mut Value, target: &Release) -> Vec<String> {
        let mut pruned = Vec::new();
        for rule in &self.rules {
            if rule.supported.contains(target) {
                continue;
            }
            let segments: Vec<&str> = rule.path.split(PATH_SEPARATOR).collect();
            if remove_path(document, &segments) {
                debug!(
                    property = %rule.path,
                    target = %target,
                    supported = %rule.supported,
                    "Pruned property unsupported by target release"
                );
                pruned.push(rule.path.clone());
            }
        }
        pruned
    }
}

fn remove_path(value: &mut Value, segments: &[&str]) -> bool {
    let Some((head, rest)) = segments.split_first() else {
        return false;
    };
    match value {
        Value::Object(map) if rest.is_empty() => map.remove(*head).is_some(),
        Value::Object(map) => map
            .get_mut(*head)
            .is_some_and(|child| remove_path(child, rest)),
        Value::Array(items) => items
            .iter_mut()
            .fold(false, |removed, item| remove_path(item, segments) | removed),
        _ => false,
    }
}
