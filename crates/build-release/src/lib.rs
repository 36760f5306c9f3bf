//! Ordered build releases and release set specifications.
//!
//! Build behavior often depends on which release a build targets. This crate
//! models the ordered sequence of build releases and parses the small
//! specification language used to name sets of them.
//!
//! # Key Types
//!
//! - [`Registry`]: append-only catalog assigning each release an ordinal
//! - [`Release`]: a single named release
//! - [`ReleaseSet`]: the releases selected by a specification
//! - [`ReleaseConfig`]: target release and per-property specifications
//! - [`PropertyPruner`]: strips properties the target release cannot use
//!
//! # Specifications
//!
//! | Form        | Meaning                                  |
//! |-------------|------------------------------------------|
//! | `S`         | only `S`                                 |
//! | `S+`        | `S` and every later release              |
//! | `S-T`       | every release from `S` to `T`, inclusive |
//!
//! # Example
//!
//! ```
//! use build_release::{parse_release_set, Registry};
//!
//! let registry = Registry::builtin().with_releases(["F1", "F2"])?;
//! let set = parse_release_set(&registry, "T-F1")?;
//! assert_eq!(set.to_string(), "[T,F1]");
//!
//! let s = registry.name_to_release("S")?;
//! assert!(!set.contains(s));
//! # Ok::<(), build_release::Error>(())
//! ```

mod config;
mod error;
mod parse;
mod prune;
mod registry;
mod release;
mod set;

pub use config::{ReleaseConfig, TARGET_RELEASE_ENV};
pub use error::{Error, Result};
pub use parse::{OPEN_RANGE_SUFFIX, RANGE_SEPARATOR, ReleaseSpec, parse_release_set};
pub use prune::{PATH_SEPARATOR, PropertyPruner};
pub use registry::{BUILTIN_RELEASES, Registry};
pub use release::Release;
pub use set::ReleaseSet;
