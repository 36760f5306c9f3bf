//! Property-based tests for release ordering and set specifications.
//!
//! These tests verify the behavioral contracts of release sets:
//! - Closed ranges contain exactly the releases between their endpoints
//! - Open ranges contain exactly the releases from their start onwards
//! - Rendering is canonical and follows registration order

use build_release::{Error, Registry, parse_release_set};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating test data
// =============================================================================

/// Generate a registry with unique release names, in generation order.
fn registry_strategy() -> impl Strategy<Value = Registry> {
    proptest::collection::vec("[A-Z][A-Za-z0-9]{0,4}", 1..12).prop_map(|names| {
        // Deduplicate names by appending index
        let names: Vec<String> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| format!("{name}{i}"))
            .collect();
        Registry::from_names(&names).unwrap()
    })
}

/// Generate a registry together with two ordinals inside it.
fn registry_with_endpoints() -> impl Strategy<Value = (Registry, usize, usize)> {
    registry_strategy().prop_flat_map(|registry| {
        let len = registry.len();
        (Just(registry), 0..len, 0..len)
    })
}

proptest! {
    #[test]
    fn closed_range_matches_ordinal_window((registry, a, b) in registry_with_endpoints()) {
        let start = &registry.releases()[a];
        let end = &registry.releases()[b];
        let result = parse_release_set(&registry, &format!("{start}-{end}"));

        if a <= b {
            let set = result.unwrap();
            prop_assert_eq!(set.len(), b - a + 1);
            for release in registry.releases() {
                let inside = (a..=b).contains(&release.ordinal());
                prop_assert_eq!(set.contains(release), inside);
            }
        } else {
            let is_reversed = matches!(result, Err(Error::ReversedRange { .. }));
            prop_assert!(is_reversed);
        }
    }

    #[test]
    fn open_range_runs_to_latest((registry, a, _b) in registry_with_endpoints()) {
        let start = &registry.releases()[a];
        let set = parse_release_set(&registry, &format!("{start}+")).unwrap();

        prop_assert_eq!(set.first(), Some(start));
        prop_assert_eq!(set.last(), registry.latest_release());
        prop_assert_eq!(set.len(), registry.len() - a);
    }

    #[test]
    fn single_release_renders_its_name((registry, a, _b) in registry_with_endpoints()) {
        let release = &registry.releases()[a];
        let set = parse_release_set(&registry, release.name()).unwrap();
        prop_assert_eq!(set.to_string(), format!("[{release}]"));
    }

    #[test]
    fn rendering_follows_registration_order(registry in registry_strategy()) {
        let names: Vec<&str> = registry.releases().iter().map(|r| r.name()).collect();
        prop_assert_eq!(
            registry.all_releases().to_string(),
            format!("[{}]", names.join(","))
        );
    }

    #[test]
    fn ordinals_follow_registration(registry in registry_strategy()) {
        for (i, release) in registry.releases().iter().enumerate() {
            prop_assert_eq!(release.ordinal(), i);
            prop_assert_eq!(registry.name_to_release(release.name()).unwrap(), release);
        }
    }

    #[test]
    fn unknown_names_never_resolve(registry in registry_strategy(), name in "[a-z]{1,6}") {
        // Generated registry names always start uppercase
        let err = registry.name_to_release(&name).unwrap_err();
        prop_assert_eq!(
            err.to_string(),
            format!("unknown release \"{name}\", expected one of {}", registry.all_releases())
        );
    }
}
