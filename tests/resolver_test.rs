//! Integration tests for active profile resolution

use envslots::adapters::{ActiveProfiles, MapReader, ProfileTarget};
use envslots::core::{ActiveProfileResolver, EnvironmentPropertySource, Resolution};
use envslots::domain::ProfileList;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const KEY: &str = "profiles.active";

/// Target that records every list it receives
#[derive(Default)]
struct RecordingTarget {
    calls: Vec<Vec<String>>,
}

impl ProfileTarget for RecordingTarget {
    fn apply_profiles(&mut self, profiles: &ProfileList) {
        self.calls.push(profiles.clone().into_vec());
    }
}

fn source(reader: MapReader) -> EnvironmentPropertySource<MapReader> {
    EnvironmentPropertySource::new(reader)
}

#[test]
fn test_applies_profiles_from_custom_slot() {
    let resolver = ActiveProfileResolver::new(KEY).unwrap();
    let source = source(MapReader::new().with("PARAM1", "profiles.active=p1|p2| p3 "));
    let mut target = RecordingTarget::default();

    let resolution = resolver.initialize(|| None, &source, &mut target);

    assert!(resolution.is_resolved());
    assert_eq!(target.calls, vec![vec!["p1", "p2", "p3"]]);
}

#[test]
fn test_override_disables_everything() {
    let reads = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&reads);
    let reader = move |name: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
        (name == "PARAM1").then(|| "profiles.active=prod".to_string())
    };
    let source = EnvironmentPropertySource::new(reader);
    let resolver = ActiveProfileResolver::new(KEY).unwrap();
    let mut target = RecordingTarget::default();

    let resolution = resolver.initialize(|| Some("dev".to_string()), &source, &mut target);

    assert!(matches!(resolution, Resolution::OverridePresent { ref value } if value == "dev"));
    assert!(target.calls.is_empty());
    assert_eq!(reads.load(Ordering::SeqCst), 0);
}

#[test]
fn test_empty_value_issues_no_apply() {
    let resolver = ActiveProfileResolver::new(KEY).unwrap();
    // A blank slot never makes it into the map, so use an all-delimiter list.
    let source = source(MapReader::new().with("PARAM1", "profiles.active=|, other=1"));
    let mut target = RecordingTarget::default();

    let resolution = resolver.initialize(|| None, &source, &mut target);

    assert_eq!(resolution, Resolution::EmptyList);
    assert!(target.calls.is_empty());
}

#[test]
fn test_absent_key_issues_no_apply() {
    let resolver = ActiveProfileResolver::new(KEY).unwrap();
    let source = source(MapReader::new().with("PARAM1", "other=1"));
    let mut target = RecordingTarget::default();

    assert_eq!(
        resolver.initialize(|| None, &source, &mut target),
        Resolution::KeyAbsent
    );
    assert!(target.calls.is_empty());
}

#[test]
fn test_no_slots_issues_no_apply() {
    let resolver = ActiveProfileResolver::new(KEY).unwrap();
    let mut target = RecordingTarget::default();

    assert_eq!(
        resolver.initialize(|| None, &source(MapReader::new()), &mut target),
        Resolution::NoProperties
    );
    assert!(target.calls.is_empty());
}

#[test]
fn test_apply_replaces_existing_profiles() {
    let resolver = ActiveProfileResolver::new(KEY).unwrap();
    let source = source(MapReader::new().with("PARAM2", "profiles.active=aws"));
    let mut active = ActiveProfiles::new(ProfileList::parse("default|local"));

    resolver.initialize(|| None, &source, &mut active);

    assert_eq!(active.profiles().as_slice(), ["aws"]);
}

#[test]
fn test_later_slot_wins_for_profiles_key() {
    let resolver = ActiveProfileResolver::new(KEY).unwrap();
    let source = source(
        MapReader::new()
            .with("PARAM1", "profiles.active=first")
            .with("PARAM5", "profiles.active=second|third"),
    );

    let profiles = resolver.resolve(|| None, &source).into_profiles().unwrap();
    assert_eq!(profiles.into_vec(), vec!["second", "third"]);
}

#[test]
fn test_resolve_has_no_side_effects() {
    let resolver = ActiveProfileResolver::new(KEY).unwrap();
    let source = source(MapReader::new().with("PARAM1", "profiles.active=a|b"));

    let first = resolver.resolve(|| None, &source);
    let second = resolver.resolve(|| None, &source);
    assert_eq!(first, second);
}

#[test]
fn test_closure_target() {
    let resolver = ActiveProfileResolver::new(KEY).unwrap();
    let source = source(MapReader::new().with("PARAM1", "profiles.active=x"));
    let mut applied = None;

    resolver.initialize(
        || None,
        &source,
        &mut |profiles: &ProfileList| applied = Some(profiles.to_string()),
    );

    assert_eq!(applied.as_deref(), Some("x"));
}
