use phub_domain::hub::{Hub, is_valid_name};

#[test]
fn id_name_bijection_round_trips() {
    for hub in Hub::all() {
        assert_eq!(Hub::from_id(hub.id()), Some(hub));
        assert_eq!(Hub::parse(hub.name()), Some(hub));
        assert_eq!(Hub::from_id(hub.id()).map(Hub::id), Some(hub.id()));
    }
}

#[test]
fn ids_are_unique() {
    let mut ids: Vec<u16> = Hub::all().map(Hub::id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), Hub::all().count());
}

#[test]
fn reverse_lookup_absence_is_none_not_default() {
    assert_eq!(Hub::from_id(999), None);
    assert_eq!(Hub::from_id(0), None);
    assert_eq!(Hub::from_id(u16::MAX), None);
}

#[test]
fn guard_rejects_non_members_without_panicking() {
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("PercyTech")); // names are case-sensitive lowercase tokens
    assert!(!is_valid_name("nonexistent"));
    assert!(!is_valid_name("gnymble "));
    assert!(!is_valid_name("123"));
    assert!(!is_valid_name("{}"));
}

#[test]
fn guard_accepts_every_member() {
    for hub in Hub::all() {
        assert!(is_valid_name(hub.name()), "{} should be valid", hub.name());
    }
}

#[test]
fn resolve_is_total_and_falls_back_to_default() {
    assert_eq!(Hub::resolve("percytech"), Hub::PercyTech);
    assert_eq!(Hub::resolve(""), Hub::DEFAULT);
    assert_eq!(Hub::resolve("PercyTech"), Hub::DEFAULT);
    assert_eq!(Hub::resolve("no-such-hub"), Hub::DEFAULT);
}

#[test]
fn enumeration_order_is_stable() {
    let first: Vec<Hub> = Hub::all().collect();
    let second: Vec<Hub> = Hub::all().collect();
    assert_eq!(first, second);
    assert_eq!(first[0], Hub::DEFAULT);
}

#[test]
fn metadata_is_fully_populated() {
    for hub in Hub::all() {
        let meta = hub.metadata();
        assert!(meta.id > 0);
        assert!(!meta.name.is_empty());
        assert!(!meta.display_name.is_empty());
        assert!(!meta.domain.is_empty());
        assert!(!meta.icon_path.is_empty());
        assert!(!meta.description.is_empty());
        assert_eq!(meta.name, hub.name());
    }
}

#[test]
fn domains_are_distinct() {
    let mut domains: Vec<&str> = Hub::all().map(Hub::domain).collect();
    domains.sort_unstable();
    domains.dedup();
    assert_eq!(domains.len(), Hub::all().count());
}

#[test]
fn serde_uses_lowercase_tokens() {
    let json = serde_json::to_string(&Hub::PercyMd).expect("serialize");
    assert_eq!(json, "\"percymd\"");
    let back: Hub = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, Hub::PercyMd);
}
