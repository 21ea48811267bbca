use phub_domain::Hub;
use phub_theming::{theme_for, theme_for_name, validate};
use proptest::prelude::*;

#[test]
fn theme_lookup_is_total_over_garbage() {
    let default = theme_for(Hub::DEFAULT);
    for name in ["", "PercyTech", "nonexistent", "gnymble ", "123"] {
        assert_eq!(theme_for_name(name), default);
    }
}

proptest! {
    #[test]
    fn fallback_never_panics_for_any_string(name in ".*") {
        let theme = theme_for_name(&name);
        prop_assert!(!theme.primary.is_empty());

        if !phub_domain::hub::is_valid_name(&name) {
            prop_assert_eq!(theme, theme_for(Hub::DEFAULT));
        }
    }
}

#[test]
fn known_names_get_their_own_theme() {
    assert_eq!(theme_for_name("percytech"), theme_for(Hub::PercyTech));
    assert_eq!(theme_for_name("percytext"), theme_for(Hub::PercyText));
}

#[test]
fn every_theme_is_fully_populated() {
    validate().expect("every theme should pass the structural check");

    for hub in Hub::all() {
        for token in theme_for(hub).fields() {
            assert!(!token.is_empty(), "empty theme token for {hub:?}");
        }
    }
}

#[test]
fn primary_colors_are_pairwise_distinct() {
    let hubs: Vec<Hub> = Hub::all().collect();
    for (i, &a) in hubs.iter().enumerate() {
        for &b in &hubs[i + 1..] {
            assert_ne!(theme_for(a).primary, theme_for(b).primary, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn init_registers_the_slice() {
    let slice = phub_theming::init().expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<phub_theming::Theming>());
}
