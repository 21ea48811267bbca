use phub_content::{
    about_for_name, business_types_for_name, cta_for_name, faq_for_name, hero_for, hero_for_name,
    pricing_for_name, problem_solution_for_name, seo_for_name, stats_for, stats_for_name,
    testimonials_for_name, validate,
};
use phub_domain::Hub;
use proptest::prelude::*;

const GARBAGE_NAMES: &[&str] = &["", "PercyTech", "nonexistent", "gnymble\n", "123", "<script>"];

#[test]
fn every_accessor_is_total_over_garbage() {
    let default = Hub::DEFAULT;
    for name in GARBAGE_NAMES {
        assert_eq!(hero_for_name(name), hero_for(default));
        assert_eq!(cta_for_name(name), phub_content::cta_for(default));
        assert_eq!(problem_solution_for_name(name), phub_content::problem_solution_for(default));
        assert_eq!(stats_for_name(name), stats_for(default));
        assert_eq!(testimonials_for_name(name), phub_content::testimonials_for(default));
        assert_eq!(faq_for_name(name), phub_content::faq_for(default));
        assert_eq!(about_for_name(name), phub_content::about_for(default));
        assert_eq!(pricing_for_name(name), phub_content::pricing_for(default));
        assert_eq!(seo_for_name(name), phub_content::seo_for(default));
        assert_eq!(business_types_for_name(name), phub_content::business_types_for(default));
    }
}

proptest! {
    #[test]
    fn fallback_never_panics_for_any_string(name in ".*") {
        let hero = hero_for_name(&name);
        prop_assert!(!hero.fixed_text.is_empty());

        // Anything that is not an exact member token gets the default block.
        if !phub_domain::hub::is_valid_name(&name) {
            prop_assert_eq!(hero, hero_for(Hub::DEFAULT));
        }
    }
}

#[test]
fn known_names_get_their_own_block() {
    assert_eq!(hero_for_name("percytech"), hero_for(Hub::PercyTech));
    assert_eq!(hero_for_name("percymd"), hero_for(Hub::PercyMd));
}

#[test]
fn configuration_is_genuinely_per_tenant() {
    let gnymble = hero_for(Hub::Gnymble);
    let percytech = hero_for(Hub::PercyTech);
    assert_ne!(gnymble.fixed_text, percytech.fixed_text);
    assert_ne!(gnymble.tagline.line1, percytech.tagline.line1);

    assert_ne!(
        phub_content::seo_for(Hub::Gnymble).title,
        phub_content::seo_for(Hub::PercyTech).title
    );
}

#[test]
fn intentional_sharing_is_by_reference_not_copy() {
    // PercyMD currently ships Gnymble's CTA block; the alias must point at the
    // exact same literal, not a duplicate.
    assert!(std::ptr::eq(phub_content::cta_for(Hub::PercyMd), phub_content::cta_for(Hub::Gnymble)));
    assert!(std::ptr::eq(
        phub_content::faq_for(Hub::PercyText),
        phub_content::faq_for(Hub::Gnymble)
    ));
    // While hubs with their own copy do not share.
    assert!(!std::ptr::eq(
        phub_content::cta_for(Hub::PercyTech),
        phub_content::cta_for(Hub::Gnymble)
    ));
}

#[test]
fn shared_blocks_never_name_a_sibling_brand() {
    // Sections with non-identity owner tables are served to several hubs, so
    // their prose must not mention any brand other than the one being served.
    for hub in Hub::all() {
        let siblings: Vec<&str> =
            Hub::all().filter(|h| *h != hub).map(Hub::display_name).collect();

        let mut prose: Vec<&str> = Vec::new();

        let cta = phub_content::cta_for(hub);
        prose.extend([cta.title, cta.description, cta.guarantee]);
        prose.extend(cta.steps.iter().flat_map(|s| [s.title, s.description]));

        let ps = phub_content::problem_solution_for(hub);
        prose.extend([ps.title_lead, ps.title_accent, ps.description]);
        prose.extend(ps.deliver.iter().copied());
        prose.extend(ps.others_miss.iter().copied());

        prose.extend(stats_for(hub).stats.iter().map(|s| s.description));
        prose.extend(phub_content::testimonials_for(hub).items.iter().map(|t| t.quote));

        for category in phub_content::faq_for(hub).categories {
            prose.extend(category.items.iter().flat_map(|i| [i.question, i.answer]));
        }

        let pricing = phub_content::pricing_for(hub);
        prose.extend([pricing.description, pricing.cta_description]);
        prose.extend(pricing.why_choose_us.iter().copied());
        prose.extend(pricing.faq.iter().flat_map(|i| [i.question, i.answer]));

        for text in prose {
            for sibling in &siblings {
                assert!(
                    !text.contains(sibling),
                    "{hub:?} copy mentions sibling brand {sibling}: {text}"
                );
            }
        }
    }
}

#[test]
fn structural_completeness_for_every_hub() {
    validate().expect("every content block should be structurally complete");

    for hub in Hub::all() {
        let hero = hero_for(hub);
        assert!(!hero.tagline.line1.is_empty());
        assert!(!hero.tagline.line2.is_empty());

        assert!(stats_for(hub).stats.len() >= 3);

        let faq = phub_content::faq_for(hub);
        assert!(faq.categories.len() >= 2);
        for category in faq.categories {
            for item in category.items {
                assert!(!item.question.is_empty());
                assert!(!item.answer.is_empty());
            }
        }

        assert!(phub_content::pricing_for(hub).why_choose_us.len() >= 2);
        assert!(!phub_content::business_types_for(hub).is_empty());
    }
}

#[test]
fn faq_item_ids_are_unique_within_a_hub() {
    for hub in Hub::all() {
        let mut ids: Vec<&str> = phub_content::faq_for(hub)
            .categories
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id))
            .collect();
        ids.sort_unstable();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len, "duplicate faq ids for {hub:?}");
    }
}

#[test]
fn init_registers_the_slice() {
    let slice = phub_content::init().expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<phub_content::Content>());
}
