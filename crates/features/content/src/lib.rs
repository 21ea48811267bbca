//! # Hub Content Store
//!
//! Per-hub literal content for every page section, plus total accessors.
//!
//! Two guarantees hold for every accessor in this crate:
//!
//! * **Totality**: `*_for` takes a [`Hub`] and is total by construction;
//!   `*_for_name` takes any string and falls back to [`Hub::DEFAULT`] for
//!   unknown, empty, or mis-cased tenant names. Nothing here panics or returns
//!   an absent value, so presentation code can call accessors unconditionally.
//! * **Auditable sharing**: hubs that intentionally reuse another hub's block
//!   do so through an explicit per-section `owner` table, never by duplicated
//!   literals. Giving a hub its own copy later is an owner-table change plus
//!   the new literal.
//!
//! [`init`] validates structural completeness of every (hub, section) pair and
//! registers the feature slice; a malformed block is a startup error, not a
//! runtime surprise.

#[cfg(feature = "server")]
pub mod api;

mod about;
mod business;
mod cta;
mod error;
mod faq;
mod hero;
mod pricing;
mod problem_solution;
mod seo;
mod stats;
mod testimonials;

pub use crate::about::{about_for, about_for_name};
pub use crate::business::{business_types_for, business_types_for_name};
pub use crate::cta::{cta_for, cta_for_name};
pub use crate::error::ContentError;
pub use crate::faq::{faq_for, faq_for_name};
pub use crate::hero::{hero_for, hero_for_name};
pub use crate::pricing::{pricing_for, pricing_for_name};
pub use crate::problem_solution::{problem_solution_for, problem_solution_for_name};
pub use crate::seo::{seo_for, seo_for_name};
pub use crate::stats::{stats_for, stats_for_name};
pub use crate::testimonials::{testimonials_for, testimonials_for_name};

use phub_domain::Hub;
use phub_domain::registry::{FeatureSlice, InitializedSlice};
use std::sync::Arc;

/// Content feature state.
#[derive(Debug, Clone)]
pub struct ContentInner {}

/// Content feature slice handle.
#[derive(Debug, Clone)]
pub struct Content {
    inner: Arc<ContentInner>,
}

impl Content {
    pub fn new(inner: ContentInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl std::ops::Deref for Content {
    type Target = ContentInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Content {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the content feature.
///
/// Walks every (hub, section) pair and rejects structurally incomplete blocks
/// before the slice is registered.
///
/// # Errors
/// Returns [`ContentError::Incomplete`] naming the first offending block.
pub fn init() -> Result<InitializedSlice, ContentError> {
    validate()?;

    tracing::info!("Content slice initialized for {} hubs", Hub::all().count());

    Ok(InitializedSlice::new(Content::new(ContentInner {})))
}

/// Structural completeness check over the whole store.
///
/// # Errors
/// Returns [`ContentError::Incomplete`] for the first empty required field or
/// undersized collection.
pub fn validate() -> Result<(), ContentError> {
    for hub in Hub::all() {
        let fail = |section: &'static str, detail: &'static str| ContentError::Incomplete {
            hub: hub.name(),
            section,
            detail,
        };

        let hero = hero_for(hub);
        if hero.fixed_text.is_empty()
            || hero.tagline.line1.is_empty()
            || hero.tagline.line2.is_empty()
            || hero.description.is_empty()
            || hero.cta_text.is_empty()
        {
            return Err(fail("hero", "required field is empty"));
        }

        let cta = cta_for(hub);
        if cta.steps.is_empty() {
            return Err(fail("cta", "no steps"));
        }
        if cta.steps.iter().any(|s| s.title.is_empty() || s.description.is_empty()) {
            return Err(fail("cta", "step with empty title or description"));
        }
        if cta.title.is_empty() || cta.primary_cta.is_empty() || cta.guarantee.is_empty() {
            return Err(fail("cta", "required field is empty"));
        }

        let ps = problem_solution_for(hub);
        if ps.deliver.is_empty() || ps.others_miss.is_empty() {
            return Err(fail("problem_solution", "empty feature list"));
        }

        let stats = stats_for(hub);
        if stats.stats.len() < 3 {
            return Err(fail("stats", "fewer than 3 stats"));
        }
        if stats.stats.iter().any(|s| s.value.is_empty() || s.label.is_empty()) {
            return Err(fail("stats", "stat with empty value or label"));
        }

        if testimonials_for(hub).items.is_empty() {
            return Err(fail("testimonials", "no testimonials"));
        }

        let faq = faq_for(hub);
        if faq.categories.len() < 2 {
            return Err(fail("faq", "fewer than 2 categories"));
        }
        for category in faq.categories {
            if category.items.is_empty() {
                return Err(fail("faq", "category with no items"));
            }
            if category.items.iter().any(|i| i.question.is_empty() || i.answer.is_empty()) {
                return Err(fail("faq", "item with empty question or answer"));
            }
        }

        let about = about_for(hub);
        if about.story.is_empty() || about.values.is_empty() {
            return Err(fail("about", "empty story or values"));
        }
        if about.founder.name.is_empty() || about.founder.quote.is_empty() {
            return Err(fail("about", "founder section incomplete"));
        }

        let pricing = pricing_for(hub);
        if pricing.why_choose_us.len() < 2 {
            return Err(fail("pricing", "fewer than 2 why-choose-us entries"));
        }
        if pricing.faq.iter().any(|i| i.question.is_empty() || i.answer.is_empty()) {
            return Err(fail("pricing", "faq item with empty question or answer"));
        }

        let seo = seo_for(hub);
        if seo.title.is_empty() || seo.description.is_empty() || seo.keywords.is_empty() {
            return Err(fail("seo", "required field is empty"));
        }

        if business_types_for(hub).is_empty() {
            return Err(fail("business_types", "no business types"));
        }
    }

    Ok(())
}
