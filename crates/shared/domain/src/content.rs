//! Content block types: one immutable structured record per page section.
//!
//! Instances are static data in the `phub-content` crate, one per
//! (hub, section) pair. Everything borrows `'static` literals so the whole
//! content store lives in rodata.

use serde::Serialize;

/// Hero section: lead-in line, two-line tagline, description, CTA text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    pub fixed_text: &'static str,
    pub tagline: Tagline,
    pub description: &'static str,
    pub cta_text: &'static str,
}

/// Two-line hero tagline. Both lines are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tagline {
    pub line1: &'static str,
    pub line2: &'static str,
}

/// Call-to-action section with ordered numbered steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CtaContent {
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [CtaStep],
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub guarantee: &'static str,
    pub badge: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CtaStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// "The problem, our solution" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProblemSolutionContent {
    pub title_lead: &'static str,
    pub title_accent: &'static str,
    pub description: &'static str,
    /// What we deliver.
    pub deliver: &'static [&'static str],
    /// What others miss.
    pub others_miss: &'static [&'static str],
    pub badge: &'static str,
}

/// Ordered headline statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsContent {
    pub stats: &'static [Stat],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestimonialsContent {
    pub items: &'static [Testimonial],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub category: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub company: &'static str,
    pub location: &'static str,
}

/// FAQ page: ordered categories, each with an icon and ordered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqContent {
    pub categories: &'static [FaqCategory],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub items: &'static [FaqItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

/// About page narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutContent {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// Ordered story paragraphs.
    pub story: &'static [&'static str],
    pub values: &'static [ValueProp],
    pub founder: FounderSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueProp {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FounderSection {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

/// Pricing page copy (tiers themselves live with the billing collaborator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingContent {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub why_choose_us: &'static [&'static str],
    pub faq: &'static [FaqItem],
    pub cta_title: &'static str,
    pub cta_description: &'static str,
}

/// Page metadata for search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeoContent {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// One industry the hub serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessType {
    pub name: &'static str,
    pub description: &'static str,
}
