//! Pricing-page copy (tier tables live with the billing collaborator).

use phub_domain::Hub;
use phub_domain::content::{FaqItem, PricingContent};

static GNYMBLE: PricingContent = PricingContent {
    badge: "Simple pricing",
    title: "Pay for messages, not for permission",
    subtitle: "Every plan includes compliance",
    description: "Registration, age-gated opt-in, and carrier liaison come standard. \
        The only variable is how much you send.",
    why_choose_us: &[
        "Carrier registration handled and maintained for you",
        "No 'high-risk' surcharge for regulated industries",
        "Month to month; export your list and leave any time",
        "Support from people who know your vertical by name",
    ],
    faq: &[
        FaqItem {
            id: "pricing-setup",
            question: "Is there a setup fee?",
            answer: "One flat onboarding fee that covers carrier registration. If your \
                campaign isn't approved, it's refunded in full.",
        },
        FaqItem {
            id: "pricing-overage",
            question: "What happens if we go over our message allowance?",
            answer: "Overage bills at the same per-message rate as your plan. No \
                penalty tiers, no throttling.",
        },
        FaqItem {
            id: "pricing-contract",
            question: "Do you require an annual contract?",
            answer: "No. Plans are month to month. Annual billing is available at a \
                discount if you want it, never required.",
        },
    ],
    cta_title: "Ready to text without the eggshells?",
    cta_description: "Book a call and we'll walk your campaign through intake on the \
        spot.",
};

static PERCYTECH: PricingContent = PricingContent {
    badge: "Platform pricing",
    title: "Usage-based, carrier-transparent",
    subtitle: "Pass-through fees stay pass-through",
    description: "Platform access plus per-message rates with carrier surcharges \
        itemized, not blended and marked up.",
    why_choose_us: &[
        "Carrier pass-through fees itemized on every invoice",
        "Volume pricing that kicks in automatically, no renegotiation",
        "One platform fee covers every hub you operate",
    ],
    faq: &[
        FaqItem {
            id: "pricing-volume",
            question: "How do volume discounts work?",
            answer: "Rates step down automatically at monthly volume thresholds. The \
                lower rate applies to the whole month, not just messages past the line.",
        },
        FaqItem {
            id: "pricing-hubs",
            question: "Do extra hubs cost extra?",
            answer: "Messages are priced the same everywhere; additional hubs only add \
                their number hosting costs.",
        },
    ],
    cta_title: "Bring us your traffic",
    cta_description: "We'll price your current volume against your existing invoice, \
        line by line.",
};

/// PercyMD and PercyText ship with Gnymble's block until their copy lands.
pub(crate) const fn owner(hub: Hub) -> Hub {
    match hub {
        Hub::PercyMd | Hub::PercyText => Hub::Gnymble,
        other => other,
    }
}

#[must_use]
pub fn pricing_for(hub: Hub) -> &'static PricingContent {
    match owner(hub) {
        Hub::Gnymble | Hub::PercyMd | Hub::PercyText => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
    }
}

#[must_use]
pub fn pricing_for_name(name: &str) -> &'static PricingContent {
    pricing_for(Hub::resolve(name))
}
