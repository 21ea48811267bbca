//! Call-to-action copy.

use phub_domain::Hub;
use phub_domain::content::{CtaContent, CtaStep};

static GNYMBLE: CtaContent = CtaContent {
    title: "Go from banned to sending in three steps",
    description: "Most regulated businesses get rejected by mainstream SMS vendors \
        before they send a single message. We built our onboarding around getting \
        you approved first.",
    steps: &[
        CtaStep {
            title: "Tell us what you sell",
            description: "A short intake about your products and how you market them. \
                No judgment; this is the industry we chose.",
        },
        CtaStep {
            title: "We register your brand",
            description: "We file your carrier registration with campaign copy that \
                passes review for SHAFT-category businesses.",
        },
        CtaStep {
            title: "Start texting",
            description: "Your number goes live with compliant opt-in flows already \
                wired up. Send your first campaign the same week.",
        },
    ],
    primary_cta: "Book an onboarding call",
    secondary_cta: "See pricing",
    guarantee: "If we can't get your campaign approved, you don't pay.",
    badge: Some("Approval-first onboarding"),
};

static PERCYTECH: CtaContent = CtaContent {
    title: "Ship messaging without babysitting carriers",
    description: "You have a product to build. Carrier registration, number \
        provisioning, and deliverability monitoring are our product.",
    steps: &[
        CtaStep {
            title: "Provision a number",
            description: "Local or toll-free, hosted on our stack, ready in minutes.",
        },
        CtaStep {
            title: "Register once",
            description: "One campaign registration covers your brand across every \
                hub you run on the platform.",
        },
        CtaStep {
            title: "Watch it deliver",
            description: "Per-carrier delivery rates on a dashboard, not in a \
                support ticket.",
        },
    ],
    primary_cta: "Request platform access",
    secondary_cta: "Read the docs",
    guarantee: "30-day proof-of-delivery trial on your own traffic.",
    badge: None,
};

/// PercyMD and PercyText ship with Gnymble's block until their copy lands.
pub(crate) const fn owner(hub: Hub) -> Hub {
    match hub {
        Hub::PercyMd | Hub::PercyText => Hub::Gnymble,
        other => other,
    }
}

#[must_use]
pub fn cta_for(hub: Hub) -> &'static CtaContent {
    match owner(hub) {
        Hub::Gnymble | Hub::PercyMd | Hub::PercyText => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
    }
}

#[must_use]
pub fn cta_for_name(name: &str) -> &'static CtaContent {
    cta_for(Hub::resolve(name))
}
