//! Hero copy, one block per hub.

use phub_domain::Hub;
use phub_domain::content::{HeroContent, Tagline};

static GNYMBLE: HeroContent = HeroContent {
    fixed_text: "SMS for businesses that",
    tagline: Tagline { line1: "other platforms", line2: "won't touch" },
    description: "Cigar lounges, distilleries, firearms ranges: legal products deserve \
        working text messaging. Gnymble gets regulated brands compliant, approved, \
        and texting their customers.",
    cta_text: "Start texting legally",
};

static PERCYTECH: HeroContent = HeroContent {
    fixed_text: "The texting platform for",
    tagline: Tagline { line1: "builders and", line2: "operators" },
    description: "PercyTech is the engine behind every Percy hub: hosted numbers, \
        carrier registration, and delivery you can measure. Bring your brand, \
        we bring the pipes.",
    cta_text: "Talk to an engineer",
};

static PERCYMD: HeroContent = HeroContent {
    fixed_text: "Patient texting that",
    tagline: Tagline { line1: "respects the", line2: "waiting room" },
    description: "Reminders, recalls, and two-way conversations for practices that \
        live on their schedule. PercyMD keeps messages simple and your front desk sane.",
    cta_text: "See it in a demo",
};

static PERCYTEXT: HeroContent = HeroContent {
    fixed_text: "Business texting,",
    tagline: Tagline { line1: "minus the", line2: "enterprise baggage" },
    description: "One inbox, real phone numbers, and campaigns your customers actually \
        read. PercyText is texting for the shop on the corner, not the call center.",
    cta_text: "Get your number",
};

pub(crate) const fn owner(hub: Hub) -> Hub {
    hub
}

/// Hero block for a hub. Total over the closed set.
#[must_use]
pub fn hero_for(hub: Hub) -> &'static HeroContent {
    match owner(hub) {
        Hub::Gnymble => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
        Hub::PercyMd => &PERCYMD,
        Hub::PercyText => &PERCYTEXT,
    }
}

/// Hero block for an arbitrary tenant string; unknown names fall back to the
/// default hub's block.
#[must_use]
pub fn hero_for_name(name: &str) -> &'static HeroContent {
    hero_for(Hub::resolve(name))
}
