//! About-page narrative, distinct per hub.

use phub_domain::Hub;
use phub_domain::content::{AboutContent, FounderSection, ValueProp};

static GNYMBLE: AboutContent = AboutContent {
    badge: "Our story",
    title: "Built for the businesses everyone else rejected",
    subtitle: "Legal products deserve working tools",
    description: "Gnymble exists because a cigar lounge owner showed us three \
        rejection emails from three SMS vendors in one afternoon.",
    story: &[
        "We started as a messaging consultancy helping small brands get carrier \
            campaigns approved. The pattern was impossible to miss: the businesses \
            that needed texting most were the ones mainstream platforms refused to touch.",
        "Tobacco retailers, distilleries, ranges. All legal, all licensed, all \
            turned away at signup or dropped after their first campaign.",
        "So we built the platform we kept wishing existed: one that reads carrier \
            policy carefully enough to say yes, and keeps saying yes after the first \
            audit.",
    ],
    values: &[
        ValueProp {
            title: "No moral pricing",
            description: "You sell a legal product. You pay what anyone else pays.",
        },
        ValueProp {
            title: "Compliance as craft",
            description: "We treat carrier policy like engineers treat a spec: read it, \
                meet it, document it.",
        },
        ValueProp {
            title: "Humans on the line",
            description: "Flagged traffic gets a phone call from us, not an automated \
                suspension.",
        },
    ],
    founder: FounderSection {
        name: "Percy Stratton",
        role: "Founder",
        quote: "Nobody should lose their customer list because a filter couldn't tell \
            a cigar lounge from a spam ring.",
    },
};

static PERCYTECH: AboutContent = AboutContent {
    badge: "The platform",
    title: "One engine, many storefronts",
    subtitle: "Infrastructure first, brands on top",
    description: "PercyTech is the shared platform the Percy hubs run on, offered to \
        teams who want the same pipes under their own name.",
    story: &[
        "Running Gnymble taught us more about carrier behavior than any API doc \
            ever did. We productized that: the registration flows, the number \
            management, the delivery telemetry.",
        "Every hub we launch is the same codebase with different copy and colors. \
            That discipline is the product; it means fixes land everywhere at once.",
    ],
    values: &[
        ValueProp {
            title: "Measured, not promised",
            description: "Delivery is a number on a dashboard, not an adjective in a \
                sales deck.",
        },
        ValueProp {
            title: "Boring on purpose",
            description: "Carrier plumbing should be predictable. We save the \
                creativity for the brands.",
        },
    ],
    founder: FounderSection {
        name: "Percy Stratton",
        role: "Founder & CTO",
        quote: "The best infrastructure is the kind our customers forget they're \
            standing on.",
    },
};

static PERCYMD: AboutContent = AboutContent {
    badge: "Why PercyMD",
    title: "Texting that fits clinical reality",
    subtitle: "Built with front-desk staff, not for them",
    description: "PercyMD is the Percy platform tuned for medical and dental \
        practices that live and die by the day's schedule.",
    story: &[
        "Practices told us the same thing: patients answer texts and ignore \
            everything else, but the tools built for hospitals are overkill for a \
            three-chair office.",
        "We took the hub platform, stripped the marketing machinery, and kept what \
            a practice needs: reminders, recalls, and a shared inbox the whole front \
            desk can run.",
    ],
    values: &[
        ValueProp {
            title: "Schedule first",
            description: "Every feature starts from the appointment book, because the \
                practice does.",
        },
        ValueProp {
            title: "Plain-language privacy",
            description: "Clear rules about what belongs in a text and what waits for \
                the portal.",
        },
    ],
    founder: FounderSection {
        name: "Percy Stratton",
        role: "Founder",
        quote: "A reminder text that actually arrives is worth more than any portal \
            notification ever sent.",
    },
};

static PERCYTEXT: AboutContent = AboutContent {
    badge: "Hello",
    title: "Texting for the shop on the corner",
    subtitle: "Small lists, real conversations",
    description: "PercyText is the Percy platform for everyday businesses: salons, \
        repair shops, restaurants, and everyone with a counter and regulars.",
    story: &[
        "Most texting products are priced and shaped for brands with a marketing \
            department. Most businesses are not that.",
        "PercyText keeps the platform's delivery muscle and wraps it in the \
            simplest thing that works: one number, one inbox, campaigns when you \
            want them.",
    ],
    values: &[
        ValueProp {
            title: "Five-minute setup",
            description: "If you can make a social post, you can send your first \
                campaign.",
        },
        ValueProp {
            title: "Your customers, your list",
            description: "Export everything, any time. We earn renewals, we don't \
                hold lists hostage.",
        },
    ],
    founder: FounderSection {
        name: "Percy Stratton",
        role: "Founder",
        quote: "The corner shop deserves the same delivery rates as the Fortune 500.",
    },
};

pub(crate) const fn owner(hub: Hub) -> Hub {
    hub
}

#[must_use]
pub fn about_for(hub: Hub) -> &'static AboutContent {
    match owner(hub) {
        Hub::Gnymble => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
        Hub::PercyMd => &PERCYMD,
        Hub::PercyText => &PERCYTEXT,
    }
}

#[must_use]
pub fn about_for_name(name: &str) -> &'static AboutContent {
    about_for(Hub::resolve(name))
}
