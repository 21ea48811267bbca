//! Industries each hub markets to.

use phub_domain::Hub;
use phub_domain::content::BusinessType;

static GNYMBLE: &[BusinessType] = &[
    BusinessType {
        name: "Cigar lounges & tobacconists",
        description: "Event nights, new arrivals, and member campaigns with age-gated lists.",
    },
    BusinessType {
        name: "Distilleries & breweries",
        description: "Release drops and tasting-room traffic without mail-chimp-era reach.",
    },
    BusinessType {
        name: "Firearms retailers & ranges",
        description: "Class schedules, range reminders, and transfer notifications.",
    },
    BusinessType {
        name: "Vape & smoke shops",
        description: "Restock alerts and loyalty campaigns that clear carrier review.",
    },
];

static PERCYTECH: &[BusinessType] = &[
    BusinessType {
        name: "Multi-brand operators",
        description: "Run several storefronts on one registration and one invoice.",
    },
    BusinessType {
        name: "Agencies",
        description: "White-label delivery infrastructure under your client brands.",
    },
    BusinessType {
        name: "Product teams",
        description: "Ship messaging features without becoming carrier experts.",
    },
];

static PERCYMD: &[BusinessType] = &[
    BusinessType {
        name: "Medical practices",
        description: "Reminders and recalls tuned to the appointment book.",
    },
    BusinessType {
        name: "Dental offices",
        description: "Hygiene recalls that actually bring patients back.",
    },
    BusinessType {
        name: "Therapy & specialty clinics",
        description: "Two-way scheduling without front-desk phone tag.",
    },
];

static PERCYTEXT: &[BusinessType] = &[
    BusinessType {
        name: "Salons & barbershops",
        description: "Fill cancellations from your waitlist in minutes.",
    },
    BusinessType {
        name: "Restaurants & cafes",
        description: "Specials and event nights straight to your regulars.",
    },
    BusinessType {
        name: "Repair & home services",
        description: "On-my-way texts and review requests from one number.",
    },
];

pub(crate) const fn owner(hub: Hub) -> Hub {
    hub
}

/// Industries list for a hub; non-empty for every hub.
#[must_use]
pub fn business_types_for(hub: Hub) -> &'static [BusinessType] {
    match owner(hub) {
        Hub::Gnymble => GNYMBLE,
        Hub::PercyTech => PERCYTECH,
        Hub::PercyMd => PERCYMD,
        Hub::PercyText => PERCYTEXT,
    }
}

#[must_use]
pub fn business_types_for_name(name: &str) -> &'static [BusinessType] {
    business_types_for(Hub::resolve(name))
}
