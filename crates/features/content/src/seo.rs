//! Per-hub page metadata.

use phub_domain::Hub;
use phub_domain::content::SeoContent;

static GNYMBLE: SeoContent = SeoContent {
    title: "Gnymble | SMS marketing for regulated industries",
    description: "Compliant text messaging for cigar retailers, distilleries, \
        firearms businesses, and other legal brands mainstream platforms reject.",
    keywords: &["sms", "regulated industries", "cigar", "distillery", "firearms", "compliance"],
};

static PERCYTECH: SeoContent = SeoContent {
    title: "PercyTech | The messaging platform behind the Percy hubs",
    description: "Hosted numbers, carrier registration, and measurable delivery for \
        teams building on SMS.",
    keywords: &["sms platform", "10dlc", "carrier registration", "deliverability", "api"],
};

static PERCYMD: SeoContent = SeoContent {
    title: "PercyMD | Patient texting for busy practices",
    description: "Appointment reminders, recalls, and two-way patient texting sized \
        for independent medical and dental practices.",
    keywords: &["patient texting", "appointment reminders", "medical sms", "dental sms"],
};

static PERCYTEXT: SeoContent = SeoContent {
    title: "PercyText | Straightforward business texting",
    description: "One number, one inbox, and campaigns your customers read. Business \
        texting without the enterprise baggage.",
    keywords: &["business texting", "sms marketing", "small business", "shared inbox"],
};

pub(crate) const fn owner(hub: Hub) -> Hub {
    hub
}

#[must_use]
pub fn seo_for(hub: Hub) -> &'static SeoContent {
    match owner(hub) {
        Hub::Gnymble => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
        Hub::PercyMd => &PERCYMD,
        Hub::PercyText => &PERCYTEXT,
    }
}

#[must_use]
pub fn seo_for_name(name: &str) -> &'static SeoContent {
    seo_for(Hub::resolve(name))
}
