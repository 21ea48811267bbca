//! FAQ content: ordered categories of question/answer pairs.

use phub_domain::Hub;
use phub_domain::content::{FaqCategory, FaqContent, FaqItem};

static GNYMBLE: FaqContent = FaqContent {
    categories: &[
        FaqCategory {
            name: "Compliance",
            icon: "shield",
            items: &[
                FaqItem {
                    id: "compliance-legal",
                    question: "Is it actually legal to text about cigars or whiskey?",
                    answer: "Yes, with the right registration and audience controls. \
                        Carriers restrict SHAFT-category marketing, they don't ban it; \
                        campaigns with age-gated opt-in and accurate content \
                        descriptions get approved.",
                },
                FaqItem {
                    id: "compliance-age-gate",
                    question: "How does age verification work for opt-ins?",
                    answer: "Subscribers confirm their birth date during opt-in and we \
                        store the attestation with the consent record. Your list only \
                        ever contains verified adults.",
                },
                FaqItem {
                    id: "compliance-banned",
                    question: "We were already banned by another platform. Does that hurt us?",
                    answer: "No. Registrations are per-brand and per-campaign. A rejection \
                        elsewhere usually means the copy was wrong for review, not that \
                        your business is unregistrable.",
                },
            ],
        },
        FaqCategory {
            name: "Getting started",
            icon: "rocket",
            items: &[
                FaqItem {
                    id: "start-timeline",
                    question: "How long until we can send our first campaign?",
                    answer: "Carrier review typically clears within a week of intake. \
                        Most customers send their first campaign inside ten business days.",
                },
                FaqItem {
                    id: "start-number",
                    question: "Can we keep our existing business number?",
                    answer: "Usually, yes. We can text-enable most existing landline and \
                        VoIP numbers without affecting voice service.",
                },
            ],
        },
        FaqCategory {
            name: "Day to day",
            icon: "chat",
            items: &[
                FaqItem {
                    id: "daily-inbox",
                    question: "Who answers when customers text back?",
                    answer: "You do, from a shared inbox your whole team can use. Replies \
                        are conversations, not tickets.",
                },
                FaqItem {
                    id: "daily-lists",
                    question: "Can we segment regulars from new customers?",
                    answer: "Lists and tags are built in; most lounges run separate \
                        campaigns for members, event attendees, and walk-ins.",
                },
            ],
        },
    ],
};

static PERCYTECH: FaqContent = FaqContent {
    categories: &[
        FaqCategory {
            name: "Platform",
            icon: "server",
            items: &[
                FaqItem {
                    id: "platform-hubs",
                    question: "What exactly is a hub?",
                    answer: "A hub is one branded storefront running on the shared \
                        platform: its own domain, copy, and theme over the same \
                        messaging infrastructure.",
                },
                FaqItem {
                    id: "platform-numbers",
                    question: "Do you host the phone numbers?",
                    answer: "Yes. Numbers are provisioned and hosted on our stack with \
                        managed sending reputation; you never deal with an upstream \
                        carrier portal.",
                },
                FaqItem {
                    id: "platform-api",
                    question: "Is there an API?",
                    answer: "Everything the hubs do goes through the same HTTP API you \
                        get. If the dashboard can do it, your integration can.",
                },
            ],
        },
        FaqCategory {
            name: "Delivery",
            icon: "gauge",
            items: &[
                FaqItem {
                    id: "delivery-visibility",
                    question: "How do we see what actually delivered?",
                    answer: "Delivery receipts are aggregated per carrier and per \
                        campaign. When a carrier filters, you see it the same day.",
                },
                FaqItem {
                    id: "delivery-throughput",
                    question: "What throughput can we expect?",
                    answer: "Shaped to your number type and registration: toll-free and \
                        10DLC lanes are provisioned to carrier-published limits.",
                },
            ],
        },
    ],
};

/// PercyMD and PercyText ship with Gnymble's block until their copy lands.
pub(crate) const fn owner(hub: Hub) -> Hub {
    match hub {
        Hub::PercyMd | Hub::PercyText => Hub::Gnymble,
        other => other,
    }
}

#[must_use]
pub fn faq_for(hub: Hub) -> &'static FaqContent {
    match owner(hub) {
        Hub::Gnymble | Hub::PercyMd | Hub::PercyText => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
    }
}

#[must_use]
pub fn faq_for_name(name: &str) -> &'static FaqContent {
    faq_for(Hub::resolve(name))
}
