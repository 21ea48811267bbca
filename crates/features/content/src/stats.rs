//! Headline statistics.

use phub_domain::Hub;
use phub_domain::content::{Stat, StatsContent};

static GNYMBLE: StatsContent = StatsContent {
    stats: &[
        Stat {
            value: "98%",
            label: "campaign approval rate",
            description: "Regulated-vertical registrations we've taken through carrier review",
        },
        Stat {
            value: "300+",
            label: "regulated businesses",
            description: "Cigar retailers, distilleries, ranges, and breweries texting today",
        },
        Stat {
            value: "4.2x",
            label: "more repeat visits",
            description: "Average lift for lounges running monthly event campaigns",
        },
        Stat {
            value: "0",
            label: "accounts dropped",
            description: "We have never cut a customer for being in a legal industry",
        },
    ],
};

static PERCYTECH: StatsContent = StatsContent {
    stats: &[
        Stat {
            value: "99.95%",
            label: "platform uptime",
            description: "Trailing twelve months, status page public",
        },
        Stat {
            value: "12M+",
            label: "messages per month",
            description: "Across every hub running on the platform",
        },
        Stat {
            value: "<3s",
            label: "median delivery",
            description: "Submission to handset across major US carriers",
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
pub fn stats_for(hub: Hub) -> &'static StatsContent {
    match owner(hub) {
        Hub::Gnymble | Hub::PercyMd | Hub::PercyText => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
    }
}

#[must_use]
pub fn stats_for_name(name: &str) -> &'static StatsContent {
    stats_for(Hub::resolve(name))
}
