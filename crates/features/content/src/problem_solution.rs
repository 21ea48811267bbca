//! Problem/solution copy.

use phub_domain::Hub;
use phub_domain::content::ProblemSolutionContent;

static GNYMBLE: ProblemSolutionContent = ProblemSolutionContent {
    title_lead: "Your industry isn't the problem.",
    title_accent: "Your SMS vendor is.",
    description: "Carriers call it SHAFT: sex, hate, alcohol, firearms, tobacco. \
        Mainstream platforms bundle all five with 'prohibited' and shut the door. \
        We read the actual rules instead.",
    deliver: &[
        "Carrier campaign registration written for regulated verticals",
        "Age-gated opt-in flows that satisfy both carriers and your lawyer",
        "A human who answers when a filter flags your traffic",
        "Message templates reviewed against current carrier policy",
    ],
    others_miss: &[
        "Blanket bans on whole industries regardless of legality",
        "Silent message filtering you discover weeks later",
        "Compliance advice that amounts to 'don't send that'",
    ],
    badge: "Built for SHAFT-adjacent businesses",
};

static PERCYTECH: ProblemSolutionContent = ProblemSolutionContent {
    title_lead: "Messaging APIs are easy.",
    title_accent: "Delivery is not.",
    description: "Any vendor can accept your POST request. What happens between \
        your request and the handset is where messaging businesses live or die.",
    deliver: &[
        "Per-carrier delivery telemetry on every campaign",
        "Number pools with managed sending reputation",
        "Throughput shaping tuned to carrier limits, not vendor guesses",
        "One registration shared across your branded hubs",
    ],
    others_miss: &[
        "Fire-and-forget APIs with no delivery feedback",
        "Shared short codes one bad actor away from a block",
        "Rate limits discovered in production",
    ],
    badge: "Infrastructure, not middleware",
};

/// PercyMD and PercyText ship with Gnymble's block until their copy lands.
pub(crate) const fn owner(hub: Hub) -> Hub {
    match hub {
        Hub::PercyMd | Hub::PercyText => Hub::Gnymble,
        other => other,
    }
}

#[must_use]
pub fn problem_solution_for(hub: Hub) -> &'static ProblemSolutionContent {
    match owner(hub) {
        Hub::Gnymble | Hub::PercyMd | Hub::PercyText => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
    }
}

#[must_use]
pub fn problem_solution_for_name(name: &str) -> &'static ProblemSolutionContent {
    problem_solution_for(Hub::resolve(name))
}
