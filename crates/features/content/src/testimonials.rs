//! Customer testimonials.

use phub_domain::Hub;
use phub_domain::content::{Testimonial, TestimonialsContent};

static GNYMBLE: TestimonialsContent = TestimonialsContent {
    items: &[
        Testimonial {
            category: "Cigar retail",
            quote: "Two platforms shut us down mid-campaign before we switched here. \
                We've been sending event invites for eighteen months without a single \
                hiccup.",
            author: "Marcus T.",
            company: "Ashton & Oak Cigar Lounge",
            location: "Charleston, SC",
        },
        Testimonial {
            category: "Distillery",
            quote: "Our release-day texts sell out allocations in hours. The opt-in \
                flow they set up keeps our lawyer comfortable, which is saying something.",
            author: "Dana R.",
            company: "Copper Fork Distilling",
            location: "Louisville, KY",
        },
        Testimonial {
            category: "Firearms training",
            quote: "Class reminders alone cut our no-shows in half. And nobody on \
                the support line flinched when we said what we do.",
            author: "Bill H.",
            company: "Northline Range & Training",
            location: "Boise, ID",
        },
    ],
};

static PERCYTECH: TestimonialsContent = TestimonialsContent {
    items: &[
        Testimonial {
            category: "Platform",
            quote: "We moved three brands onto PercyTech in a quarter. The per-carrier \
                delivery numbers ended every 'did it send?' argument we used to have.",
            author: "Priya K.",
            company: "Westgate Commerce Group",
            location: "Austin, TX",
        },
        Testimonial {
            category: "Agency",
            quote: "One registration, four storefronts, zero surprises at review time. \
                That's the whole pitch and it's true.",
            author: "Tom S.",
            company: "Harbor Digital",
            location: "Portland, OR",
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
pub fn testimonials_for(hub: Hub) -> &'static TestimonialsContent {
    match owner(hub) {
        Hub::Gnymble | Hub::PercyMd | Hub::PercyText => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
    }
}

#[must_use]
pub fn testimonials_for_name(name: &str) -> &'static TestimonialsContent {
    testimonials_for(Hub::resolve(name))
}
