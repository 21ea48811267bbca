//! Hub registry: the closed set of branded storefronts and their metadata.
//!
//! Every hub is known at compile time. The registry is a bijection between
//! lowercase name tokens and small numeric ids; nothing here is created,
//! mutated, or destroyed at runtime.
//!
//! Two lookup contracts live side by side and must not be confused:
//! * [`Hub::from_id`] is an explicit partial lookup; unknown ids yield `None`.
//! * [`Hub::resolve`] is total; unknown names degrade to [`Hub::DEFAULT`].

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

/// One branded storefront sharing the common platform.
///
/// Variant order is registration order and is stable: the first-registered
/// hub is the platform-wide fallback ([`Hub::DEFAULT`]).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Hub {
    Gnymble,
    PercyTech,
    PercyMd,
    PercyText,
}

/// Immutable display metadata for one hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HubMetadata {
    /// Small, stable, unique numeric id (used as a foreign-key tag on leads).
    pub id: u16,
    /// Lowercase machine token, equal to the hub's string form.
    pub name: &'static str,
    /// Human-readable brand name.
    pub display_name: &'static str,
    /// Canonical hostname for the storefront.
    pub domain: &'static str,
    /// Path to the hub logo asset.
    pub icon_path: &'static str,
    /// One-line tagline.
    pub description: &'static str,
}

const GNYMBLE_META: HubMetadata = HubMetadata {
    id: 1,
    name: "gnymble",
    display_name: "Gnymble",
    domain: "gnymble.com",
    icon_path: "/assets/hubs/gnymble.svg",
    description: "SMS that works for regulated industries",
};

const PERCYTECH_META: HubMetadata = HubMetadata {
    id: 2,
    name: "percytech",
    display_name: "PercyTech",
    domain: "percytech.com",
    icon_path: "/assets/hubs/percytech.svg",
    description: "The messaging platform behind the Percy hubs",
};

const PERCYMD_META: HubMetadata = HubMetadata {
    id: 3,
    name: "percymd",
    display_name: "PercyMD",
    domain: "percymd.com",
    icon_path: "/assets/hubs/percymd.svg",
    description: "Patient texting for busy practices",
};

const PERCYTEXT_META: HubMetadata = HubMetadata {
    id: 4,
    name: "percytext",
    display_name: "PercyText",
    domain: "percytext.com",
    icon_path: "/assets/hubs/percytext.svg",
    description: "Straightforward business texting",
};

impl Hub {
    /// The fallback hub substituted for unknown tenant identifiers.
    pub const DEFAULT: Self = Self::Gnymble;

    /// Full metadata record for this hub.
    #[must_use]
    pub const fn metadata(self) -> &'static HubMetadata {
        match self {
            Self::Gnymble => &GNYMBLE_META,
            Self::PercyTech => &PERCYTECH_META,
            Self::PercyMd => &PERCYMD_META,
            Self::PercyText => &PERCYTEXT_META,
        }
    }

    /// Stable numeric id.
    #[must_use]
    pub const fn id(self) -> u16 {
        self.metadata().id
    }

    /// Lowercase machine token.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.metadata().name
    }

    /// Human-readable brand name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.metadata().display_name
    }

    /// Canonical hostname.
    #[must_use]
    pub const fn domain(self) -> &'static str {
        self.metadata().domain
    }

    /// Path to the hub logo asset.
    #[must_use]
    pub const fn icon_path(self) -> &'static str {
        self.metadata().icon_path
    }

    /// One-line tagline.
    #[must_use]
    pub const fn description(self) -> &'static str {
        self.metadata().description
    }

    /// Reverse lookup by numeric id.
    ///
    /// Returns `None` for ids outside the closed set. Callers must branch on
    /// absence; this lookup never falls back to [`Hub::DEFAULT`].
    #[must_use]
    pub const fn from_id(id: u16) -> Option<Self> {
        match id {
            1 => Some(Self::Gnymble),
            2 => Some(Self::PercyTech),
            3 => Some(Self::PercyMd),
            4 => Some(Self::PercyText),
            _ => None,
        }
    }

    /// Strict, case-sensitive name lookup. `None` for any non-member token.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Total name lookup: unknown, empty, or mis-cased tokens resolve to
    /// [`Hub::DEFAULT`]. Presentation code can call this unconditionally.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or(Self::DEFAULT)
    }

    /// All hubs in stable registration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl fmt::Display for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type-guard over arbitrary strings: true only for members of the closed set.
/// Never panics, for any input.
#[must_use]
pub fn is_valid_name(value: &str) -> bool {
    Hub::parse(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_constants() {
        assert_eq!(Hub::Gnymble.name(), crate::constants::GNYMBLE);
        assert_eq!(Hub::PercyTech.name(), crate::constants::PERCYTECH);
        assert_eq!(Hub::PercyMd.name(), crate::constants::PERCYMD);
        assert_eq!(Hub::PercyText.name(), crate::constants::PERCYTEXT);
    }

    #[test]
    fn default_is_first_registered() {
        assert_eq!(Hub::all().next(), Some(Hub::DEFAULT));
    }
}
