//! # Theming Adapter
//!
//! One fully-populated [`ColorTheme`] per hub, exposed through total accessors
//! that follow the same fallback rule as the content store. Themes are fixed
//! records, never assembled from strings at runtime, so every hub's visual
//! contract is statically enumerable.

mod error;

pub use crate::error::ThemeError;

use phub_domain::Hub;
use phub_domain::registry::{FeatureSlice, InitializedSlice};
use phub_domain::theme::ColorTheme;
use std::sync::Arc;

static GNYMBLE: ColorTheme = ColorTheme {
    primary: "#d97706",
    secondary: "#1c1917",
    accent: "#fbbf24",
    text: "text-amber-600",
    text_hover: "hover:text-amber-500",
    background: "bg-amber-600",
    background_hover: "hover:bg-amber-500",
    background_light: "bg-amber-50",
    border: "border-amber-600",
    border_light: "border-amber-200",
    gradient: "from-amber-600 to-amber-800",
    shadow: "shadow-amber-600/20",
    contact_button: "bg-amber-600 hover:bg-amber-500 text-stone-950",
};

static PERCYTECH: ColorTheme = ColorTheme {
    primary: "#2563eb",
    secondary: "#0f172a",
    accent: "#60a5fa",
    text: "text-blue-600",
    text_hover: "hover:text-blue-500",
    background: "bg-blue-600",
    background_hover: "hover:bg-blue-500",
    background_light: "bg-blue-50",
    border: "border-blue-600",
    border_light: "border-blue-200",
    gradient: "from-blue-600 to-blue-900",
    shadow: "shadow-blue-600/20",
    contact_button: "bg-blue-600 hover:bg-blue-500 text-white",
};

static PERCYMD: ColorTheme = ColorTheme {
    primary: "#0d9488",
    secondary: "#134e4a",
    accent: "#2dd4bf",
    text: "text-teal-600",
    text_hover: "hover:text-teal-500",
    background: "bg-teal-600",
    background_hover: "hover:bg-teal-500",
    background_light: "bg-teal-50",
    border: "border-teal-600",
    border_light: "border-teal-200",
    gradient: "from-teal-600 to-teal-800",
    shadow: "shadow-teal-600/20",
    contact_button: "bg-teal-600 hover:bg-teal-500 text-white",
};

static PERCYTEXT: ColorTheme = ColorTheme {
    primary: "#16a34a",
    secondary: "#14532d",
    accent: "#4ade80",
    text: "text-green-600",
    text_hover: "hover:text-green-500",
    background: "bg-green-600",
    background_hover: "hover:bg-green-500",
    background_light: "bg-green-50",
    border: "border-green-600",
    border_light: "border-green-200",
    gradient: "from-green-600 to-green-800",
    shadow: "shadow-green-600/20",
    contact_button: "bg-green-600 hover:bg-green-500 text-white",
};

/// Theme for a hub. Total over the closed set; every hub owns its theme, there
/// is no alias table here.
#[must_use]
pub fn theme_for(hub: Hub) -> &'static ColorTheme {
    match hub {
        Hub::Gnymble => &GNYMBLE,
        Hub::PercyTech => &PERCYTECH,
        Hub::PercyMd => &PERCYMD,
        Hub::PercyText => &PERCYTEXT,
    }
}

/// Theme for an arbitrary tenant string; unknown names fall back to the
/// default hub's theme.
#[must_use]
pub fn theme_for_name(name: &str) -> &'static ColorTheme {
    theme_for(Hub::resolve(name))
}

/// Theming feature state.
#[derive(Debug, Clone)]
pub struct ThemingInner {}

/// Theming feature slice handle.
#[derive(Debug, Clone)]
pub struct Theming {
    inner: Arc<ThemingInner>,
}

impl Theming {
    pub fn new(inner: ThemingInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl std::ops::Deref for Theming {
    type Target = ThemingInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Theming {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Initialize the theming feature.
///
/// # Errors
/// Returns [`ThemeError`] when a theme has an empty token or when two hubs
/// share a primary color.
pub fn init() -> Result<InitializedSlice, ThemeError> {
    validate()?;

    tracing::info!("Theming slice initialized for {} hubs", Hub::all().count());

    Ok(InitializedSlice::new(Theming::new(ThemingInner {})))
}

/// Structural check: every hub's theme is fully populated and primaries are
/// pairwise distinct.
///
/// # Errors
/// Returns [`ThemeError::EmptyToken`] or [`ThemeError::SharedPrimary`] for the
/// first violation found.
pub fn validate() -> Result<(), ThemeError> {
    for hub in Hub::all() {
        if theme_for(hub).fields().iter().any(|token| token.is_empty()) {
            return Err(ThemeError::EmptyToken { hub: hub.name() });
        }
    }

    let hubs: Vec<Hub> = Hub::all().collect();
    for (i, &a) in hubs.iter().enumerate() {
        for &b in &hubs[i + 1..] {
            if theme_for(a).primary == theme_for(b).primary {
                return Err(ThemeError::SharedPrimary { first: a.name(), second: b.name() });
            }
        }
    }

    Ok(())
}
