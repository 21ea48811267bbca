//! Color theme: a fixed record of presentation tokens per hub.
//!
//! Themes are tagged-variant lookups (one static record per hub in `phub-theming`),
//! never assembled from strings at runtime, so every hub's visual contract is
//! statically enumerable.

use serde::Serialize;

/// Fully-populated presentation tokens for one hub. No field is optional:
/// a partial theme is a defect, not a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    /// Brand hex triples.
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    /// Semantic class tokens consumed by the UI layer as-is.
    pub text: &'static str,
    pub text_hover: &'static str,
    pub background: &'static str,
    pub background_hover: &'static str,
    pub background_light: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub gradient: &'static str,
    pub shadow: &'static str,
    pub contact_button: &'static str,
}

impl ColorTheme {
    /// All fields in declaration order, for structural checks.
    #[must_use]
    pub const fn fields(&self) -> [&'static str; 13] {
        [
            self.primary,
            self.secondary,
            self.accent,
            self.text,
            self.text_hover,
            self.background,
            self.background_hover,
            self.background_light,
            self.border,
            self.border_light,
            self.gradient,
            self.shadow,
            self.contact_button,
        ]
    }
}
