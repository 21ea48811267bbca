/// Error types specific to the theming feature.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A theme token was left empty; partial themes are rejected at startup.
    #[error("theme for hub '{hub}' has an empty token")]
    EmptyToken { hub: &'static str },

    /// Two hubs ended up with the same primary color.
    #[error("hubs '{first}' and '{second}' share a primary color")]
    SharedPrimary { first: &'static str, second: &'static str },
}
