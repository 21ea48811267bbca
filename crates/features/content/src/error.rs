/// Error types specific to the content feature.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A content block failed the structural completeness check at startup.
    #[error("content for hub '{hub}', section '{section}' is incomplete: {detail}")]
    Incomplete { hub: &'static str, section: &'static str, detail: &'static str },
}
