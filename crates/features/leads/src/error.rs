/// Error types specific to the leads feature.
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    /// A submission failed field validation.
    #[error("invalid submission: {0}")]
    InvalidSubmission(&'static str),
}
