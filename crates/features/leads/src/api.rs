//! HTTP surface for contact submissions.

use crate::{LeadError, Leads};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use phub_domain::constants::LEADS_TAG;
use phub_kernel::safe_nanoid;
use phub_kernel::server::ApiState;
use phub_resolver::ResolvedHub;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes accepting contact submissions.
pub fn leads_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(contact_handler))
}

/// An inbound contact submission.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Field-level checks the boundary enforces before accepting a submission.
    ///
    /// # Errors
    /// Returns [`LeadError::InvalidSubmission`] naming the first bad field.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().is_empty() {
            return Err(LeadError::InvalidSubmission("name must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(LeadError::InvalidSubmission("email must contain '@'"));
        }
        if self.message.trim().is_empty() {
            return Err(LeadError::InvalidSubmission("message must not be empty"));
        }
        Ok(())
    }
}

/// Boundary reply: a success flag, a quotable reference on acceptance, an
/// error string on rejection.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    fn accepted(reference: String) -> Self {
        Self { success: true, reference: Some(reference), error: None }
    }

    fn rejected(error: String) -> Self {
        Self { success: false, reference: None, error: Some(error) }
    }
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidSubmission(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(ContactResponse::rejected(self.to_string()))).into_response()
    }
}

#[utoipa::path(
    post,
    path = "/contact",
    request_body = ContactSubmission,
    responses(
        (status = OK, description = "Submission accepted", body = ContactResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Submission rejected", body = ContactResponse),
    ),
    tag = LEADS_TAG,
)]
async fn contact_handler(
    State(state): State<ApiState>,
    ResolvedHub(hub): ResolvedHub,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ContactResponse>, LeadError> {
    submission.validate()?;

    let reference = safe_nanoid!();

    // The hub id is the only tenant touchpoint the downstream tables need.
    tracing::info!(
        hub = hub.id(),
        reference = %reference,
        name = %submission.name,
        email = %submission.email,
        "contact submission accepted"
    );

    if let Some(leads) = state.get_slice::<Leads>()
        && let Some(endpoint) = &leads.forward_endpoint
    {
        tracing::debug!(endpoint = %endpoint, reference = %reference, "forward endpoint configured");
    }

    Ok(Json(ContactResponse::accepted(reference)))
}
