//! HTTP surface for the content store: tenant-correct blocks keyed off the
//! request's resolved hub.

use crate::{
    about_for, business_types_for, cta_for, faq_for, hero_for, pricing_for, problem_solution_for,
    seo_for, stats_for, testimonials_for,
};
use axum::Json;
use phub_domain::Hub;
use phub_domain::constants::HUB_TAG;
use phub_domain::content::{
    AboutContent, BusinessType, CtaContent, FaqContent, HeroContent, PricingContent,
    ProblemSolutionContent, SeoContent, StatsContent, TestimonialsContent,
};
use phub_resolver::ResolvedHub;
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes serving per-hub content blocks. Every endpoint is total: an
/// unrecognized or absent host already degraded to the default hub in the
/// resolver, so handlers never fail.
pub fn content_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new()
        .routes(routes!(hubs_handler))
        .routes(routes!(hero_handler))
        .routes(routes!(cta_handler))
        .routes(routes!(problem_solution_handler))
        .routes(routes!(stats_handler))
        .routes(routes!(testimonials_handler))
        .routes(routes!(faq_handler))
        .routes(routes!(about_handler))
        .routes(routes!(pricing_handler))
        .routes(routes!(seo_handler))
        .routes(routes!(business_types_handler))
}

/// One registry entry in the listing endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct HubSummary {
    id: u16,
    name: &'static str,
    display_name: &'static str,
    domain: &'static str,
    icon_path: &'static str,
    description: &'static str,
}

impl From<Hub> for HubSummary {
    fn from(hub: Hub) -> Self {
        let meta = hub.metadata();
        Self {
            id: meta.id,
            name: meta.name,
            display_name: meta.display_name,
            domain: meta.domain,
            icon_path: meta.icon_path,
            description: meta.description,
        }
    }
}

#[utoipa::path(
    get,
    path = "/hub/hubs",
    responses((status = OK, description = "All registered hubs in stable order", body = [HubSummary])),
    tag = HUB_TAG,
)]
async fn hubs_handler() -> Json<Vec<HubSummary>> {
    Json(Hub::all().map(HubSummary::from).collect())
}

#[utoipa::path(
    get,
    path = "/hub/content/hero",
    responses((status = OK, description = "Hero copy for the resolved hub")),
    tag = HUB_TAG,
)]
async fn hero_handler(ResolvedHub(hub): ResolvedHub) -> Json<&'static HeroContent> {
    Json(hero_for(hub))
}

#[utoipa::path(
    get,
    path = "/hub/content/cta",
    responses((status = OK, description = "Call-to-action copy for the resolved hub")),
    tag = HUB_TAG,
)]
async fn cta_handler(ResolvedHub(hub): ResolvedHub) -> Json<&'static CtaContent> {
    Json(cta_for(hub))
}

#[utoipa::path(
    get,
    path = "/hub/content/problem-solution",
    responses((status = OK, description = "Problem/solution copy for the resolved hub")),
    tag = HUB_TAG,
)]
async fn problem_solution_handler(
    ResolvedHub(hub): ResolvedHub,
) -> Json<&'static ProblemSolutionContent> {
    Json(problem_solution_for(hub))
}

#[utoipa::path(
    get,
    path = "/hub/content/stats",
    responses((status = OK, description = "Headline statistics for the resolved hub")),
    tag = HUB_TAG,
)]
async fn stats_handler(ResolvedHub(hub): ResolvedHub) -> Json<&'static StatsContent> {
    Json(stats_for(hub))
}

#[utoipa::path(
    get,
    path = "/hub/content/testimonials",
    responses((status = OK, description = "Testimonials for the resolved hub")),
    tag = HUB_TAG,
)]
async fn testimonials_handler(ResolvedHub(hub): ResolvedHub) -> Json<&'static TestimonialsContent> {
    Json(testimonials_for(hub))
}

#[utoipa::path(
    get,
    path = "/hub/content/faq",
    responses((status = OK, description = "FAQ categories for the resolved hub")),
    tag = HUB_TAG,
)]
async fn faq_handler(ResolvedHub(hub): ResolvedHub) -> Json<&'static FaqContent> {
    Json(faq_for(hub))
}

#[utoipa::path(
    get,
    path = "/hub/content/about",
    responses((status = OK, description = "About-page narrative for the resolved hub")),
    tag = HUB_TAG,
)]
async fn about_handler(ResolvedHub(hub): ResolvedHub) -> Json<&'static AboutContent> {
    Json(about_for(hub))
}

#[utoipa::path(
    get,
    path = "/hub/content/pricing",
    responses((status = OK, description = "Pricing-page copy for the resolved hub")),
    tag = HUB_TAG,
)]
async fn pricing_handler(ResolvedHub(hub): ResolvedHub) -> Json<&'static PricingContent> {
    Json(pricing_for(hub))
}

#[utoipa::path(
    get,
    path = "/hub/content/seo",
    responses((status = OK, description = "Page metadata for the resolved hub")),
    tag = HUB_TAG,
)]
async fn seo_handler(ResolvedHub(hub): ResolvedHub) -> Json<&'static SeoContent> {
    Json(seo_for(hub))
}

#[utoipa::path(
    get,
    path = "/hub/content/business-types",
    responses((status = OK, description = "Industries the resolved hub serves")),
    tag = HUB_TAG,
)]
async fn business_types_handler(ResolvedHub(hub): ResolvedHub) -> Json<&'static [BusinessType]> {
    Json(business_types_for(hub))
}
