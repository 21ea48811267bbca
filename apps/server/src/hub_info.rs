//! Identity endpoint: who am I being served as, and how should I look.

use axum::Json;
use phub::domain::constants::HUB_TAG;
use phub::domain::theme::ColorTheme;
use phub::features::resolver::ResolvedHub;
use phub::features::theming::theme_for;
use serde::Serialize;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn hub_info_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new().routes(routes!(hub_info_handler))
}

/// Resolved hub identity plus its presentation tokens, enough for a client to
/// brand itself without further lookups.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HubInfo {
    id: u16,
    name: &'static str,
    display_name: &'static str,
    domain: &'static str,
    icon_path: &'static str,
    description: &'static str,
    theme: &'static ColorTheme,
}

#[utoipa::path(
    get,
    path = "/hub",
    responses((status = OK, description = "Identity and theme of the hub resolved for this request")),
    tag = HUB_TAG,
)]
async fn hub_info_handler(ResolvedHub(hub): ResolvedHub) -> Json<HubInfo> {
    let meta = hub.metadata();
    Json(HubInfo {
        id: meta.id,
        name: meta.name,
        display_name: meta.display_name,
        domain: meta.domain,
        icon_path: meta.icon_path,
        description: meta.description,
        theme: theme_for(hub),
    })
}
