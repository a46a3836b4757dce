use axum::extract::{Query, State};
use axum::response::IntoResponse;
use std::collections::HashMap;

use crate::config;
use crate::models::{build_summary, parse_selection, AppState};
use crate::templates::PricingTemplate;

use super::helpers::{absolute_url_from_state, render_template};

/// The pricing page. Selection state arrives in the query string: a plan
/// card submits `plan` alone, the configuration panel submits `plan` plus
/// `gpu`/`memory`/`alias`.
pub async fn pricing_get(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let selection = parse_selection(&state.catalog, &q);
    let summary = build_summary(&selection);
    tracing::debug!(plan = %selection.plan.name, ready = summary.ready, "Rendering pricing page");
    render_template(PricingTemplate {
        platform_name: state.platform_name.clone(),
        base_url: state.public_base_url.clone(),
        tagline: config::PLATFORM_TAGLINE,
        home_url: absolute_url_from_state(&state, "/"),
        plans: state.catalog.plans(),
        gpu_options: state.catalog.gpu_options(),
        memory_options: state.catalog.memory_options(),
        state: &selection,
        summary,
    })
}
