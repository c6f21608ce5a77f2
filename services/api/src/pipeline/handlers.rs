use axum::extract::State;
use axum::Json;

use prospect_common::error::ProspectError;
use prospect_scoring::{
    action_items, group_by_product, group_by_tier, pipeline_stats, rank, top_by_product,
    ScoredLead,
};

use crate::error::ApiError;
use crate::leads::handlers::validate_lead;
use crate::pipeline::requests::PipelineRequest;
use crate::pipeline::responses::{PipelineReportResponse, RankResponse};
use crate::AppState;

fn score_batch(state: &AppState, request: PipelineRequest) -> Result<Vec<ScoredLead>, ApiError> {
    for (i, lead) in request.leads.iter().enumerate() {
        validate_lead(lead).map_err(|e| ProspectError::Validation(format!("lead {i}: {e}")))?;
    }
    Ok(request
        .leads
        .into_iter()
        .map(|lead| ScoredLead::build(&state.taxonomy, lead))
        .collect())
}

pub async fn rank_leads(
    State(state): State<AppState>,
    Json(request): Json<PipelineRequest>,
) -> Result<Json<RankResponse>, ApiError> {
    let scored = score_batch(&state, request)?;
    let data = rank(scored);
    let count = data.len();
    Ok(Json(RankResponse { data, count }))
}

pub async fn pipeline_report(
    State(state): State<AppState>,
    Json(request): Json<PipelineRequest>,
) -> Result<Json<PipelineReportResponse>, ApiError> {
    let scored = score_batch(&state, request)?;
    let count = scored.len();

    tracing::info!(count, "building pipeline report");

    let by_product = group_by_product(&scored);
    let by_tier = group_by_tier(&scored);
    let actions = action_items(&scored);
    let top = top_by_product(&scored);
    let stats = pipeline_stats(&scored);
    let ranked = rank(scored);

    Ok(Json(PipelineReportResponse {
        ranked,
        by_product,
        by_tier,
        action_items: actions,
        top_by_product: top,
        stats,
        count,
    }))
}
