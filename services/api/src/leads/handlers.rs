use axum::extract::State;
use axum::Json;

use prospect_common::error::ProspectError;
use prospect_common::types::LeadInput;
use prospect_scoring::{classify, ProductFitResult, ScoredLead};

use crate::error::ApiError;
use crate::AppState;

pub(crate) fn validate_lead(lead: &LeadInput) -> Result<(), ProspectError> {
    if lead.company.trim().is_empty() {
        return Err(ProspectError::Validation(
            "company must not be empty".to_string(),
        ));
    }
    if lead.sector.trim().is_empty() {
        return Err(ProspectError::Validation(
            "sector must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub async fn classify_lead(
    State(state): State<AppState>,
    Json(lead): Json<LeadInput>,
) -> Result<Json<ProductFitResult>, ApiError> {
    validate_lead(&lead)?;
    Ok(Json(classify(&state.taxonomy, &lead)))
}

pub async fn score_lead(
    State(state): State<AppState>,
    Json(lead): Json<LeadInput>,
) -> Result<Json<ScoredLead>, ApiError> {
    validate_lead(&lead)?;
    Ok(Json(ScoredLead::build(&state.taxonomy, lead)))
}
