use axum::extract::{Path, State};
use axum::Json;

use prospect_common::error::ProspectError;

use crate::error::ApiError;
use crate::taxonomy::responses::{ListSectorsResponse, ListSubSectorsResponse};
use crate::AppState;

pub async fn list_sectors(
    State(state): State<AppState>,
) -> Result<Json<ListSectorsResponse>, ApiError> {
    let data = state.taxonomy.sectors();
    Ok(Json(ListSectorsResponse {
        data,
        count: data.len(),
    }))
}

pub async fn list_sub_sectors(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ListSubSectorsResponse>, ApiError> {
    let sector = state
        .taxonomy
        .find_sector(&key)
        .ok_or_else(|| ApiError(ProspectError::NotFound(format!("sector not found: {key}"))))?;

    Ok(Json(ListSubSectorsResponse {
        sector: sector.key,
        data: sector.sub_sectors,
        count: sector.sub_sectors.len(),
    }))
}
