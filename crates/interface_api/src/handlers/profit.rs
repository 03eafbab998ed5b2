//! Profit handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::warn;

use crate::dto::profit::{ProfitQuery, ProfitResponse};
use crate::{error::ApiError, AppState};

/// Computes the profit of a lump-sum investment
///
/// `GET /profit?scheme_code=&start_date=&end_date=&capital=`
pub async fn calculate_profit(
    State(state): State<AppState>,
    query: Result<Query<ProfitQuery>, QueryRejection>,
) -> Result<Json<ProfitResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let request = query.to_request()?;

    let result = state.service.evaluate(&request).await.map_err(|err| {
        warn!(scheme_code = %request.scheme_code, error = %err, "Profit calculation failed");
        ApiError::from(err)
    })?;

    Ok(Json(ProfitResponse::new(query, result)))
}
