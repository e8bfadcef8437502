//! Payment REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateRiwayatBayarRequest, RiwayatBayarListParams, RiwayatBayarResponse,
    UpdateRiwayatBayarRequest,
};
use crate::domain::payment::PaymentFilter;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{
    error_response, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};

/// Payment handler state
#[derive(Clone)]
pub struct PaymentState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Paginated, unlike the other listings: payment history grows unbounded.
pub async fn list_payments(
    State(state): State<PaymentState>,
    Query(filter): Query<RiwayatBayarListParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<RiwayatBayarResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let (page, limit) = pagination.clamped();
    let filter = PaymentFilter {
        penyewa_id: filter.penyewa,
    };

    let result = state
        .repos
        .payments()
        .find_page(&filter, page, limit)
        .await
        .map_err(error_response)?;

    let items: Vec<RiwayatBayarResponse> = result.items.into_iter().map(Into::into).collect();
    Ok(Json(PaginatedResponse::new(items, result.total, page, limit)))
}

pub async fn get_payment(
    State(state): State<PaymentState>,
    Path(id): Path<i32>,
) -> Result<Json<RiwayatBayarResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.payments().find_by_id(id).await {
        Ok(Some(p)) => Ok(Json(p.into())),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "Riwayat pembayaran {} not found",
                id
            ))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn create_payment(
    State(state): State<PaymentState>,
    ValidatedJson(req): ValidatedJson<CreateRiwayatBayarRequest>,
) -> Result<(StatusCode, Json<RiwayatBayarResponse>), (StatusCode, Json<ApiResponse<()>>)> {
    let saved = state
        .repos
        .payments()
        .save(req.into())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// PUT and PATCH share the same partial semantics here: only `jumlah`,
/// `keterangan` and `bukti_transfer` are writable at all.
pub async fn update_payment(
    State(state): State<PaymentState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateRiwayatBayarRequest>,
) -> Result<Json<RiwayatBayarResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let updated = state
        .repos
        .payments()
        .update(id, req.into())
        .await
        .map_err(error_response)?;
    Ok(Json(updated.into()))
}

pub async fn delete_payment(
    State(state): State<PaymentState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .repos
        .payments()
        .delete(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        "Riwayat pembayaran deleted".to_string(),
    )))
}
