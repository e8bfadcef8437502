//! Tenant REST API handlers
//!
//! Mutations delegate to `TenancyService` so the room-status side of every
//! check-in/check-out/transfer commits with the tenant write.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{
    CreatePenyewaRequest, PenyewaListParams, PenyewaResponse, UpdatePenyewaRequest,
};
use crate::application::TenancyService;
use crate::domain::tenant::{NewTenant, TenantFilter, TenantUpdate};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};

/// Tenant handler state
#[derive(Clone)]
pub struct TenantState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub tenancy: Arc<TenancyService>,
}

impl TenantState {
    /// Re-read the freshly written tenant with its room resolved.
    async fn detail(
        &self,
        id: i32,
    ) -> Result<PenyewaResponse, (StatusCode, Json<ApiResponse<()>>)> {
        self.repos
            .tenants()
            .find_by_id(id)
            .await
            .map_err(error_response)?
            .map(Into::into)
            .ok_or_else(|| error_response(DomainError::not_found("Penyewa", id)))
    }
}

pub async fn list_tenants(
    State(state): State<TenantState>,
    Query(params): Query<PenyewaListParams>,
) -> Result<Json<Vec<PenyewaResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let filter = TenantFilter {
        kamar_id: params.kamar,
        search: params.search,
    };
    let tenants = state
        .repos
        .tenants()
        .find_filtered(&filter)
        .await
        .map_err(error_response)?;
    Ok(Json(tenants.into_iter().map(Into::into).collect()))
}

pub async fn get_tenant(
    State(state): State<TenantState>,
    Path(id): Path<i32>,
) -> Result<Json<PenyewaResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.tenants().find_by_id(id).await {
        Ok(Some(t)) => Ok(Json(t.into())),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Penyewa {} not found", id))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

/// Check-in. A supplied `kamar` becomes ISI in the same transaction.
pub async fn create_tenant(
    State(state): State<TenantState>,
    ValidatedJson(req): ValidatedJson<CreatePenyewaRequest>,
) -> Result<(StatusCode, Json<PenyewaResponse>), (StatusCode, Json<ApiResponse<()>>)> {
    let new = NewTenant {
        nama_lengkap: req.nama_lengkap,
        nomor_hp: req.nomor_hp,
        ktp_foto: req.ktp_foto,
        kamar_id: req.kamar,
        tanggal_masuk: req.tanggal_masuk.unwrap_or_else(|| Utc::now().date_naive()),
        durasi_sewa_bulan: req.durasi_sewa_bulan,
    };
    let tenant = state.tenancy.check_in(new).await.map_err(error_response)?;
    let detail = state.detail(tenant.id).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT: full replacement. An absent `kamar` clears the link (and vacates the
/// old room); a changed one is a transfer.
pub async fn replace_tenant(
    State(state): State<TenantState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CreatePenyewaRequest>,
) -> Result<Json<PenyewaResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let update = TenantUpdate {
        nama_lengkap: req.nama_lengkap,
        nomor_hp: req.nomor_hp,
        ktp_foto: req.ktp_foto,
        kamar_id: req.kamar,
        tanggal_masuk: req.tanggal_masuk.unwrap_or_else(|| Utc::now().date_naive()),
        durasi_sewa_bulan: req.durasi_sewa_bulan,
    };
    let tenant = state
        .tenancy
        .update(id, update)
        .await
        .map_err(error_response)?;
    Ok(Json(state.detail(tenant.id).await?))
}

/// PATCH: partial update. `"kamar": null` clears the link; an absent `kamar`
/// leaves it alone.
pub async fn update_tenant(
    State(state): State<TenantState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdatePenyewaRequest>,
) -> Result<Json<PenyewaResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let existing = state
        .repos
        .tenants()
        .find_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or_else(|| error_response(DomainError::not_found("Penyewa", id)))?
        .tenant;

    let update = TenantUpdate {
        nama_lengkap: req.nama_lengkap.unwrap_or(existing.nama_lengkap),
        nomor_hp: req.nomor_hp.unwrap_or(existing.nomor_hp),
        ktp_foto: req.ktp_foto.or(existing.ktp_foto),
        kamar_id: req.kamar.unwrap_or(existing.kamar_id),
        tanggal_masuk: req.tanggal_masuk.unwrap_or(existing.tanggal_masuk),
        durasi_sewa_bulan: req.durasi_sewa_bulan.unwrap_or(existing.durasi_sewa_bulan),
    };
    let tenant = state
        .tenancy
        .update(id, update)
        .await
        .map_err(error_response)?;
    Ok(Json(state.detail(tenant.id).await?))
}

/// Check-out. The linked room (if any) becomes KOSONG in the same
/// transaction; payments go with the tenant.
pub async fn delete_tenant(
    State(state): State<TenantState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.tenancy.check_out(id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success("Penyewa deleted".to_string())))
}
