//! Room type REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateTipeKamarRequest, TipeKamarResponse, UpdateTipeKamarRequest};
use crate::domain::room_type::RoomTypePatch;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};

/// Room type handler state
#[derive(Clone)]
pub struct RoomTypeState {
    pub repos: Arc<dyn RepositoryProvider>,
}

pub async fn list_room_types(
    State(state): State<RoomTypeState>,
) -> Result<Json<Vec<TipeKamarResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let types = state
        .repos
        .room_types()
        .find_all()
        .await
        .map_err(error_response)?;
    Ok(Json(types.into_iter().map(Into::into).collect()))
}

pub async fn get_room_type(
    State(state): State<RoomTypeState>,
    Path(id): Path<i32>,
) -> Result<Json<TipeKamarResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.room_types().find_by_id(id).await {
        Ok(Some(t)) => Ok(Json(t.into())),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Tipe kamar {} not found", id))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn create_room_type(
    State(state): State<RoomTypeState>,
    ValidatedJson(req): ValidatedJson<CreateTipeKamarRequest>,
) -> Result<(StatusCode, Json<TipeKamarResponse>), (StatusCode, Json<ApiResponse<()>>)> {
    let saved = state
        .repos
        .room_types()
        .save(req.into())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// PUT: full replacement.
pub async fn replace_room_type(
    State(state): State<RoomTypeState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CreateTipeKamarRequest>,
) -> Result<Json<TipeKamarResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let patch = RoomTypePatch {
        nama_tipe: Some(req.nama_tipe),
        harga_per_bulan: Some(req.harga_per_bulan),
        fasilitas: Some(req.fasilitas),
    };
    let updated = state
        .repos
        .room_types()
        .update(id, patch)
        .await
        .map_err(error_response)?;
    Ok(Json(updated.into()))
}

/// PATCH: partial update.
pub async fn update_room_type(
    State(state): State<RoomTypeState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateTipeKamarRequest>,
) -> Result<Json<TipeKamarResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let updated = state
        .repos
        .room_types()
        .update(id, req.into())
        .await
        .map_err(error_response)?;
    Ok(Json(updated.into()))
}

pub async fn delete_room_type(
    State(state): State<RoomTypeState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .repos
        .room_types()
        .delete(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success("Tipe kamar deleted".to_string())))
}
