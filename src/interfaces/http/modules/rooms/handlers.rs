//! Room REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{parse_status, CreateKamarRequest, KamarListParams, KamarResponse, UpdateKamarRequest};
use crate::domain::room::{NewRoom, RoomFilter, RoomPatch, RoomStatus};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{error_response, ApiResponse, ValidatedJson};

/// Room handler state
#[derive(Clone)]
pub struct RoomState {
    pub repos: Arc<dyn RepositoryProvider>,
}

pub async fn list_rooms(
    State(state): State<RoomState>,
    Query(params): Query<KamarListParams>,
) -> Result<Json<Vec<KamarResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let status = params
        .status
        .as_deref()
        .map(parse_status)
        .transpose()
        .map_err(error_response)?;

    let filter = RoomFilter {
        status,
        lantai: params.lantai,
        tipe_id: params.tipe,
        search: params.search,
    };
    let rooms = state
        .repos
        .rooms()
        .find_filtered(&filter)
        .await
        .map_err(error_response)?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

pub async fn get_room(
    State(state): State<RoomState>,
    Path(id): Path<i32>,
) -> Result<Json<KamarResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.rooms().find_by_id(id).await {
        Ok(Some(room)) => Ok(Json(room.into())),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Kamar {} not found", id))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn create_room(
    State(state): State<RoomState>,
    ValidatedJson(req): ValidatedJson<CreateKamarRequest>,
) -> Result<(StatusCode, Json<KamarResponse>), (StatusCode, Json<ApiResponse<()>>)> {
    let status = match req.status.as_deref() {
        Some(s) => parse_status(s).map_err(error_response)?,
        None => RoomStatus::default(),
    };

    let new = NewRoom {
        nomor_kamar: req.nomor_kamar,
        tipe_id: req.tipe,
        lantai: req.lantai,
        status,
    };
    let saved = state
        .repos
        .rooms()
        .save(new)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// PUT: full replacement.
pub async fn replace_room(
    State(state): State<RoomState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<CreateKamarRequest>,
) -> Result<Json<KamarResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let status = req
        .status
        .as_deref()
        .map(parse_status)
        .transpose()
        .map_err(error_response)?;

    let patch = RoomPatch {
        nomor_kamar: Some(req.nomor_kamar),
        tipe_id: Some(req.tipe),
        lantai: Some(req.lantai),
        status,
    };
    let updated = state
        .repos
        .rooms()
        .update(id, patch)
        .await
        .map_err(error_response)?;
    Ok(Json(updated.into()))
}

/// PATCH: partial update.
pub async fn update_room(
    State(state): State<RoomState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateKamarRequest>,
) -> Result<Json<KamarResponse>, (StatusCode, Json<ApiResponse<()>>)> {
    let status = req
        .status
        .as_deref()
        .map(parse_status)
        .transpose()
        .map_err(error_response)?;

    let patch = RoomPatch {
        nomor_kamar: req.nomor_kamar,
        tipe_id: req.tipe,
        lantai: req.lantai,
        status,
    };
    let updated = state
        .repos
        .rooms()
        .update(id, patch)
        .await
        .map_err(error_response)?;
    Ok(Json(updated.into()))
}

pub async fn delete_room(
    State(state): State<RoomState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .repos
        .rooms()
        .delete(id)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success("Kamar deleted".to_string())))
}
