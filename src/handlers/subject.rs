//! Subject handlers. Same shape as the student ones; bodies are subject documents.

use crate::error::AppError;
use crate::model::{Subject, SubjectDocument};
use crate::service::SubjectService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub const GREETING: &str = "Estas en el servicio de materias";

pub async fn home() -> &'static str {
    GREETING
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SubjectDocument>>, AppError> {
    Ok(Json(SubjectService::all_subjects(&state.pool).await?))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<SubjectDocument>>, AppError> {
    Ok(Json(SubjectService::get_subject(&state.pool, id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Subject>,
) -> Result<Json<SubjectDocument>, AppError> {
    Ok(Json(SubjectService::create_subject(&state.pool, body).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Subject>,
) -> Result<Json<SubjectDocument>, AppError> {
    Ok(Json(SubjectService::modify_subject(&state.pool, id, body).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, AppError> {
    SubjectService::delete_subject(&state.pool, id).await?;
    Ok(StatusCode::OK)
}
