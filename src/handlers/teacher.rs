//! Teacher handlers; responses are teacher trees.

use crate::error::AppError;
use crate::model::{Teacher, TeacherDocument};
use crate::service::TeacherService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub const GREETING: &str = "Estas en el servicio de profesores";

pub async fn home() -> &'static str {
    GREETING
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TeacherDocument>>, AppError> {
    Ok(Json(TeacherService::all_teachers(&state.pool).await?))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<TeacherDocument>>, AppError> {
    Ok(Json(TeacherService::get_teacher(&state.pool, id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Teacher>,
) -> Result<Json<TeacherDocument>, AppError> {
    Ok(Json(TeacherService::create_teacher(&state.pool, body).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Teacher>,
) -> Result<Json<TeacherDocument>, AppError> {
    Ok(Json(TeacherService::modify_teacher(&state.pool, id, body).await?))
}

/// Cascades to the teacher's subjects and their students.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, AppError> {
    TeacherService::delete_teacher(&state.pool, id).await?;
    Ok(StatusCode::OK)
}
