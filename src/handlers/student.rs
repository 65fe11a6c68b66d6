//! Student handlers: greeting, list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{Position, Student, StudentDocument};
use crate::service::StudentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub const GREETING: &str = "Estas en el servicio de estudiantes";

fn document(student: Student) -> StudentDocument {
    StudentDocument::new(student, Position::Root)
}

pub async fn home() -> &'static str {
    GREETING
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StudentDocument>>, AppError> {
    let students = StudentService::all_students(&state.pool).await?;
    Ok(Json(students.into_iter().map(document).collect()))
}

/// Missing students answer 200 with a `null` body.
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<StudentDocument>>, AppError> {
    let student = StudentService::get_student(&state.pool, id).await?;
    Ok(Json(student.map(document)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Student>,
) -> Result<Json<StudentDocument>, AppError> {
    let student = StudentService::create_student(&state.pool, body).await?;
    Ok(Json(document(student)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Student>,
) -> Result<Json<StudentDocument>, AppError> {
    let student = StudentService::modify_student(&state.pool, id, body).await?;
    Ok(Json(document(student)))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, AppError> {
    StudentService::delete_student(&state.pool, id).await?;
    Ok(StatusCode::OK)
}
