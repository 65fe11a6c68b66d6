//! Entity CRUD routes. Every entity exposes the same six routes under its own prefix:
//! greeting, `listado`, `id/:id`, create, replace by id, `delete/:id`.

use crate::handlers::{student, subject, teacher};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/students/", get(student::home))
        .route("/students", post(student::create))
        .route("/students/listado", get(student::list))
        .route("/students/id/:id", get(student::read))
        .route("/students/:id", put(student::update))
        .route("/students/delete/:id", delete(student::delete))
}

fn subject_routes() -> Router<AppState> {
    Router::new()
        .route("/subjects/", get(subject::home))
        .route("/subjects", post(subject::create))
        .route("/subjects/listado", get(subject::list))
        .route("/subjects/id/:id", get(subject::read))
        .route("/subjects/:id", put(subject::update))
        .route("/subjects/delete/:id", delete(subject::delete))
}

fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/teachers/", get(teacher::home))
        .route("/teachers", post(teacher::create))
        .route("/teachers/listado", get(teacher::list))
        .route("/teachers/id/:id", get(teacher::read))
        .route("/teachers/:id", put(teacher::update))
        .route("/teachers/delete/:id", delete(teacher::delete))
}

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .merge(student_routes())
        .merge(subject_routes())
        .merge(teacher_routes())
        .with_state(state)
}
