//! Per-entity services over the generic repository.

mod student;
mod subject;
mod teacher;
mod tree;

pub use student::StudentService;
pub use subject::SubjectService;
pub use teacher::TeacherService;

use crate::error::AppError;
use crate::model::Entity;

/// Ids are assigned by the store; a create body that carries one is rejected.
fn reject_client_id<E: Entity>(record: &E) -> Result<(), AppError> {
    match record.id() {
        Some(id) => Err(AppError::BadRequest(format!(
            "{} id is assigned by the store, got {}",
            E::NAME,
            id
        ))),
        None => Ok(()),
    }
}
