//! Student operations.

use crate::error::AppError;
use crate::model::Student;
use crate::repository::Repository;
use crate::service::reject_client_id;
use sqlx::PgPool;

pub struct StudentService;

impl StudentService {
    pub async fn all_students(pool: &PgPool) -> Result<Vec<Student>, AppError> {
        Repository::<Student>::new(pool).find_all().await
    }

    /// `None` when no student has this id.
    pub async fn get_student(pool: &PgPool, id: i64) -> Result<Option<Student>, AppError> {
        Repository::<Student>::new(pool).find_by_id(id).await
    }

    pub async fn create_student(pool: &PgPool, student: Student) -> Result<Student, AppError> {
        reject_client_id(&student)?;
        let created = Repository::<Student>::new(pool).save(&student).await?;
        tracing::info!(id = ?created.id, subject_id = ?created.subject_id, "student created");
        Ok(created)
    }

    /// Replaces every field of student `id`, including its subject. Any id in `student` is
    /// ignored in favour of `id`.
    pub async fn modify_student(pool: &PgPool, id: i64, student: Student) -> Result<Student, AppError> {
        let record = Student { id: Some(id), ..student };
        let updated = Repository::<Student>::new(pool).save(&record).await?;
        tracing::info!(id, "student modified");
        Ok(updated)
    }

    pub async fn delete_student(pool: &PgPool, id: i64) -> Result<(), AppError> {
        let deleted = Repository::<Student>::new(pool).delete_by_id(id).await?;
        tracing::info!(id, deleted, "student delete");
        Ok(())
    }
}
