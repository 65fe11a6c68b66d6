//! Subject operations returning subject documents.

use crate::error::AppError;
use crate::model::{Subject, SubjectDocument};
use crate::repository::Repository;
use crate::service::reject_client_id;
use crate::service::tree::subject_documents;
use sqlx::PgPool;

/// Subject operations. Results are documents carrying the subject's students.
pub struct SubjectService;

impl SubjectService {
    pub async fn all_subjects(pool: &PgPool) -> Result<Vec<SubjectDocument>, AppError> {
        let subjects = Repository::<Subject>::new(pool).find_all().await?;
        subject_documents(pool, subjects).await
    }

    pub async fn get_subject(pool: &PgPool, id: i64) -> Result<Option<SubjectDocument>, AppError> {
        let Some(subject) = Repository::<Subject>::new(pool).find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(subject_documents(pool, vec![subject]).await?.into_iter().next())
    }

    pub async fn create_subject(pool: &PgPool, subject: Subject) -> Result<SubjectDocument, AppError> {
        reject_client_id(&subject)?;
        let created = Repository::<Subject>::new(pool).save(&subject).await?;
        tracing::info!(id = ?created.id, teacher_id = ?created.teacher_id, "subject created");
        Self::document(pool, created).await
    }

    /// Replaces the name and teacher of subject `id`. Its students are untouched.
    pub async fn modify_subject(pool: &PgPool, id: i64, subject: Subject) -> Result<SubjectDocument, AppError> {
        let record = Subject { id: Some(id), ..subject };
        let updated = Repository::<Subject>::new(pool).save(&record).await?;
        tracing::info!(id, "subject modified");
        Self::document(pool, updated).await
    }

    /// Also removes the subject's students.
    pub async fn delete_subject(pool: &PgPool, id: i64) -> Result<(), AppError> {
        let deleted = Repository::<Subject>::new(pool).delete_by_id(id).await?;
        tracing::info!(id, deleted, "subject delete");
        Ok(())
    }

    async fn document(pool: &PgPool, subject: Subject) -> Result<SubjectDocument, AppError> {
        let id = subject.id;
        subject_documents(pool, vec![subject])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("subject {:?}", id)))
    }
}
