//! Teacher operations returning teacher trees.

use crate::error::AppError;
use crate::model::{Teacher, TeacherDocument};
use crate::repository::Repository;
use crate::service::reject_client_id;
use crate::service::tree::teacher_documents;
use sqlx::PgPool;

/// Teacher operations. Results are documents carrying subjects and their students.
pub struct TeacherService;

impl TeacherService {
    pub async fn all_teachers(pool: &PgPool) -> Result<Vec<TeacherDocument>, AppError> {
        let teachers = Repository::<Teacher>::new(pool).find_all().await?;
        teacher_documents(pool, teachers).await
    }

    pub async fn get_teacher(pool: &PgPool, id: i64) -> Result<Option<TeacherDocument>, AppError> {
        let Some(teacher) = Repository::<Teacher>::new(pool).find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(teacher_documents(pool, vec![teacher]).await?.into_iter().next())
    }

    pub async fn create_teacher(pool: &PgPool, teacher: Teacher) -> Result<TeacherDocument, AppError> {
        reject_client_id(&teacher)?;
        let created = Repository::<Teacher>::new(pool).save(&teacher).await?;
        tracing::info!(id = ?created.id, "teacher created");
        Self::document(pool, created).await
    }

    pub async fn modify_teacher(pool: &PgPool, id: i64, teacher: Teacher) -> Result<TeacherDocument, AppError> {
        let record = Teacher { id: Some(id), ..teacher };
        let updated = Repository::<Teacher>::new(pool).save(&record).await?;
        tracing::info!(id, "teacher modified");
        Self::document(pool, updated).await
    }

    /// Also removes the teacher's subjects and their students.
    pub async fn delete_teacher(pool: &PgPool, id: i64) -> Result<(), AppError> {
        let deleted = Repository::<Teacher>::new(pool).delete_by_id(id).await?;
        tracing::info!(id, deleted, "teacher delete");
        Ok(())
    }

    async fn document(pool: &PgPool, teacher: Teacher) -> Result<TeacherDocument, AppError> {
        let id = teacher.id;
        teacher_documents(pool, vec![teacher])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("teacher {:?}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::apply_migrations;
    use crate::model::{Student, Subject};
    use crate::service::{StudentService, SubjectService};

    /// Teacher with two subjects, one student each. Returns (teacher, subjects, students).
    async fn seed(pool: &PgPool) -> (i64, Vec<i64>, Vec<i64>) {
        let teacher = TeacherService::create_teacher(
            pool,
            Teacher {
                id: None,
                nombre: Some("Marta".into()),
            },
        )
        .await
        .unwrap()
        .id
        .unwrap();
        let mut subjects = Vec::new();
        let mut students = Vec::new();
        for nombre in ["Algebra", "Historia"] {
            let subject = SubjectService::create_subject(
                pool,
                Subject {
                    id: None,
                    nombre: Some(nombre.into()),
                    teacher_id: Some(teacher),
                },
            )
            .await
            .unwrap()
            .id
            .unwrap();
            let student = StudentService::create_student(
                pool,
                Student {
                    nombre: Some(format!("alumno de {nombre}")),
                    subject_id: Some(subject),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .id
            .unwrap();
            subjects.push(subject);
            students.push(student);
        }
        (teacher, subjects, students)
    }

    #[sqlx::test]
    #[test_log::test]
    async fn teacher_document_is_a_tree(pool: PgPool) {
        apply_migrations(&pool).await.unwrap();
        let (teacher, subjects, _) = seed(&pool).await;

        let doc = TeacherService::get_teacher(&pool, teacher).await.unwrap().unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        let nested = json["subjects"].as_array().unwrap();
        assert_eq!(nested.len(), 2);
        for (entry, id) in nested.iter().zip(&subjects) {
            assert_eq!(entry["id"], *id);
            assert!(entry.get("teacher").is_none());
            let students = entry["students"].as_array().unwrap();
            assert_eq!(students.len(), 1);
            assert!(students[0].get("subject").is_none());
        }

        assert_eq!(TeacherService::all_teachers(&pool).await.unwrap(), vec![doc]);
    }

    #[sqlx::test]
    async fn deleting_teacher_removes_subjects_and_students(pool: PgPool) {
        apply_migrations(&pool).await.unwrap();
        let (teacher, subjects, students) = seed(&pool).await;
        let bystander = StudentService::create_student(&pool, Student::default())
            .await
            .unwrap()
            .id
            .unwrap();

        TeacherService::delete_teacher(&pool, teacher).await.unwrap();

        assert_eq!(TeacherService::get_teacher(&pool, teacher).await.unwrap(), None);
        for id in subjects {
            assert_eq!(SubjectService::get_subject(&pool, id).await.unwrap(), None);
        }
        for id in students {
            assert_eq!(StudentService::get_student(&pool, id).await.unwrap(), None);
        }
        assert!(StudentService::get_student(&pool, bystander).await.unwrap().is_some());
    }

    #[sqlx::test]
    async fn modify_teacher_renames_and_keeps_subjects(pool: PgPool) {
        apply_migrations(&pool).await.unwrap();
        let (teacher, _, _) = seed(&pool).await;
        let doc = TeacherService::modify_teacher(
            &pool,
            teacher,
            Teacher {
                id: None,
                nombre: Some("Marta Gomez".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(doc.id, Some(teacher));
        assert_eq!(doc.nombre.as_deref(), Some("Marta Gomez"));
        assert_eq!(doc.subjects.len(), 2);

        let missing = TeacherService::modify_teacher(&pool, teacher + 1000, Teacher::default()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
