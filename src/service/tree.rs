//! Loads the children of parent rows and assembles response trees.

use crate::error::AppError;
use crate::model::tree::{subject_tree, teacher_tree};
use crate::model::{Entity, Position, Student, Subject, SubjectDocument, Teacher, TeacherDocument};
use crate::repository::Repository;
use sqlx::PgPool;

fn ids<E: Entity<Id = i64>>(rows: &[E]) -> Vec<i64> {
    rows.iter().filter_map(|r| r.id()).collect()
}

/// One query for all students of `subjects`.
pub(crate) async fn subject_documents(pool: &PgPool, subjects: Vec<Subject>) -> Result<Vec<SubjectDocument>, AppError> {
    let students = Repository::<Student>::new(pool).find_by_owners(&ids(&subjects)).await?;
    Ok(subject_tree(subjects, students, Position::Root))
}

/// One query for the subjects of `teachers`, one for the students of those subjects.
pub(crate) async fn teacher_documents(pool: &PgPool, teachers: Vec<Teacher>) -> Result<Vec<TeacherDocument>, AppError> {
    let subjects = Repository::<Subject>::new(pool).find_by_owners(&ids(&teachers)).await?;
    let students = Repository::<Student>::new(pool).find_by_owners(&ids(&subjects)).await?;
    Ok(teacher_tree(teachers, subjects, students))
}
