//! Teacher row, request body and response document with its subjects.

use crate::model::subject::SubjectDocument;
use crate::model::Entity;
use crate::sql::PgBindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `teacher`. A `subjects` array in a request body is ignored: subjects are
/// created through their own routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Deserialize)]
pub struct Teacher {
    #[serde(default)]
    pub id: Option<i64>,
    pub nombre: Option<String>,
}

impl Entity for Teacher {
    type Id = i64;

    const NAME: &'static str = "teacher";
    const TABLE: &'static str = "teacher";
    const COLUMNS: &'static [&'static str] = &["nombre"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn column_values(&self) -> Vec<PgBindValue> {
        vec![(&self.nombre).into()]
    }
}

/// Teachers are always roots, so there is no back-reference to omit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherDocument {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub subjects: Vec<SubjectDocument>,
}

impl TeacherDocument {
    pub fn new(teacher: Teacher, subjects: Vec<SubjectDocument>) -> Self {
        TeacherDocument {
            id: teacher.id,
            nombre: teacher.nombre,
            subjects,
        }
    }
}
