//! Subject row, request body and response document with its students.

use crate::model::reference::{self, BackRef, Position};
use crate::model::student::StudentDocument;
use crate::model::{Entity, Owned};
use crate::sql::PgBindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `subject`. As a request body the owning teacher is `"teacher": {"id": n}`;
/// a `students` array in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub id: Option<i64>,
    pub nombre: Option<String>,
    #[serde(
        rename = "teacher",
        default,
        deserialize_with = "reference::deserialize_optional"
    )]
    pub teacher_id: Option<i64>,
}

impl Entity for Subject {
    type Id = i64;

    const NAME: &'static str = "subject";
    const TABLE: &'static str = "subject";
    const COLUMNS: &'static [&'static str] = &["nombre", "teacher_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn column_values(&self) -> Vec<PgBindValue> {
        vec![(&self.nombre).into(), self.teacher_id.into()]
    }
}

impl Owned for Subject {
    const OWNER_COLUMN: &'static str = "teacher_id";

    fn owner_id(&self) -> Option<i64> {
        self.teacher_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectDocument {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "BackRef::is_omitted")]
    pub teacher: BackRef,
    pub students: Vec<StudentDocument>,
}

impl SubjectDocument {
    /// `students` must already be the students owned by `subject`.
    pub fn new(subject: Subject, students: Vec<StudentDocument>, position: Position) -> Self {
        SubjectDocument {
            id: subject.id,
            nombre: subject.nombre,
            teacher: position.back_ref(subject.teacher_id),
            students,
        }
    }
}
