//! Student row, request body and response document.

use crate::model::reference::{self, BackRef, Position};
use crate::model::{Entity, Owned};
use crate::sql::PgBindValue;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `student`. Also the request body of the student routes, where the owning
/// subject is written as `"subject": {"id": n}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub identificacion: Option<String>,
    #[serde(
        rename = "subject",
        default,
        deserialize_with = "reference::deserialize_optional"
    )]
    pub subject_id: Option<i64>,
}

impl Entity for Student {
    type Id = i64;

    const NAME: &'static str = "student";
    const TABLE: &'static str = "student";
    const COLUMNS: &'static [&'static str] = &["nombre", "apellido", "identificacion", "subject_id"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn column_values(&self) -> Vec<PgBindValue> {
        vec![
            (&self.nombre).into(),
            (&self.apellido).into(),
            (&self.identificacion).into(),
            self.subject_id.into(),
        ]
    }
}

impl Owned for Student {
    const OWNER_COLUMN: &'static str = "subject_id";

    fn owner_id(&self) -> Option<i64> {
        self.subject_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentDocument {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub identificacion: Option<String>,
    #[serde(skip_serializing_if = "BackRef::is_omitted")]
    pub subject: BackRef,
}

impl StudentDocument {
    pub fn new(student: Student, position: Position) -> Self {
        StudentDocument {
            id: student.id,
            nombre: student.nombre,
            apellido: student.apellido,
            identificacion: student.identificacion,
            subject: position.back_ref(student.subject_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn body_with_subject_reference() {
        let s: Student = serde_json::from_value(json!({
            "nombre": "Ana",
            "apellido": "Ruiz",
            "identificacion": "0102",
            "subject": {"id": 3, "nombre": "Fisica"}
        }))
        .unwrap();
        assert_eq!(s.id, None);
        assert_eq!(s.subject_id, Some(3));
        assert_eq!(s.nombre.as_deref(), Some("Ana"));
    }

    #[test]
    fn missing_fields_become_null() {
        let s: Student = serde_json::from_value(json!({"nombre": "Ana", "extra": true})).unwrap();
        assert_eq!(s.apellido, None);
        assert_eq!(s.identificacion, None);
        assert_eq!(s.subject_id, None);

        let s: Student = serde_json::from_value(json!({"subject": null})).unwrap();
        assert_eq!(s.subject_id, None);
    }

    #[test]
    fn column_values_follow_column_order() {
        let s = Student {
            id: Some(9),
            nombre: Some("Ana".into()),
            apellido: None,
            identificacion: Some("0102".into()),
            subject_id: Some(2),
        };
        let values = s.column_values();
        assert_eq!(values.len(), Student::COLUMNS.len());
        assert_eq!(values[0], PgBindValue::Text(Some("Ana".into())));
        assert_eq!(values[1], PgBindValue::Text(None));
        assert_eq!(values[3], PgBindValue::BigInt(Some(2)));
    }

    #[test]
    fn root_document_shows_subject_reference() {
        let s = Student {
            id: Some(1),
            nombre: Some("Ana".into()),
            subject_id: Some(5),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(StudentDocument::new(s.clone(), Position::Root)).unwrap(),
            json!({"id": 1, "nombre": "Ana", "apellido": null, "identificacion": null, "subject": {"id": 5}})
        );
        let nested = serde_json::to_value(StudentDocument::new(s, Position::Nested)).unwrap();
        assert!(nested.get("subject").is_none());
    }
}
