//! Child-to-parent references as they appear on the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier-only pointer to a parent record: `{"id": 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

/// Reads an optional `{"id": n}` object into the foreign key it names. Other fields of
/// the object are ignored, so a full parent record is accepted too.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<EntityRef>::deserialize(deserializer)?.map(|r| r.id))
}

/// Where a record sits in a response tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Top-level value of a response, or an element of a top-level list.
    Root,
    /// Element of a parent's child collection.
    Nested,
}

impl Position {
    pub fn back_ref(self, owner_id: Option<i64>) -> BackRef {
        match self {
            Position::Root => BackRef::Shown(owner_id),
            Position::Nested => BackRef::Omitted,
        }
    }
}

/// Back-reference field of a document. Nested documents omit it so the tree never
/// points back at the parent that contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackRef {
    Omitted,
    Shown(Option<i64>),
}

impl BackRef {
    pub fn is_omitted(&self) -> bool {
        matches!(self, BackRef::Omitted)
    }
}

impl Serialize for BackRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BackRef::Shown(Some(id)) => EntityRef { id: *id }.serialize(serializer),
            BackRef::Shown(None) | BackRef::Omitted => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shown_reference_is_an_id_object() {
        assert_eq!(serde_json::to_value(BackRef::Shown(Some(4))).unwrap(), json!({"id": 4}));
        assert_eq!(serde_json::to_value(BackRef::Shown(None)).unwrap(), json!(null));
    }

    #[test]
    fn nested_position_omits_back_reference() {
        assert!(Position::Nested.back_ref(Some(1)).is_omitted());
        assert_eq!(Position::Root.back_ref(Some(1)), BackRef::Shown(Some(1)));
    }
}
