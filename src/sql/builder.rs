//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for an [`Entity`].

use crate::model::Entity;
use crate::sql::PgBindValue;

/// Quote identifier for PostgreSQL (safe: only from entity constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Id column followed by every other column; also used for RETURNING.
fn select_column_list<E: Entity>() -> String {
    std::iter::once(E::ID_COLUMN)
        .chain(E::COLUMNS.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ORDER BY id.
pub fn select_all<E: Entity>() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list::<E>(),
        quoted(E::TABLE),
        quoted(E::ID_COLUMN)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id<E: Entity>(id: E::Id) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list::<E>(),
        quoted(E::TABLE),
        quoted(E::ID_COLUMN),
        n
    );
    q
}

/// SELECT rows WHERE column IN ($1, $2, ...) ORDER BY id. Used for batch-loading children.
/// An empty value list yields a query that matches nothing.
pub fn select_by_column_in<E: Entity>(column: &str, values: Vec<PgBindValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let cols = select_column_list::<E>();
    let table = quoted(E::TABLE);
    if values.is_empty() {
        q.sql = format!("SELECT {} FROM {} WHERE 1 = 0", cols, table);
        return q;
    }
    let placeholders: Vec<String> = values
        .into_iter()
        .map(|v| format!("${}", q.push_param(v)))
        .collect();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} IN ({}) ORDER BY {}",
        cols,
        table,
        quoted(column),
        placeholders.join(", "),
        quoted(E::ID_COLUMN)
    );
    q
}

/// INSERT every non-id column; the store assigns the id.
pub fn insert<E: Entity>(record: &E) -> QueryBuf {
    let mut q = QueryBuf::new();
    let cols: Vec<String> = E::COLUMNS.iter().map(|c| quoted(c)).collect();
    let placeholders: Vec<String> = record
        .column_values()
        .into_iter()
        .map(|v| format!("${}", q.push_param(v)))
        .collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(E::TABLE),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list::<E>()
    );
    q
}

/// UPDATE by id: SET every non-id column from `record` (full replace).
pub fn update<E: Entity>(id: E::Id, record: &E) -> QueryBuf {
    let mut q = QueryBuf::new();
    let sets: Vec<String> = E::COLUMNS
        .iter()
        .zip(record.column_values())
        .map(|(col, v)| format!("{} = ${}", quoted(col), q.push_param(v)))
        .collect();
    let id_param = q.push_param(id.into());
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(E::TABLE),
        sets.join(", "),
        quoted(E::ID_COLUMN),
        id_param,
        select_column_list::<E>()
    );
    q
}

/// DELETE by id.
pub fn delete<E: Entity>(id: E::Id) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${}",
        quoted(E::TABLE),
        quoted(E::ID_COLUMN),
        n
    );
    q
}
