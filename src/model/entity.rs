//! Table mapping shared by every persisted record.

use crate::sql::PgBindValue;
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use std::fmt;

/// A record stored in one table with a store-generated primary key.
///
/// Identifiers returned here are compile-time constants; the SQL builder quotes them
/// and never accepts identifiers from requests.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    type Id: Copy + Send + Sync + fmt::Display + Into<PgBindValue> + 'static;

    /// Singular name used in log fields and error messages.
    const NAME: &'static str;
    const TABLE: &'static str;
    const ID_COLUMN: &'static str = "id";
    /// Every column except the id, in the order of [`Entity::column_values`].
    const COLUMNS: &'static [&'static str];

    /// `None` until the store has assigned one.
    fn id(&self) -> Option<Self::Id>;

    fn column_values(&self) -> Vec<PgBindValue>;
}

/// An entity holding a foreign key to the parent that owns it.
pub trait Owned: Entity {
    /// Must also appear in [`Entity::COLUMNS`].
    const OWNER_COLUMN: &'static str;

    fn owner_id(&self) -> Option<i64>;
}
