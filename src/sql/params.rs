//! Typed values that sqlx can bind for any entity column.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A value bound to a PostgreSQL query. Each variant carries its own SQL type so a
/// NULL still binds with the column's type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PgBindValue {
    BigInt(Option<i64>),
    Text(Option<String>),
}

impl From<i64> for PgBindValue {
    fn from(v: i64) -> Self {
        PgBindValue::BigInt(Some(v))
    }
}

impl From<Option<i64>> for PgBindValue {
    fn from(v: Option<i64>) -> Self {
        PgBindValue::BigInt(v)
    }
}

impl From<Option<String>> for PgBindValue {
    fn from(v: Option<String>) -> Self {
        PgBindValue::Text(v)
    }
}

impl From<&Option<String>> for PgBindValue {
    fn from(v: &Option<String>) -> Self {
        PgBindValue::Text(v.clone())
    }
}

impl<'q> Encode<'q, Postgres> for PgBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            PgBindValue::BigInt(n) => <Option<i64> as Encode<Postgres>>::encode_by_ref(n, buf),
            PgBindValue::Text(s) => <Option<String> as Encode<Postgres>>::encode_by_ref(s, buf),
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            PgBindValue::BigInt(_) => <i64 as Type<Postgres>>::type_info(),
            PgBindValue::Text(_) => <String as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for PgBindValue {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty) || <i64 as Type<Postgres>>::compatible(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_text_keeps_text_type() {
        let v = PgBindValue::from(&None::<String>);
        assert_eq!(v, PgBindValue::Text(None));
        assert_eq!(v.produces(), Some(<String as Type<Postgres>>::type_info()));
    }

    #[test]
    fn ids_bind_as_bigint() {
        let v = PgBindValue::from(42_i64);
        assert_eq!(v, PgBindValue::BigInt(Some(42)));
        assert_eq!(v.produces(), Some(<i64 as Type<Postgres>>::type_info()));
    }
}
