//! Generic data access for one entity table.
//!
//! A repository wraps the pool and exposes find-all, find-by-id, save and delete-by-id
//! for any [`Entity`]. Entities that carry an owner foreign key ([`Owned`]) can also be
//! batch-loaded by owner.

use crate::error::AppError;
use crate::model::{Entity, Owned};
use crate::sql::{self, PgBindValue, QueryBuf};
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::{Query, QueryAs};
use sqlx::PgPool;
use std::marker::PhantomData;
use tracing::instrument;

pub struct Repository<E> {
    pool: PgPool,
    entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Repository {
            pool: self.pool.clone(),
            entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(pool: &PgPool) -> Self {
        Repository {
            pool: pool.clone(),
            entity: PhantomData,
        }
    }

    /// Every row, ordered by id.
    #[instrument(skip_all, fields(entity = E::NAME), err)]
    pub async fn find_all(&self) -> Result<Vec<E>, AppError> {
        let q = sql::select_all::<E>();
        Ok(rows_as::<E>(&q).fetch_all(&self.pool).await?)
    }

    #[instrument(skip_all, fields(entity = E::NAME, id = %id), err)]
    pub async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, AppError> {
        let q = sql::select_by_id::<E>(id);
        Ok(rows_as::<E>(&q).fetch_optional(&self.pool).await?)
    }

    /// Inserts when the record has no id, otherwise replaces every column of the row with
    /// that id. Replacing a row that does not exist is [`AppError::NotFound`].
    #[instrument(skip_all, fields(entity = E::NAME), err)]
    pub async fn save(&self, record: &E) -> Result<E, AppError> {
        match record.id() {
            None => {
                let q = sql::insert(record);
                Ok(rows_as::<E>(&q).fetch_one(&self.pool).await?)
            }
            Some(id) => {
                let q = sql::update(id, record);
                rows_as::<E>(&q)
                    .fetch_optional(&self.pool)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("{} {}", E::NAME, id)))
            }
        }
    }

    /// Returns whether a row was removed. Dependent rows go with it through the
    /// `ON DELETE CASCADE` foreign keys.
    #[instrument(skip_all, fields(entity = E::NAME, id = %id), err)]
    pub async fn delete_by_id(&self, id: E::Id) -> Result<bool, AppError> {
        let q = sql::delete::<E>(id);
        let result = statement(&q).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

impl<E: Owned> Repository<E> {
    /// Rows whose owner column is one of `owners`, ordered by id. No query is sent for an
    /// empty slice.
    #[instrument(skip_all, fields(entity = E::NAME, owners = owners.len()), err)]
    pub async fn find_by_owners(&self, owners: &[i64]) -> Result<Vec<E>, AppError> {
        if owners.is_empty() {
            return Ok(Vec::new());
        }
        let values: Vec<PgBindValue> = owners.iter().copied().map(PgBindValue::from).collect();
        let q = sql::select_by_column_in::<E>(E::OWNER_COLUMN, values);
        Ok(rows_as::<E>(&q).fetch_all(&self.pool).await?)
    }
}

fn rows_as<E: Entity>(q: &QueryBuf) -> QueryAs<'_, Postgres, E, PgArguments> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, E>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}

fn statement(q: &QueryBuf) -> Query<'_, Postgres, PgArguments> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "statement");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}
