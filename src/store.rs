//! Database bootstrap: make sure the target database exists before the pool is built.

use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use std::str::FromStr;

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin_url, db_name)) = parse_db_name_from_url(database_url)? else {
        return Ok(());
    };
    if db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: e.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Splits `postgres://host/db?opts` into the admin url (same server, `postgres` database,
/// same query options) and the database name. `None` when the url names no database.
fn parse_db_name_from_url(url: &str) -> Result<Option<(String, String)>, ConfigError> {
    let (location, query) = match url.split_once('?') {
        Some((location, query)) => (location, Some(query)),
        None => (url, None),
    };
    let authority_start = location
        .find("://")
        .ok_or_else(|| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: "missing scheme".into(),
        })?
        + 3;
    let Some(slash) = location[authority_start..].find('/') else {
        return Ok(None);
    };
    let path_start = authority_start + slash + 1;
    let db_name = location[path_start..].trim();
    if db_name.is_empty() {
        return Ok(None);
    }
    let base = &location[..path_start];
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok(Some((admin_url, db_name.to_string())))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name() {
        let (admin, db) = parse_db_name_from_url("postgres://user:pw@localhost:5432/school")
            .unwrap()
            .unwrap();
        assert_eq!(admin, "postgres://user:pw@localhost:5432/postgres");
        assert_eq!(db, "school");
    }

    #[test]
    fn keeps_connection_options() {
        let (admin, db) = parse_db_name_from_url("postgres://localhost/school?sslmode=disable")
            .unwrap()
            .unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(db, "school");
    }

    #[test]
    fn slash_inside_an_option_is_not_the_path() {
        let (admin, db) = parse_db_name_from_url("postgres://localhost/school?sslrootcert=/etc/ssl/ca.pem")
            .unwrap()
            .unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslrootcert=/etc/ssl/ca.pem");
        assert_eq!(db, "school");
    }

    #[test]
    fn url_without_database_has_nothing_to_create() {
        assert_eq!(parse_db_name_from_url("postgres://localhost").unwrap(), None);
        assert_eq!(parse_db_name_from_url("postgres://localhost/").unwrap(), None);
        assert_eq!(parse_db_name_from_url("postgres://localhost?sslmode=require").unwrap(), None);
    }

    #[test]
    fn url_without_scheme_is_a_config_error() {
        assert!(matches!(
            parse_db_name_from_url("localhost"),
            Err(ConfigError::Invalid { key: "DATABASE_URL", .. })
        ));
    }

    #[tokio::test]
    async fn malformed_url_fails_as_configuration() {
        let err = ensure_database_exists("localhost/school").await.unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid { key: "DATABASE_URL", .. })));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident(r#"my"db"#), r#""my""db""#);
    }
}
