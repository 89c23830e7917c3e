//! Conversions from external infrastructure errors into domain errors.

use warpline_domain::WarplineError;

/// Map a rusqlite error into the domain error space.
pub(crate) fn map_sql_error(err: rusqlite::Error) -> WarplineError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => {
            WarplineError::NotFound("no rows returned by query".into())
        }
        rusqlite::Error::InvalidQuery => WarplineError::Database("invalid SQL query".into()),
        other => WarplineError::Database(other.to_string()),
    }
}

/// Map a pool acquisition error into the domain error space.
pub(crate) fn map_pool_error(err: r2d2::Error) -> WarplineError {
    WarplineError::Database(format!("connection pool error: {err}"))
}
