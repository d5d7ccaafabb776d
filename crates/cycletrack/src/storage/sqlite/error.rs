//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `cycletrack_core::storage`.

use cycletrack_core::storage::RepositoryError;

/// Maps a rusqlite error with a known ID to a RepositoryError.
fn map_rusqlite_error(err: &rusqlite::Error, id: &str) -> RepositoryError {
    match err {
        // Connection-related errors
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        // Query returned no rows (not found)
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::cycle_not_found(id),

        // All other errors
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error with a known cycle ID to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
/// It extracts the inner `rusqlite::Error` if present, otherwise
/// maps to a generic `QueryFailed` error.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    id: impl Into<String>,
) -> RepositoryError {
    let id_str = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err, &id_str),
        tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rows_maps_to_not_found() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error(err, "abc-123");

        match result {
            RepositoryError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Cycle");
                assert_eq!(id, "abc-123");
            }
            other => panic!("Expected NotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let sqlite_err = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: rusqlite::ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err, "abc-123");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "abc-123");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
