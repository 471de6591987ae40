//! Translation of `sqlx` errors into [`ProductError`].

use crate::domain::errors::ProductError;

/// Unique constraints that guard the product code.
const CODE_CONSTRAINTS: &[&str] = &["products_code_key", "products_code_lower_idx"];

/// Returns true if `e` is a unique violation on one of the product code constraints.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err
        .constraint()
        .is_some_and(|name| CODE_CONSTRAINTS.contains(&name))
}

/// Maps a driver error to the domain taxonomy.
///
/// Code conflicts become [`ProductError::DuplicateCode`], pool acquisition
/// timeouts become [`ProductError::Timeout`], everything else is logged and
/// wrapped as [`ProductError::Storage`].
pub fn map_sqlx_error(e: sqlx::Error) -> ProductError {
    if is_unique_violation_on_code(&e) {
        return ProductError::DuplicateCode;
    }

    if matches!(e, sqlx::Error::PoolTimedOut) {
        return ProductError::Timeout;
    }

    tracing::error!(error = %e, "Database error");
    ProductError::Storage(e.to_string())
}
