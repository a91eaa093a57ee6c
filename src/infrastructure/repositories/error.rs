use crate::domain::errors::DomainError;

const CNT_MANUFACTURER_SLUG: &str = "manufacturers_slug_key";
const CNT_AIRPLANE_SLUG: &str = "airplanes_slug_key";
const CNT_AIRPLANE_MANUFACTURER: &str = "airplanes_manufacturer_id_fkey";
const CNT_AIRPLANE_YEAR_CHECK: &str = "airplanes_year_min_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    map_database(err, false)
}

/// For statements writing an airplane row. A foreign key failure there means
/// the manufacturer resolved earlier was deleted concurrently, so the caller
/// may re-run its lookup.
pub fn map_sqlx_dependent_write(err: sqlx::Error) -> DomainError {
    map_database(err, true)
}

fn map_database(err: sqlx::Error, dependent_write: bool) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return constraint_error(constraint, dependent_write);
            }

            if let Some(code) = db_err.code() {
                if let Some(mapped) = code_error(code.as_ref(), dependent_write) {
                    return mapped;
                }
            }

            tracing::error!(error = %db_err, "database error");
            DomainError::Persistence(db_err.message().to_string())
        }
        _ => {
            tracing::error!(error = %err, "storage failure");
            DomainError::Persistence(err.to_string())
        }
    }
}

fn missing_parent() -> DomainError {
    DomainError::TransientUniqueViolation("referenced manufacturer was removed concurrently".into())
}

fn constraint_error(constraint: &str, dependent_write: bool) -> DomainError {
    match constraint {
        CNT_MANUFACTURER_SLUG => {
            DomainError::TransientUniqueViolation("manufacturer slug already exists".into())
        }
        CNT_AIRPLANE_SLUG => {
            DomainError::TransientUniqueViolation("airplane slug already exists".into())
        }
        CNT_AIRPLANE_MANUFACTURER if dependent_write => missing_parent(),
        CNT_AIRPLANE_MANUFACTURER => {
            DomainError::HasDependents("manufacturer is still referenced by airplanes".into())
        }
        CNT_AIRPLANE_YEAR_CHECK => DomainError::Validation("year must be minimum of 1900".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}

fn code_error(code: &str, dependent_write: bool) -> Option<DomainError> {
    match code {
        "23505" => Some(DomainError::TransientUniqueViolation(
            "unique constraint violated".into(),
        )),
        "23503" if dependent_write => Some(missing_parent()),
        "23503" => Some(DomainError::HasDependents(
            "foreign key constraint violated".into(),
        )),
        "23514" => Some(DomainError::Validation("check constraint violated".into())),
        _ => None,
    }
}

/// Builds an `ILIKE` pattern matching `keyword` anywhere, with wildcard
/// characters in the keyword taken literally.
pub fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
