use lingua_core::model::{Language, Progress};

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

/// Rejects stored ratios that could only come from a corrupted row.
pub(crate) fn progress_from_f64(field: &'static str, v: f64) -> Result<Progress, StorageError> {
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(StorageError::Serialization(format!(
            "{field} out of range: {v}"
        )));
    }
    Ok(Progress::new(v))
}

pub(crate) fn bool_from_i64(field: &'static str, v: i64) -> Result<bool, StorageError> {
    match v {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(StorageError::Serialization(format!(
            "{field} is not a boolean: {other}"
        ))),
    }
}

pub(crate) fn bool_to_i64(v: bool) -> i64 {
    i64::from(v)
}

pub(crate) fn language_from_str(s: &str) -> Result<Language, StorageError> {
    s.parse::<Language>().map_err(ser)
}
