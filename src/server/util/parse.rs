use crate::server::error::AppError;

const INVALID_ID: &str = "ID inválido";
const INVALID_IDS: &str = "IDs inválidos";

/// Parses a path segment into a row identifier.
///
/// # Arguments
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - The segment is not an integer
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(INVALID_ID.to_string()))
}

/// Parses the `(artistaId, eventoId)` path segments of an artist-event link.
///
/// # Returns
/// - `Ok((i32, i32))` - Both segments parsed
/// - `Err(AppError::BadRequest)` - Either segment is not an integer
pub fn parse_id_pair(first: &str, second: &str) -> Result<(i32, i32), AppError> {
    match (first.parse::<i32>(), second.parse::<i32>()) {
        (Ok(first), Ok(second)) => Ok((first, second)),
        _ => Err(AppError::BadRequest(INVALID_IDS.to_string())),
    }
}
