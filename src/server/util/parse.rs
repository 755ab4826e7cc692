use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from a string id
///
/// The upstream API ships dress and equip ids as strings (`"1050009"`).
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed the string to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}
