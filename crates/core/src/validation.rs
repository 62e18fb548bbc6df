use thiserror::Error;

/// Longest name the queue service accepts.
pub const MAX_NAME_LEN: usize = 64;

/// Rejection reasons for a join name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty after trimming.
    #[error("name must not be empty")]
    Empty,
    /// Name exceeds [`MAX_NAME_LEN`] characters.
    #[error("name is too long (max {MAX_NAME_LEN})")]
    TooLong,
}

/// Validates a join name the same way the server does: trims surrounding
/// whitespace, rejects empty and over-long input. Returns the trimmed name.
///
/// Callers run this before issuing any network request, so an invalid name
/// never leaves the client.
pub fn validate_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    Ok(name.to_string())
}
