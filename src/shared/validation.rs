use thiserror::Error;

pub const MAX_NAME_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name cannot be longer than {MAX_NAME_LEN} characters")]
    TooLong,
}

/// Trims a bucketlist or item name and rejects blank or oversized values.
pub fn parse_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }

    Ok(name.to_string())
}
