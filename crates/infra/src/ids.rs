use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("empty identifier")]
    Empty,
    #[error("identifier is not an integer: {0}")]
    NotAnInteger(String),
}

/// Normalize an identifier received over the wire into the stored integer form.
///
/// Accepts surrounding whitespace, a leading `+` and integral decimal forms
/// such as `"7.0"`, so `"7"`, `" 7 "` and `"7.0"` all name row 7.
pub fn parse_id(raw: &str) -> Result<i64, IdError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdError::Empty);
    }

    if let Ok(id) = trimmed.parse::<i64>() {
        return Ok(id);
    }

    match trimmed.parse::<f64>() {
        Ok(value)
            if value.is_finite()
                && value.fract() == 0.0
                && value >= i64::MIN as f64
                && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(IdError::NotAnInteger(raw.to_string())),
    }
}
