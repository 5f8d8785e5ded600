use crate::types::errors::InvalidInput;

/// Parse a user-entered number. Surrounding whitespace is ignored; anything
/// `f64::from_str` rejects, and any non-finite result, is refused.
pub fn parse_number(field: &'static str, text: &str) -> Result<f64, InvalidInput> {
    let trimmed = text.trim();
    let number: f64 = trimmed.parse().map_err(|_| InvalidInput::NotANumber {
        field,
        text: text.to_string(),
    })?;

    if !number.is_finite() {
        return Err(InvalidInput::NonFinite { field });
    }
    Ok(number)
}
