use crate::error::DurationError;

/// Parse an "MM:SS" duration into whole seconds.
///
/// Both fields must be plain decimal digits. A seconds field of 60 or more is
/// folded into the total rather than rejected.
pub fn parse_duration(text: &str) -> Result<u32, DurationError> {
    let text = text.trim();
    let mut fields = text.split(':');
    let (minutes, seconds) = match (fields.next(), fields.next(), fields.next()) {
        (Some(minutes), Some(seconds), None) => (minutes, seconds),
        _ => return Err(DurationError::Separator),
    };

    let minutes = parse_field(minutes)?;
    let seconds = parse_field(seconds)?;

    minutes
        .checked_mul(60)
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(|| DurationError::Overflow(text.to_string()))
}

fn parse_field(field: &str) -> Result<u32, DurationError> {
    let field = field.trim();
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DurationError::NotANumber(field.to_string()));
    }
    field
        .parse::<u32>()
        .map_err(|_| DurationError::NotANumber(field.to_string()))
}

/// Format seconds as "M:SS" (minutes unpadded, seconds zero-padded).
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
