use std::time::Duration;

/// Parse a duration written either in humantime form (`250ms`, `1s`,
/// `1m 30s`) or as a bare integer number of milliseconds.
pub fn parse_duration(raw: &str) -> Result<Duration, humantime::DurationError> {
    let trimmed = raw.trim();
    if let Ok(millis) = trimmed.parse::<u64>() {
        return Ok(Duration::from_millis(millis));
    }
    humantime::parse_duration(trimmed)
}

/// Inverse of [`parse_duration`] for rendering resolved settings.
pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

/// Trimmed value, or `None` when blank.
pub fn non_blank(raw: Option<String>) -> Option<String> {
    raw.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
