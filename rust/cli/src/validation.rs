//! Validation of answers given at the setup prompts.
//!
//! Validators return `Err(message)` with text meant for the person typing,
//! who is then asked again.

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 40;

/// Check a requested player count against `1..=max`.
///
/// # Example
///
/// ```rust
/// # use dicematch_cli::validation::validate_player_count;
/// assert_eq!(validate_player_count(3, 12), Ok(3));
/// assert!(validate_player_count(0, 12).is_err());
/// assert!(validate_player_count(13, 12).is_err());
/// ```
pub fn validate_player_count(requested: i64, max: u32) -> Result<usize, String> {
    if requested < 1 {
        return Err("There must be at least 1 player".to_string());
    }
    if requested > i64::from(max) {
        return Err(format!("At most {} players can take part", max));
    }
    Ok(requested as usize)
}

/// Names must be non-empty after trimming and at most [`MAX_NAME_LEN`] long.
pub fn validate_player_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Player name must not be empty".to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(format!(
            "Player name must be at most {} characters",
            MAX_NAME_LEN
        ));
    }
    if trimmed.chars().any(char::is_control) {
        return Err("Player name must not contain control characters".to_string());
    }
    Ok(())
}
