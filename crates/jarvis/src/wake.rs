//! Wake-word gating
//!
//! When the wake word is enabled, only messages starting with the wake
//! phrase reach the dispatcher; everything else gets a fixed reminder.

/// Required leading phrase, matched case-insensitively.
pub const WAKE_PHRASE: &str = "hey jarvis";

/// Reminder spoken when the wake word is on but the phrase is missing.
pub const WAKE_REMINDER: &str =
    "I heard you, but wake word is on. Start with \"Hey Jarvis...\"";

/// Strip the wake phrase from the front of `input`.
///
/// Returns the remaining command text, or `None` when the phrase is absent.
/// Punctuation and whitespace directly after the phrase are consumed, so
/// "Hey Jarvis, who are you" yields "who are you".
pub fn strip_wake_phrase(input: &str) -> Option<String> {
    let trimmed = input.trim();

    // `get` keeps this panic-free on multi-byte input.
    let prefix = trimmed.get(..WAKE_PHRASE.len())?;
    if !prefix.eq_ignore_ascii_case(WAKE_PHRASE) {
        return None;
    }
    let rest = &trimmed[WAKE_PHRASE.len()..];

    let command = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',' || c == '!');
    Some(command.trim().to_string())
}
