use tracing::debug;

use crate::error::Result;
use crate::host::ConfigSource;

/// Config key holding a custom vowel alphabet.
pub const VOWELS_KEY: &str = "vowels";

/// Alphabet used when the host configures none. Both cases are listed
/// explicitly; matching never folds case.
pub const DEFAULT_VOWELS: &str = "aeiouAEIOU";

/// Resolves the active alphabet. An absent or empty value falls back to
/// [`DEFAULT_VOWELS`]; anything else is used verbatim.
pub fn get_vowels(config: &impl ConfigSource) -> Result<String> {
    let vowels = match config.get(VOWELS_KEY)? {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_VOWELS.to_string(),
    };
    debug!(vowels = %vowels, "resolved vowel alphabet");
    Ok(vowels)
}

/// Counts the chars of `input` that appear in `vowels`, saturating at
/// `u32::MAX`.
pub fn count(input: &str, vowels: &str) -> u32 {
    let found = input.chars().filter(|c| vowels.contains(*c)).count();
    u32::try_from(found).unwrap_or(u32::MAX)
}
