//! Canonicalization of hand-typed entry names.

use crate::error::NormalizationError;
use itertools::Itertools;

/// Turns free text into a title-cased display name.
///
/// Hyphens and underscores become spaces, everything except ASCII letters and
/// spaces is dropped, whitespace runs collapse to one space and each word is
/// capitalized. The output is a fixed point: normalizing it again returns it
/// unchanged.
///
/// ```rust
/// use cookbook::normalize::normalize;
///
/// assert_eq!(normalize(" butter_Bread").unwrap(), "Butter Bread");
/// assert!(normalize("!!!").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String, NormalizationError> {
    let cleaned: String = raw
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect();

    let normalized = cleaned
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .join(" ");

    if normalized.is_empty() {
        return Err(NormalizationError::Empty {
            raw: raw.to_string(),
        });
    }
    Ok(normalized)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
