use crate::error::{DirectoryError, Result};

/// Fetch the positional argument at `idx`, or fail with the
/// not-enough-params kind.
pub fn arg<'a>(args: &'a [String], idx: usize) -> Result<&'a str> {
    args.get(idx)
        .map(String::as_str)
        .ok_or(DirectoryError::MissingArgs {
            needed: idx + 1,
            got: args.len(),
        })
}

/// First letter uppercased, the rest lowercased, for echoing names back
/// the way the bot's messages always have.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
