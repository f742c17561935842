//! Small text formatting helpers.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Uppercase the first character for display (`"bulbasaur"` -> `"Bulbasaur"`).
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
