// Resume Quality & Job-Match Analysis Engine.
// Every function here is pure: borrowed inputs, owned report out, no I/O.
// Handlers are the only place this module touches the HTTP layer.

pub mod bullets;
pub mod handlers;
pub mod improvements;
pub mod job_match;
pub mod keywords;
pub mod quality;
pub mod skills;
pub mod summary;

/// Length in characters, not bytes.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Upper-cases the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
