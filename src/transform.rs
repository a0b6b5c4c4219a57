use regex::Regex;
use std::fmt;

// (?s) lets `.` match newlines; both deletions span lines.
const NAV_LINK_PATTERN: &str = r##"(?s)<a href="#categories"[^>]*>.*?</a>\s*"##;
const VIEW_SECTION_PATTERN: &str = r"(?s)<!-- Categories View -->.*?<!-- Analytics View -->";
const VIEW_SECTION_END: &str = "<!-- Analytics View -->";

#[derive(Debug, Clone)]
pub enum TransformError {
    InvalidPattern(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::InvalidPattern(msg) => write!(f, "Transform error: {msg}"),
        }
    }
}

impl std::error::Error for TransformError {}

/// Delete every anchor element whose href targets the categories section,
/// together with any trailing whitespace.
///
/// The inner content is matched non-greedily up to the nearest `</a>`, so a
/// nested anchor would terminate the match early. That matches the original
/// pattern and is kept as-is.
pub fn remove_nav_link(text: &str) -> Result<String, TransformError> {
    let regex = Regex::new(NAV_LINK_PATTERN)
        .map_err(|e| TransformError::InvalidPattern(format!("Invalid regex: {e}")))?;
    Ok(regex.replace_all(text, "").to_string())
}

/// Delete everything from the `<!-- Categories View -->` marker through the
/// `<!-- Analytics View -->` marker, keeping the end marker as the new
/// section boundary. If either marker is missing the text is unchanged.
pub fn remove_view_section(text: &str) -> Result<String, TransformError> {
    let regex = Regex::new(VIEW_SECTION_PATTERN)
        .map_err(|e| TransformError::InvalidPattern(format!("Invalid regex: {e}")))?;
    Ok(regex.replace_all(text, VIEW_SECTION_END).to_string())
}

/// Run both deletion passes in order: nav link first, view section second.
pub fn apply(text: &str) -> Result<String, TransformError> {
    let text = remove_nav_link(text)?;
    remove_view_section(&text)
}
