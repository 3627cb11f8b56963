use std::str::FromStr;

use crate::ExportError;

/// Target representation of an exported session.
#[derive(strum::EnumString, strum::EnumIter, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Format {
    #[strum(serialize = "tcx")]
    Tcx,
    #[strum(serialize = "json", serialize = "garmin")]
    GarminJson,
    #[strum(serialize = "txt", serialize = "text")]
    Text,
    #[strum(serialize = "md", serialize = "markdown")]
    Markdown,
}

impl Format {
    pub fn from_token(token: &str) -> Result<Self, ExportError> {
        Format::from_str(token.trim())
            .map_err(|_| ExportError::UnsupportedFormat(token.to_string()))
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::Tcx => "tcx",
            Format::GarminJson => "json",
            Format::Text => "txt",
            Format::Markdown => "md",
        }
    }

    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Format::Tcx => "application/xml",
            Format::GarminJson => "application/json",
            Format::Text => "text/plain; charset=utf-8",
            Format::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// File name for a session with the given title.
    #[must_use]
    pub fn filename(self, title: &str) -> String {
        format!("{}.{}", sanitize_title(title), self.extension())
    }
}

const FALLBACK_FILE_STEM: &str = "seance";

fn sanitize_title(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    let stem = stem.trim_end_matches('_');
    if stem.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        stem.to_string()
    }
}
