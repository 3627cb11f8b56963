#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod format;
mod garmin;
mod markdown;
mod settings;
mod tcx;
mod text;

use log::debug;
use vbcoach_domain::Session;

pub use error::{ExportError, SettingsError};
pub use format::Format;
pub use garmin::{
    EndCondition, GarminWorkout, SportType, StepKind, StepTarget, StepType, WorkoutSegment,
    WorkoutStep, encode_garmin_json,
};
pub use markdown::encode_markdown;
pub use settings::{Author, ExportSettings};
pub use tcx::encode_tcx;
pub use text::encode_text;

/// Step added before or after the blocks of watch workouts.
struct SyntheticStep {
    name: &'static str,
    seconds: u32,
}

const WARMUP: SyntheticStep = SyntheticStep {
    name: "Échauffement",
    seconds: 600,
};

const COOLDOWN: SyntheticStep = SyntheticStep {
    name: "Retour au calme",
    seconds: 300,
};

/// An exported session ready to be sent to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub content: String,
    pub content_type: &'static str,
    pub filename: String,
}

/// Exports a session in the format named by `token` using the default settings.
pub fn export_session(
    session: &Session,
    athlete_name: &str,
    token: &str,
) -> Result<Export, ExportError> {
    export_session_with(session, athlete_name, token, &ExportSettings::default())
}

pub fn export_session_with(
    session: &Session,
    athlete_name: &str,
    token: &str,
    settings: &ExportSettings,
) -> Result<Export, ExportError> {
    let format = Format::from_token(token)?;
    debug!(
        "exporting session {:?} with {} blocks as {format:?}",
        session.title,
        session.blocks.len()
    );
    Ok(Export {
        content: encode(session, athlete_name, format, settings)?,
        content_type: format.content_type(),
        filename: format.filename(&session.title),
    })
}

pub fn encode(
    session: &Session,
    athlete_name: &str,
    format: Format,
    settings: &ExportSettings,
) -> Result<String, ExportError> {
    Ok(match format {
        Format::Tcx => encode_tcx(session, athlete_name, &settings.author),
        Format::GarminJson => serde_json::to_string_pretty(&encode_garmin_json(session))?,
        Format::Text => encode_text(session),
        Format::Markdown => encode_markdown(session),
    })
}
