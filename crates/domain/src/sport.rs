use log::debug;
use serde::{Deserialize, Serialize};

/// Sport of a workout as understood by the watch ecosystems.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    #[default]
    Running,
    Biking,
    Swimming,
}

impl Sport {
    /// Maps a free-text activity type to a sport. Unknown activities are treated as running.
    #[must_use]
    pub fn from_activity_type(activity_type: &str) -> Self {
        match activity_type.trim().to_lowercase().as_str() {
            "run" | "running" | "course" => Sport::Running,
            "bike" | "cycling" | "vélo" => Sport::Biking,
            "swim" | "swimming" | "natation" => Sport::Swimming,
            other => {
                debug!("unknown activity type {other:?}, assuming running");
                Sport::Running
            }
        }
    }

    #[must_use]
    pub fn tcx_name(self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::Biking => "Biking",
            Sport::Swimming => "Swimming",
        }
    }

    /// Lowercase key used by Garmin Connect workout documents.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Sport::Running => "running",
            Sport::Biking => "cycling",
            Sport::Swimming => "swimming",
        }
    }
}
