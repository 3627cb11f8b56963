use log::debug;
use serde::{Deserialize, Serialize};

/// Intensity token understood by watches.
///
/// Every intensity other than recovery collapses to `Active`. Watches only distinguish
/// between effort and rest.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WatchIntensity {
    #[default]
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "REST")]
    Resting,
}

impl WatchIntensity {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" | "faible" | "moderate" | "modéré" | "high" | "élevé" => {
                WatchIntensity::Active
            }
            "recovery" | "récupération" => WatchIntensity::Resting,
            other => {
                debug!("unknown intensity {other:?}, assuming active");
                WatchIntensity::Active
            }
        }
    }

    #[must_use]
    pub fn tcx_name(self) -> &'static str {
        match self {
            WatchIntensity::Active => "Active",
            WatchIntensity::Resting => "Resting",
        }
    }

    #[must_use]
    pub fn garmin_key(self) -> &'static str {
        match self {
            WatchIntensity::Active => "ACTIVE",
            WatchIntensity::Resting => "REST",
        }
    }
}
