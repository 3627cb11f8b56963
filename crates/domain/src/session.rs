use serde::{Deserialize, Serialize};

use crate::{
    HeartRateZone, SecondsPerKm, Sport, WatchIntensity, parse_heart_rate_zone, parse_pace,
};

/// A structured training session as authored by the coach.
///
/// The order of `blocks` is the execution order on the watch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default)]
    pub total_duration_minutes: u32,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub intensity: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Session {
    #[must_use]
    pub fn sport(&self) -> Sport {
        Sport::from_activity_type(&self.activity_type)
    }

    #[must_use]
    pub fn total_duration_seconds(&self) -> u32 {
        self.total_duration_minutes.saturating_mul(60)
    }
}

/// One instruction within a session.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub kind: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub intensity: String,
    #[serde(default)]
    pub pace_label: Option<String>,
    #[serde(default)]
    pub speed_label: Option<String>,
    #[serde(default)]
    pub heart_rate_label: Option<String>,
    #[serde(default)]
    pub repetitions: Option<u32>,
}

impl Block {
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        self.repetitions.is_some_and(|r| r > 1)
    }

    #[must_use]
    pub fn duration_seconds(&self) -> u32 {
        self.duration_minutes.saturating_mul(60)
    }

    #[must_use]
    pub fn watch_intensity(&self) -> WatchIntensity {
        WatchIntensity::from_label(&self.intensity)
    }

    /// Selects the watch target of the block. A pace wins over a heart rate.
    ///
    /// Malformed labels never fail: the pace falls back to the default pace and an
    /// unreadable heart rate yields missing bounds.
    #[must_use]
    pub fn target(&self) -> Target {
        if let Some(pace) = present(self.pace_label.as_deref()) {
            Target::Pace(parse_pace(Some(pace)))
        } else if let Some(heart_rate) = present(self.heart_rate_label.as_deref()) {
            Target::HeartRate(parse_heart_rate_zone(heart_rate))
        } else {
            Target::None
        }
    }
}

fn present(label: Option<&str>) -> Option<&str> {
    label.filter(|l| !l.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    Pace(SecondsPerKm),
    HeartRate(HeartRateZone),
    None,
}
