use derive_more::{Deref, Display, Into};
use log::debug;

/// Pace assumed when a pace label cannot be read (5:30/km).
pub const DEFAULT_PACE: SecondsPerKm = SecondsPerKm(330);

/// Half-width of a pace target in seconds per kilometre.
pub const PACE_TOLERANCE: u32 = 10;

#[derive(Deref, Display, Into, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SecondsPerKm(u32);

impl From<u32> for SecondsPerKm {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl SecondsPerKm {
    /// Lower and upper pace bound of a pace target in seconds per kilometre.
    ///
    /// Bounds are signed as a pace faster than the tolerance has a negative lower bound.
    #[must_use]
    pub fn bounds(self) -> (i64, i64) {
        let pace = i64::from(self.0);
        let tolerance = i64::from(PACE_TOLERANCE);
        (pace - tolerance, pace + tolerance)
    }

    /// Speed range in metres per second covering the pace target.
    ///
    /// The slower pace bound gives the lower speed bound.
    #[must_use]
    pub fn speed_zone(self) -> SpeedZone {
        let (fast, slow) = self.bounds();
        SpeedZone {
            low: round_to_hundredths(metres_per_second(slow)),
            high: round_to_hundredths(metres_per_second(fast)),
        }
    }
}

/// Speed range in metres per second, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedZone {
    pub low: f64,
    pub high: f64,
}

#[allow(clippy::cast_precision_loss)]
fn metres_per_second(seconds_per_km: i64) -> f64 {
    1000.0 / seconds_per_km as f64
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reads a `M:SS` pace label.
///
/// This never fails: a missing or malformed label yields [`DEFAULT_PACE`] so that a single
/// bad field does not block the export of a whole workout.
#[must_use]
pub fn parse_pace(label: Option<&str>) -> SecondsPerKm {
    let Some(label) = label else {
        return DEFAULT_PACE;
    };
    let parts = label
        .split(':')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Vec<_>>();
    match parts.as_slice() {
        [Ok(minutes), Ok(seconds)] => minutes
            .checked_mul(60)
            .and_then(|s| s.checked_add(*seconds))
            .map_or_else(
                || {
                    debug!("pace {label:?} out of range, using default pace");
                    DEFAULT_PACE
                },
                SecondsPerKm,
            ),
        _ => {
            debug!("invalid pace {label:?}, using default pace");
            DEFAULT_PACE
        }
    }
}
