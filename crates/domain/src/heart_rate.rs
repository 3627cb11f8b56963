use std::fmt;

use log::debug;
use serde::Serialize;

/// Maximum heart rate assumed when resolving training zones.
pub const MAX_HEART_RATE: u32 = 190;

/// Tolerance around a single heart rate target in beats per minute.
const HEART_RATE_TOLERANCE: i32 = 5;

/// Heart rate in beats per minute.
///
/// A label that does not contain a number results in a missing value. It is rendered as
/// `NaN` in XML and as `null` in JSON.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bpm(Option<i32>);

impl Bpm {
    pub const MISSING: Bpm = Bpm(None);
}

impl From<i32> for Bpm {
    fn from(value: i32) -> Self {
        Self(Some(value))
    }
}

impl fmt::Display for Bpm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "NaN"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeartRateZone {
    pub low: Bpm,
    pub high: Bpm,
}

/// Reads a heart rate label.
///
/// Three shapes are understood:
///
/// - `"low-high"`: the range as written, an inverted range is kept as is
/// - `"Zn"`: training zone `n`, from `50 + 10n` to `60 + 10n` percent of [`MAX_HEART_RATE`]
/// - `"hr"`: a single target widened by 5 bpm on each side
///
/// This never fails. Parts without a number become [`Bpm::MISSING`].
#[must_use]
pub fn parse_heart_rate_zone(label: &str) -> HeartRateZone {
    let zone = if label.contains('-') {
        let mut parts = label.split('-');
        HeartRateZone {
            low: Bpm(parts.next().and_then(|p| parse_leading_int(p.trim()))),
            high: Bpm(parts.next().and_then(|p| parse_leading_int(p.trim()))),
        }
    } else if label.starts_with(['z', 'Z']) {
        let zone = parse_leading_int(&label[1..]);
        HeartRateZone {
            low: Bpm(zone.map(|n| percent_of_max_heart_rate(50.0 + f64::from(n) * 10.0))),
            high: Bpm(zone.map(|n| percent_of_max_heart_rate(60.0 + f64::from(n) * 10.0))),
        }
    } else {
        let heart_rate = parse_leading_int(label);
        HeartRateZone {
            low: Bpm(heart_rate.map(|hr| hr.saturating_sub(HEART_RATE_TOLERANCE))),
            high: Bpm(heart_rate.map(|hr| hr.saturating_add(HEART_RATE_TOLERANCE))),
        }
    };

    if zone.low.0.is_none() || zone.high.0.is_none() {
        debug!("invalid heart rate {label:?}");
    }

    zone
}

#[allow(clippy::cast_possible_truncation)]
fn percent_of_max_heart_rate(percent: f64) -> i32 {
    (f64::from(MAX_HEART_RATE) * percent / 100.0 + 0.5).floor() as i32
}

/// Reads the integer at the start of `value`.
///
/// Leading whitespace and an optional sign are accepted, anything after the digits is ignored.
fn parse_leading_int(value: &str) -> Option<i32> {
    let value = value.trim_start();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let number = rest[..digits].parse::<i32>().ok()?;
    Some(if negative { -number } else { number })
}
