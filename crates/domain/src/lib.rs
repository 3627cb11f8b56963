#![warn(clippy::pedantic)]

mod escape;
mod heart_rate;
mod intensity;
mod pace;
mod session;
mod sport;

pub use escape::escape_text;
pub use heart_rate::{Bpm, HeartRateZone, MAX_HEART_RATE, parse_heart_rate_zone};
pub use intensity::WatchIntensity;
pub use pace::{DEFAULT_PACE, PACE_TOLERANCE, SecondsPerKm, SpeedZone, parse_pace};
pub use session::{Block, Session, Target};
pub use sport::Sport;
