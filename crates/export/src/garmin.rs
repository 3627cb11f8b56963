//! Garmin Connect workout documents.

use serde::Serialize;
use vbcoach_domain::{Block, Bpm, Session, Target};

use crate::{COOLDOWN, WARMUP};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GarminWorkout {
    pub workout_name: String,
    pub description: String,
    pub sport: &'static str,
    pub estimated_duration_in_secs: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_distance_in_meters: Option<f64>,
    pub workout_segments: Vec<WorkoutSegment>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSegment {
    pub segment_order: u32,
    pub sport_type: SportType,
    pub workout_steps: Vec<WorkoutStep>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SportType {
    pub sport_type_key: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStep {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub step_order: usize,
    pub step_type: StepType,
    pub description: String,
    pub end_condition: EndCondition,
    pub end_condition_value: u32,
    pub intensity: &'static str,
    #[serde(flatten)]
    pub target: StepTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_iterations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_repeat: Option<bool>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    WorkoutStep,
    WorkoutRepeatStep,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepType {
    pub step_type_key: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EndCondition {
    pub condition_type_key: &'static str,
}

const TIME: EndCondition = EndCondition {
    condition_type_key: "time",
};

/// Step target in the units Garmin expects: seconds per kilometre for paces, beats per minute
/// for heart rates.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "targetType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepTarget {
    Pace {
        #[serde(rename = "targetValueOne")]
        target_value_one: i64,
        #[serde(rename = "targetValueTwo")]
        target_value_two: i64,
    },
    HeartRate {
        #[serde(rename = "targetValueOne")]
        target_value_one: Bpm,
        #[serde(rename = "targetValueTwo")]
        target_value_two: Bpm,
    },
    NoTarget,
}

impl From<Target> for StepTarget {
    fn from(value: Target) -> Self {
        match value {
            Target::Pace(pace) => {
                let (fast, slow) = pace.bounds();
                StepTarget::Pace {
                    target_value_one: fast,
                    target_value_two: slow,
                }
            }
            Target::HeartRate(zone) => StepTarget::HeartRate {
                target_value_one: zone.low,
                target_value_two: zone.high,
            },
            Target::None => StepTarget::NoTarget,
        }
    }
}

#[must_use]
pub fn encode_garmin_json(session: &Session) -> GarminWorkout {
    let sport = session.sport().key();

    let mut steps = Vec::with_capacity(session.blocks.len() + 2);
    steps.push(synthetic_step(1, "warmup", WARMUP.name, WARMUP.seconds, "WARMUP"));
    steps.extend(
        session
            .blocks
            .iter()
            .enumerate()
            .map(|(index, block)| block_step(index + 2, block)),
    );
    steps.push(synthetic_step(
        session.blocks.len() + 2,
        "cooldown",
        COOLDOWN.name,
        COOLDOWN.seconds,
        "COOLDOWN",
    ));

    GarminWorkout {
        workout_name: session.title.clone(),
        description: session.description.clone(),
        sport,
        estimated_duration_in_secs: session.total_duration_seconds(),
        estimated_distance_in_meters: session.distance_km.map(|km| km * 1000.0),
        workout_segments: vec![WorkoutSegment {
            segment_order: 1,
            sport_type: SportType {
                sport_type_key: sport,
            },
            workout_steps: steps,
        }],
    }
}

fn synthetic_step(
    step_order: usize,
    step_type_key: &'static str,
    description: &str,
    seconds: u32,
    intensity: &'static str,
) -> WorkoutStep {
    WorkoutStep {
        kind: StepKind::WorkoutStep,
        step_order,
        step_type: StepType { step_type_key },
        description: description.to_string(),
        end_condition: TIME,
        end_condition_value: seconds,
        intensity,
        target: StepTarget::NoTarget,
        number_of_iterations: None,
        smart_repeat: None,
    }
}

fn block_step(step_order: usize, block: &Block) -> WorkoutStep {
    let repeated = block.is_repeated();
    WorkoutStep {
        kind: if repeated {
            StepKind::WorkoutRepeatStep
        } else {
            StepKind::WorkoutStep
        },
        step_order,
        step_type: StepType {
            step_type_key: if repeated { "repeat" } else { "interval" },
        },
        description: block.kind.clone(),
        end_condition: TIME,
        end_condition_value: block.duration_seconds(),
        intensity: block.watch_intensity().garmin_key(),
        target: block.target().into(),
        number_of_iterations: if repeated { block.repetitions } else { None },
        smart_repeat: repeated.then_some(false),
    }
}
