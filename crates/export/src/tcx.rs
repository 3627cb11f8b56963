//! Training Center XML workouts.
//!
//! The workout always starts with a ten minute warmup and ends with a five minute cooldown.
//! Repeated blocks are wrapped into a `Repeat_t` step whose single child has the id of the
//! repeat step followed by `01`.

use vbcoach_domain::{Block, HeartRateZone, Session, Target, escape_text};

use crate::{Author, COOLDOWN, WARMUP};

const NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
const SCHEMA_INSTANCE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2 \
    http://www.garmin.com/xmlschemas/TrainingCenterDatabasev2.xsd";

#[must_use]
pub fn encode_tcx(session: &Session, athlete_name: &str, author: &Author) -> String {
    let mut xml = XmlWriter::new();

    xml.open(
        "TrainingCenterDatabase",
        &[
            ("xmlns", NAMESPACE),
            ("xmlns:xsi", SCHEMA_INSTANCE),
            ("xsi:schemaLocation", SCHEMA_LOCATION),
        ],
    );
    xml.open("Workouts", &[]);
    xml.open("Workout", &[("Sport", session.sport().tcx_name())]);
    xml.element("Name", &session.title);

    write_step(
        &mut xml,
        "Step",
        &StepContent {
            id: "1",
            name: WARMUP.name,
            seconds: WARMUP.seconds,
            intensity: "Warmup",
            target: Target::None,
        },
    );
    for (index, block) in session.blocks.iter().enumerate() {
        write_block(&mut xml, index + 2, block);
    }
    write_step(
        &mut xml,
        "Step",
        &StepContent {
            id: &(session.blocks.len() + 2).to_string(),
            name: COOLDOWN.name,
            seconds: COOLDOWN.seconds,
            intensity: "Cooldown",
            target: Target::None,
        },
    );

    let notes = notes(&session.description, athlete_name);
    if !notes.is_empty() {
        xml.element("Notes", &notes);
    }

    xml.close("Workout");
    xml.close("Workouts");
    write_author(&mut xml, author);
    xml.close("TrainingCenterDatabase");

    xml.finish()
}

struct StepContent<'a> {
    id: &'a str,
    name: &'a str,
    seconds: u32,
    intensity: &'a str,
    target: Target,
}

fn write_block(xml: &mut XmlWriter, step_id: usize, block: &Block) {
    let id = step_id.to_string();

    match block.repetitions {
        Some(repetitions) if block.is_repeated() => {
            xml.open("Step", &[("xsi:type", "Repeat_t")]);
            xml.element("StepId", &id);
            xml.element("Repetitions", &repetitions.to_string());
            write_step(xml, "Child", &block_step(&format!("{id}01"), block));
            xml.close("Step");
        }
        _ => write_step(xml, "Step", &block_step(&id, block)),
    }
}

fn block_step<'a>(id: &'a str, block: &'a Block) -> StepContent<'a> {
    StepContent {
        id,
        name: &block.kind,
        seconds: block.duration_seconds(),
        intensity: block.watch_intensity().tcx_name(),
        target: block.target(),
    }
}

fn write_step(xml: &mut XmlWriter, tag: &str, step: &StepContent) {
    xml.open(tag, &[("xsi:type", "Step_t")]);
    xml.element("StepId", step.id);
    xml.element("Name", step.name);
    xml.open("Duration", &[("xsi:type", "Time_t")]);
    xml.element("Seconds", &step.seconds.to_string());
    xml.close("Duration");
    xml.element("Intensity", step.intensity);
    write_target(xml, step.target);
    xml.close(tag);
}

fn write_target(xml: &mut XmlWriter, target: Target) {
    match target {
        Target::Pace(pace) => {
            let zone = pace.speed_zone();
            xml.open("Target", &[("xsi:type", "Speed_t")]);
            xml.open("SpeedZone", &[("xsi:type", "CustomSpeedZone_t")]);
            xml.element("LowInMetersPerSecond", &format!("{:.2}", zone.low));
            xml.element("HighInMetersPerSecond", &format!("{:.2}", zone.high));
            xml.close("SpeedZone");
            xml.close("Target");
        }
        Target::HeartRate(HeartRateZone { low, high }) => {
            xml.open("Target", &[("xsi:type", "HeartRate_t")]);
            xml.open("HeartRateZone", &[("xsi:type", "CustomHeartRateZone_t")]);
            for (tag, value) in [("Low", low), ("High", high)] {
                xml.open(tag, &[("xsi:type", "HeartRateInBeatsPerMinute_t")]);
                xml.element("Value", &value.to_string());
                xml.close(tag);
            }
            xml.close("HeartRateZone");
            xml.close("Target");
        }
        Target::None => xml.empty("Target", &[("xsi:type", "None_t")]),
    }
}

fn write_author(xml: &mut XmlWriter, author: &Author) {
    xml.open("Author", &[("xsi:type", "Application_t")]);
    xml.element("Name", &author.name);
    xml.open("Build", &[]);
    xml.open("Version", &[]);
    xml.element("VersionMajor", &author.version_major.to_string());
    xml.element("VersionMinor", &author.version_minor.to_string());
    xml.close("Version");
    xml.close("Build");
    xml.element("LangID", &author.lang_id);
    xml.element("PartNumber", &author.part_number);
    xml.close("Author");
}

fn notes(description: &str, athlete_name: &str) -> String {
    let description = description.trim();
    let athlete_name = athlete_name.trim();
    match (description.is_empty(), athlete_name.is_empty()) {
        (_, true) => description.to_string(),
        (true, false) => format!("Athlète : {athlete_name}"),
        (false, false) => format!("{description}\nAthlète : {athlete_name}"),
    }
}

/// Indenting XML builder. Text and attribute values are escaped on insertion.
struct XmlWriter {
    out: String,
    depth: usize,
}

impl XmlWriter {
    fn new() -> Self {
        Self {
            out: String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"),
            depth: 0,
        }
    }

    fn open(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.start_tag(tag, attributes);
        self.out.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth -= 1;
        self.indent();
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    fn empty(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.start_tag(tag, attributes);
        self.out.push_str("/>\n");
    }

    fn element(&mut self, tag: &str, text: &str) {
        self.start_tag(tag, &[]);
        self.out.push('>');
        self.out.push_str(&escape_text(text));
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push_str(">\n");
    }

    fn start_tag(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.indent();
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attributes {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            self.out.push_str(&escape_text(value));
            self.out.push('"');
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
