use assert_approx_eq::assert_approx_eq;
use pretty_assertions::assert_eq;
use rstest::rstest;
use vbcoach_domain::{Block, Session};
use vbcoach_export::{
    Author, ExportSettings, Format, encode, encode_garmin_json, encode_markdown, encode_text,
    encode_tcx, export_session,
};

fn block(kind: &str) -> Block {
    Block {
        kind: kind.to_string(),
        duration_minutes: 5,
        intensity: String::from("modéré"),
        ..Block::default()
    }
}

fn session(blocks: Vec<Block>) -> Session {
    Session {
        title: String::from("Séance test"),
        description: String::from("Description"),
        activity_type: String::from("run"),
        total_duration_minutes: 60,
        distance_km: Some(12.0),
        intensity: String::from("modéré"),
        blocks,
    }
}

fn blocks(n: usize) -> Vec<Block> {
    (0..n).map(|i| block(&format!("bloc {i}"))).collect()
}

fn step_ids(xml: &str) -> Vec<String> {
    xml.lines()
        .map(str::trim)
        .filter_map(|l| l.strip_prefix("<StepId>"))
        .filter_map(|l| l.strip_suffix("</StepId>"))
        .map(ToString::to_string)
        .collect()
}

fn element_values(xml: &str, tag: &str) -> Vec<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    xml.lines()
        .map(str::trim)
        .filter_map(|l| l.strip_prefix(open.as_str()))
        .filter_map(|l| l.strip_suffix(close.as_str()))
        .map(ToString::to_string)
        .collect()
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(12)]
fn test_tcx_has_warmup_blocks_and_cooldown(#[case] n: usize) {
    let xml = encode_tcx(&session(blocks(n)), "Alice", &Author::default());

    assert_eq!(xml.matches("<Step ").count(), n + 2);
    let ids = step_ids(&xml);
    assert_eq!(ids.first().map(String::as_str), Some("1"));
    assert_eq!(ids.last(), Some(&(n + 2).to_string()));
    assert_eq!(
        ids,
        (1..=n + 2).map(|id| id.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_tcx_repeated_first_block() {
    let xml = encode_tcx(
        &session(vec![
            Block {
                repetitions: Some(5),
                ..block("400m")
            },
            block("récup"),
        ]),
        "Alice",
        &Author::default(),
    );

    assert_eq!(xml.matches("<Step ").count(), 4);
    assert_eq!(step_ids(&xml), vec!["1", "2", "201", "3", "4"]);
    assert_eq!(element_values(&xml, "Repetitions"), vec!["5"]);
    assert!(xml.contains("<Child xsi:type=\"Step_t\">"));
}

#[test]
fn test_tcx_speed_zone_from_pace() {
    let xml = encode_tcx(
        &session(vec![Block {
            pace_label: Some(String::from("5:30")),
            heart_rate_label: Some(String::from("150")),
            ..block("tempo")
        }]),
        "",
        &Author::default(),
    );

    let low = element_values(&xml, "LowInMetersPerSecond");
    let high = element_values(&xml, "HighInMetersPerSecond");
    assert_eq!(low, vec!["2.94"]);
    assert_eq!(high, vec!["3.13"]);
    assert_approx_eq!(low[0].parse::<f64>().unwrap(), 1000.0 / 340.0, 0.005);
    assert_approx_eq!(high[0].parse::<f64>().unwrap(), 1000.0 / 320.0, 0.005);
    assert!(!xml.contains("HeartRate_t"));
}

#[test]
fn test_tcx_heart_rate_zone() {
    let xml = encode_tcx(
        &session(vec![Block {
            heart_rate_label: Some(String::from("Z2")),
            ..block("endurance")
        }]),
        "",
        &Author::default(),
    );

    assert_eq!(element_values(&xml, "Value"), vec!["133", "152"]);
}

#[test]
fn test_garmin_json_repeated_first_block() {
    let workout = encode_garmin_json(&session(vec![
        Block {
            repetitions: Some(5),
            ..block("400m")
        },
        block("récup"),
    ]));
    let value = serde_json::to_value(&workout).unwrap();
    let steps = value["workoutSegments"][0]["workoutSteps"]
        .as_array()
        .unwrap();

    assert_eq!(steps.len(), 4);
    assert_eq!(steps[1]["stepOrder"], 2);
    assert_eq!(steps[1]["type"], "WorkoutRepeatStep");
    assert_eq!(steps[1]["numberOfIterations"], 5);
    assert_eq!(steps[1]["smartRepeat"], false);
    assert_eq!(steps[2]["type"], "WorkoutStep");
    assert!(steps[2].get("numberOfIterations").is_none());
    assert_eq!(steps[3]["stepOrder"], 4);
}

#[test]
fn test_garmin_json_pace_wins_over_heart_rate() {
    let workout = encode_garmin_json(&session(vec![Block {
        pace_label: Some(String::from("5:30")),
        heart_rate_label: Some(String::from("140-160")),
        ..block("tempo")
    }]));
    let value = serde_json::to_value(&workout).unwrap();
    let step = &value["workoutSegments"][0]["workoutSteps"][1];

    assert_eq!(step["targetType"], "PACE");
    assert_eq!(step["targetValueOne"], 320);
    assert_eq!(step["targetValueTwo"], 340);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
fn test_text_and_markdown_render_only_the_blocks(#[case] n: usize) {
    let session = session(blocks(n));

    let text = encode_text(&session);
    let numbered = text
        .lines()
        .filter(|l| l.starts_with(char::is_numeric) && l.contains(". bloc "))
        .count();
    assert_eq!(numbered, n);
    assert!(!text.contains("Échauffement"));
    assert!(!text.contains("Retour au calme"));

    let markdown = encode_markdown(&session);
    assert_eq!(markdown.matches("\n### ").count(), n);
    assert!(!markdown.contains("Échauffement"));
    assert!(!markdown.contains("Retour au calme"));
}

#[rstest]
#[case(Format::Tcx)]
#[case(Format::GarminJson)]
#[case(Format::Text)]
#[case(Format::Markdown)]
fn test_encoders_are_deterministic(#[case] format: Format) {
    let session = session(vec![
        Block {
            pace_label: Some(String::from("4:30")),
            repetitions: Some(3),
            ..block("1000m")
        },
        Block {
            heart_rate_label: Some(String::from("abc")),
            ..block("footing")
        },
    ]);
    let settings = ExportSettings::default();

    assert_eq!(
        encode(&session, "Alice", format, &settings).unwrap(),
        encode(&session, "Alice", format, &settings).unwrap()
    );
}

#[test]
fn test_export_session_from_json_document() {
    let session: Session = serde_json::from_str(
        r#"{
            "title": "Côtes",
            "description": "10 x 200 m en côte",
            "activityType": "Course",
            "totalDurationMinutes": 45,
            "intensity": "élevé",
            "blocks": [
                {"kind": "warmup", "durationMinutes": 15, "intensity": "faible"},
                {"kind": "côte", "durationMinutes": 1, "intensity": "élevé", "repetitions": 10},
                {"kind": "cooldown", "durationMinutes": 10, "intensity": "récupération"}
            ]
        }"#,
    )
    .unwrap();

    let export = export_session(&session, "Bob", "tcx").unwrap();

    assert_eq!(export.filename, "C_tes.tcx");
    assert_eq!(export.content_type, "application/xml");
    assert_eq!(step_ids(&export.content), vec!["1", "2", "3", "301", "4", "5"]);
    assert!(export.content.contains("<Intensity>Resting</Intensity>"));
    assert!(
        export
            .content
            .contains("<Notes>10 x 200 m en côte\nAthlète : Bob</Notes>")
    );
}
