use std::fmt::Write;

use vbcoach_domain::{Block, Session};

/// Renders a session as plain text.
///
/// Labels are shown as written by the coach. Blocks are numbered from 1.
#[must_use]
pub fn encode_text(session: &Session) -> String {
    let mut text = String::new();

    let title = session.title.trim();
    text.push_str(title);
    text.push('\n');
    text.push_str(&"=".repeat(title.chars().count()));
    text.push('\n');
    line(&mut text, "Activité", &session.activity_type);
    line(
        &mut text,
        "Durée",
        &format!("{} min", session.total_duration_minutes),
    );
    if let Some(distance) = session.distance_km {
        line(&mut text, "Distance", &format!("{distance} km"));
    }
    line(&mut text, "Intensité", &session.intensity);
    if !session.description.trim().is_empty() {
        text.push('\n');
        text.push_str(session.description.trim());
        text.push('\n');
    }

    text.push_str("\nPROGRAMME\n");
    if session.blocks.is_empty() {
        text.push_str("(aucun bloc)\n");
    }
    for (index, block) in session.blocks.iter().enumerate() {
        text.push('\n');
        write_block(&mut text, index + 1, block);
    }

    text
}

fn line(text: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        let _ = writeln!(text, "{label} : {value}");
    }
}

fn write_block(text: &mut String, number: usize, block: &Block) {
    let _ = writeln!(text, "{number}. {} ({} min)", block.kind, block.duration_minutes);
    let repetitions = block.repetitions.map(|r| r.to_string());
    for (prefix, value, unit) in [
        ("⏱️ Allure", block.pace_label.as_deref(), " /km"),
        ("🚀 Vitesse", block.speed_label.as_deref(), " km/h"),
        ("❤️ FC", block.heart_rate_label.as_deref(), ""),
        ("🔁 Répétitions", repetitions.as_deref(), ""),
        ("💪 Intensité", Some(block.intensity.as_str()), ""),
    ] {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let _ = writeln!(text, "   {prefix} : {value}{unit}");
        }
    }
}
