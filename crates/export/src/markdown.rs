use std::fmt::Write;

use vbcoach_domain::{Block, Session};

#[must_use]
pub fn encode_markdown(session: &Session) -> String {
    let mut markdown = String::new();

    let _ = writeln!(markdown, "# {}\n", fold_lines(session.title.trim()));

    let description = session.description.trim();
    if !description.is_empty() {
        for line in description.lines() {
            let _ = writeln!(markdown, "> {line}");
        }
        markdown.push('\n');
    }

    let mut summary = vec![
        ("Activité", session.activity_type.clone()),
        ("Durée", format!("{} min", session.total_duration_minutes)),
    ];
    if let Some(distance) = session.distance_km {
        summary.push(("Distance", format!("{distance} km")));
    }
    summary.push(("Intensité", session.intensity.clone()));
    write_table(&mut markdown, "Séance", &summary);

    markdown.push_str("\n## Programme\n");
    if session.blocks.is_empty() {
        markdown.push_str("\n_Aucun bloc._\n");
    }
    for (index, block) in session.blocks.iter().enumerate() {
        let _ = writeln!(markdown, "\n### {}. {}\n", index + 1, fold_lines(&block.kind));
        write_table(&mut markdown, "Paramètre", &block_rows(block));
    }

    markdown
}

fn block_rows(block: &Block) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Durée", format!("{} min", block.duration_minutes))];
    for (label, value) in [
        ("Allure", present(block.pace_label.as_deref()).map(|p| format!("{p} /km"))),
        ("Vitesse", present(block.speed_label.as_deref()).map(|s| format!("{s} km/h"))),
        ("FC", present(block.heart_rate_label.as_deref()).map(str::to_string)),
        ("Répétitions", block.repetitions.map(|r| r.to_string())),
    ] {
        if let Some(value) = value {
            rows.push((label, value));
        }
    }
    rows.push(("Intensité", block.intensity.clone()));
    rows
}

fn write_table(markdown: &mut String, header: &str, rows: &[(&str, String)]) {
    let _ = writeln!(markdown, "| {header} | Valeur |");
    markdown.push_str("|---|---|\n");
    for (label, value) in rows {
        let _ = writeln!(markdown, "| {label} | {} |", escape_cell(value));
    }
}

fn present(label: Option<&str>) -> Option<&str> {
    label.filter(|l| !l.is_empty())
}

fn escape_cell(value: &str) -> String {
    fold_lines(&value.replace('|', "\\|"))
}

fn fold_lines(value: &str) -> String {
    value.replace('\n', " ")
}
