//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};

use notes_core::date::format_date;
use notes_core::{NoteSummary, NoteView};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render the note listing. Numbers are one-based.
///
/// Pretty mode: bordered table with a header row
/// Plain mode: "number date title" per line, no header
pub fn notes_table(ctx: &UiContext, notes: &[NoteSummary]) -> String {
    let rows: Vec<[String; 3]> = notes
        .iter()
        .map(|note| {
            [
                (note.position + 1).to_string(),
                format_date(note.date),
                note.title.clone(),
            ]
        })
        .collect();

    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    if rows.is_empty() {
        return styled("No notes yet.", styles::dim(), ctx.color);
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Date", "Title"]);
    for row in rows {
        table.add_row(row.to_vec());
    }
    table.to_string()
}

/// Render a single decrypted note.
pub fn note_detail(ctx: &UiContext, view: &NoteView) -> String {
    [
        kv(ctx, "Date", &format_date(view.date)),
        kv(ctx, "Title", &styled(&view.title, styles::bold(), ctx.color)),
        kv(ctx, "Body", &view.body),
    ]
    .join("\n")
}

pub fn notes_json(notes: &[NoteSummary]) -> serde_json::Value {
    serde_json::Value::Array(
        notes
            .iter()
            .map(|note| {
                serde_json::json!({
                    "number": note.position + 1,
                    "date": format_date(note.date),
                    "title": note.title,
                })
            })
            .collect(),
    )
}

pub fn note_json(number: usize, view: &NoteView) -> serde_json::Value {
    serde_json::json!({
        "number": number,
        "date": format_date(view.date),
        "title": view.title,
        "body": view.body,
    })
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;
    use chrono::NaiveDate;

    fn plain_ctx() -> UiContext {
        UiContext::plain()
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode: OutputMode::Pretty,
        }
    }

    fn summaries() -> Vec<NoteSummary> {
        vec![
            NoteSummary {
                position: 0,
                date: NaiveDate::from_ymd_opt(2020, 5, 5).unwrap(),
                title: "B".to_string(),
            },
            NoteSummary {
                position: 1,
                date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
                title: "A title".to_string(),
            },
        ]
    }

    #[test]
    fn test_table_plain() {
        let output = notes_table(&plain_ctx(), &summaries());
        assert_eq!(output, "1 05.05.2020 B\n2 01.01.2021 A title");
    }

    #[test]
    fn test_table_pretty_has_header() {
        let output = notes_table(&pretty_ctx(), &summaries());
        assert!(output.contains("Date"));
        assert!(output.contains("Title"));
        assert!(output.contains("05.05.2020"));
        assert!(output.contains("A title"));
    }

    #[test]
    fn test_table_pretty_empty() {
        let output = notes_table(&pretty_ctx(), &[]);
        assert_eq!(output, "No notes yet.");
    }

    #[test]
    fn test_note_detail_plain() {
        let view = NoteView {
            date: NaiveDate::from_ymd_opt(2021, 7, 11).unwrap(),
            title: "T".to_string(),
            body: "B".to_string(),
        };
        assert_eq!(
            note_detail(&plain_ctx(), &view),
            "date=11.07.2021\ntitle=T\nbody=B"
        );
    }

    #[test]
    fn test_notes_json_numbers_from_one() {
        let value = notes_json(&summaries());
        assert_eq!(value[0]["number"], 1);
        assert_eq!(value[1]["date"], "01.01.2021");
    }

    #[test]
    fn test_error_message_plain_and_pretty() {
        assert_eq!(
            error_message(&plain_ctx(), "boom", Some("retry")),
            "error=boom\nhint=retry"
        );
        assert_eq!(
            error_message(&pretty_ctx(), "boom", None),
            "[ERR] boom"
        );
    }
}
