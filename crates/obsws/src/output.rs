//! Output formatting: titled tables and single sentences.
//!
//! Tables use `tabled`; the active [`Style`] decides borders and colours.
//! Everything is rendered to a `String` so handlers stay testable, and
//! `main` prints the result once.

use std::io::{self, Write};

use tabled::{
    Table, Tabled,
    settings::{Color, Panel, Style as TableStyle, object::Rows, style::BorderColor},
};

use crate::style::Style;

/// Title row plus column header row.
const HEADER_ROWS: usize = 2;

// ── Tables ───────────────────────────────────────────────────────────

/// Render `rows` under a title row.
pub fn render_table<R: Tabled>(title: &str, rows: &[R], style: &Style) -> String {
    build_table(title, rows, style, false)
}

/// Like [`render_table`], with every other data row dimmed.
pub fn render_striped_table<R: Tabled>(title: &str, rows: &[R], style: &Style) -> String {
    build_table(title, rows, style, true)
}

fn build_table<R: Tabled>(title: &str, rows: &[R], style: &Style, striped: bool) -> String {
    let mut table = Table::new(rows);
    table.with(Panel::header(title));

    if style.border() {
        table.with(TableStyle::rounded());
    } else {
        table.with(TableStyle::empty());
    }

    if let Some(palette) = style.palette() {
        if style.border() {
            table.with(BorderColor::filled(palette.border_color()));
        }
        table.modify(Rows::single(0), Color::BOLD);
        table.modify(Rows::single(1), palette.column_color() | Color::BOLD);

        for (i, row) in (HEADER_ROWS..HEADER_ROWS + rows.len()).enumerate() {
            let color = if striped && i % 2 == 1 {
                palette.column_color() | dim()
            } else {
                palette.column_color()
            };
            table.modify(Rows::single(row), color);
        }
    }

    table.to_string()
}

fn dim() -> Color {
    Color::new("\u{1b}[2m", "\u{1b}[22m")
}

// ── Cell helpers ─────────────────────────────────────────────────────

/// `✓` for true; for false `✗`, or an empty cell when `empty_if_false`.
pub fn check_mark(value: bool, empty_if_false: bool) -> &'static str {
    match (value, empty_if_false) {
        (true, _) => "✓",
        (false, true) => "",
        (false, false) => "✗",
    }
}

/// `ffmpeg_source` → `Ffmpeg Source`.
pub fn snake_to_title(s: &str) -> String {
    s.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Printing ─────────────────────────────────────────────────────────

/// Print rendered output to stdout. Empty output prints nothing.
pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::StyleName;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Name")]
        name: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![Row { name: "Intro" }, Row { name: "Outro" }]
    }

    #[test]
    fn table_has_title_header_and_rows_in_order() {
        let out = render_table("Scenes", &rows(), &Style::default());
        let title = out.find("Scenes").unwrap_or(usize::MAX);
        let header = out.find("Name").unwrap_or(usize::MAX);
        let intro = out.find("Intro").unwrap_or(usize::MAX);
        let outro = out.find("Outro").unwrap_or(usize::MAX);
        assert!(title < header && header < intro && intro < outro, "{out}");
        assert!(out.contains('╭'));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn no_border_drops_box_drawing() {
        let out = render_table("Scenes", &rows(), &Style::new(StyleName::Disabled, false));
        assert!(out.contains("Intro"));
        assert!(!out.contains('╭'));
        assert!(!out.contains('│'));
    }

    #[test]
    fn coloured_tables_carry_escape_codes() {
        let out = render_striped_table("Hotkeys", &rows(), &Style::new(StyleName::Green, true));
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("Outro"));
    }

    #[test]
    fn check_marks() {
        assert_eq!(check_mark(true, true), "✓");
        assert_eq!(check_mark(false, true), "");
        assert_eq!(check_mark(false, false), "✗");
    }

    #[test]
    fn kinds_render_in_title_case() {
        assert_eq!(snake_to_title("ffmpeg_source"), "Ffmpeg Source");
        assert_eq!(snake_to_title("wasapi_input_capture"), "Wasapi Input Capture");
        assert_eq!(snake_to_title("browser"), "Browser");
    }
}
