use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let cell = format_cell(&truncated, *width, numeric);
                if options.color {
                    colorize_status(&cell, &truncated)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Terminal columns taken by `value`.
fn display_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let w = char_width(ch);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
        && trimmed.chars().any(|ch| ch.is_ascii_digit())
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = " ".repeat(width.saturating_sub(display_width(value)));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

/// Color a padded cell by the meaning of its bare value.
fn colorize_status(cell: &str, value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "completed" | "true" | "authenticated" | "deleted" => Some("32"),
        "pending" | "cancelled" | "declined" => Some("33"),
        "false" | "error" | "unauthorized" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{cell}\u{1b}[0m"),
        None => cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(display_width("学生"), 4);
        assert_eq!(display_width("Alice"), 5);
        assert_eq!(display_width("Lin 林"), 6);
    }

    #[test]
    fn cjk_cells_align_with_ascii() {
        let rows = vec![
            vec!["1".to_string(), "李明".to_string()],
            vec!["2".to_string(), "Alice".to_string()],
        ];
        let table = render_entity_table(
            &["id", "name"],
            &rows,
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let widths: Vec<usize> = table.lines().map(display_width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn truncation_respects_width() {
        let text = truncate_text("钢琴教师管理系统", 7);
        assert!(display_width(&text) <= 7);
        assert!(text.ends_with('…'));
    }

    #[test]
    fn max_width_shrinks_widest_column() {
        let rows = vec![vec!["1".to_string(), "x".repeat(60)]];
        let table = render_entity_table(
            &["id", "notes"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| display_width(line) <= 40));
    }

    #[test]
    fn emoji_is_wide_and_combining_marks_are_zero_width() {
        assert_eq!(display_width("🎹"), 2);
        assert_eq!(display_width("e\u{301}"), 1);
        assert_eq!(display_width("Cafe\u{301} 🎹"), 7);
    }

    #[test]
    fn emoji_and_accented_cells_align() {
        let rows = vec![
            vec!["1".to_string(), "🎹🎹🎹🎹🎹🎹🎹".to_string(), "x".to_string()],
            vec!["2".to_string(), "Ame\u{301}lie".to_string(), "y".to_string()],
            vec!["3".to_string(), "Bob".to_string(), "z".to_string()],
        ];
        let table = render_entity_table(
            &["id", "name", "notes"],
            &rows,
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let widths: Vec<usize> = table.lines().map(display_width).collect();
        assert_eq!(widths, vec![widths[0]; widths.len()]);
    }

    #[test]
    fn truncation_keeps_combining_marks_free() {
        let text = truncate_text("e\u{301}e\u{301}e\u{301}e\u{301}", 3);
        assert_eq!(display_width(&text), 3);
        assert!(text.ends_with('…'));
    }

    #[test]
    fn dash_alone_is_not_numeric() {
        assert!(!looks_numeric("-"));
        assert!(looks_numeric("-12.5"));
    }
}
