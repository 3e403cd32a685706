//! Formatting for command output.

use crate::component::ComponentType;
use crate::install::InstallReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Make a path relative to `base` for display.
pub fn make_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

/// `✓ Added agent weather_agent to agents/weather_agent.py`
pub fn added_line(report: &InstallReport, cwd: &Path) -> String {
    let descriptor = &report.descriptor;
    let line = format!(
        "{} Added {} {} to {}",
        "✓".green(),
        descriptor.kind.singular(),
        descriptor.name,
        make_relative(&descriptor.destination_path, cwd)
    );
    if report.overwritten {
        format!("{} {}", line, "(replaced existing file)".dimmed())
    } else {
        line
    }
}

/// Bulleted list of template names.
pub fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{} {}", "•".blue(), item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Title shown above the list of a component kind.
pub fn list_title(kind: ComponentType) -> String {
    format!("Available {}", kind.plural_title())
}

/// Draw `body` inside a box with `title` set into the top border.
///
/// Widths are measured on the uncoloured text, so `body` lines should be
/// plain or coloured as whole units.
pub fn panel(title: &str, body: &str, border: Color) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let content_width = lines
        .iter()
        .map(|line| visible_width(line))
        .max()
        .unwrap_or(0)
        .max(title.chars().count() + 2);

    let title_part = format!(" {} ", title);
    let fill = content_width + 2 - title_part.chars().count();
    let left = fill / 2;
    let right = fill - left;

    let mut out = String::new();
    out.push_str(&format!(
        "{}{}{}{}\n",
        "╭".color(border),
        "─".repeat(left).color(border),
        title_part.bold(),
        format!("{}╮", "─".repeat(right)).color(border)
    ));
    for line in &lines {
        let pad = content_width - visible_width(line);
        out.push_str(&format!(
            "{} {}{} {}\n",
            "│".color(border),
            line,
            " ".repeat(pad),
            "│".color(border)
        ));
    }
    out.push_str(&format!(
        "{}",
        format!("╰{}╯", "─".repeat(content_width + 2)).color(border)
    ));
    out
}

/// Character count of `line` ignoring ANSI escape sequences.
fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // Skip to the end of the CSI sequence.
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}
