//! Boss encounter frame rendering.
//!
//! The engine hands over plain text lines. The first line is the title, the
//! last is the controls hint; everything between is body text, coloured by a
//! few leading markers the frame builder uses.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Body line markers understood by the renderer.
pub const MARK_DANGER: char = '!';
pub const MARK_GOOD: char = '+';
pub const MARK_DIALOGUE: char = '"';

/// Render a full encounter frame.
///
/// ```text
/// ┌─ <title> ───────────────────────────────┐
/// │ body lines...                           │
/// │                                         │
/// │            [controls hint]              │
/// └─────────────────────────────────────────┘
/// ```
pub fn render_encounter_frame(frame: &mut Frame, area: Rect, lines: &[String]) {
    frame.render_widget(Clear, area);

    let (title, body, controls) = split_frame(lines);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let text: Vec<Line> = body.iter().map(|l| style_line(l)).collect();
    frame.render_widget(Paragraph::new(text), chunks[0]);

    let hint = Paragraph::new(Span::styled(
        controls.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[1]);
}

/// Split frame lines into (title, body, controls).
fn split_frame(lines: &[String]) -> (&str, &[String], &str) {
    match lines {
        [] => ("Angler", &[], ""),
        [only] => (only.as_str(), &[], ""),
        [title, body @ .., controls] => (title.as_str(), body, controls.as_str()),
    }
}

fn style_line(line: &str) -> Line<'_> {
    let style = match line.chars().next() {
        Some(MARK_DANGER) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Some(MARK_GOOD) => Style::default().fg(Color::Green),
        Some(MARK_DIALOGUE) => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::ITALIC),
        _ if line.contains("SPAREABLE") => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::White),
    };
    Line::from(Span::styled(line, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_frame_three_parts() {
        let frame = lines(&["Title", "a", "b", "[1] Fight"]);
        let (title, body, controls) = split_frame(&frame);
        assert_eq!(title, "Title");
        assert_eq!(body.len(), 2);
        assert_eq!(controls, "[1] Fight");
    }

    #[test]
    fn test_split_frame_degenerate() {
        let empty: Vec<String> = Vec::new();
        let (title, body, controls) = split_frame(&empty);
        assert_eq!(title, "Angler");
        assert!(body.is_empty());
        assert!(controls.is_empty());

        let single = lines(&["Only"]);
        let (title, body, _) = split_frame(&single);
        assert_eq!(title, "Only");
        assert!(body.is_empty());
    }
}
