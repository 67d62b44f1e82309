use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{CourseSummary, LetterGrade};

/// Colour used for a letter grade wherever an average is shown.
pub(crate) fn letter_style(letter: LetterGrade) -> Style {
    let color = match letter {
        LetterGrade::A => Color::Green,
        LetterGrade::B => Color::Cyan,
        LetterGrade::C => Color::Yellow,
        LetterGrade::D => Color::Magenta,
        LetterGrade::F => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// `Math  81.67 (B)` with the letter coloured, or a dimmed "no grades".
pub(crate) fn course_summary_line(summary: &CourseSummary) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{}  ", summary.name))];
    if summary.has_grades() {
        spans.push(Span::raw(format!("{:.2} ", summary.average)));
        spans.push(Span::styled(
            format!("({})", summary.letter),
            letter_style(summary.letter),
        ));
    } else {
        spans.push(Span::styled(
            summary.display_average(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;
    use crate::error::RosterError;

    #[test]
    fn surface_error_prefers_root_cause() {
        let err = Err::<(), _>(RosterError::NotFound("Student".into()))
            .context("failed to rename")
            .unwrap_err();
        assert_eq!(surface_error(&err), "Student not found.");
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 50, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }

    #[test]
    fn empty_course_line_mentions_no_grades() {
        let summary = CourseSummary {
            name: "Art".into(),
            grade_count: 0,
            average: 0.0,
            letter: LetterGrade::F,
        };
        let text: String = course_summary_line(&summary)
            .spans
            .iter()
            .map(|span| span.content.to_string())
            .collect();
        assert_eq!(text, "Art  no grades");
    }
}
