//! Pure view functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects. Exactly the slide at the
//! current index is drawn; the footer reflects navigation-hint enabled state
//! and the `#index/count` position.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use slidephant_core::deck::Slide;
use unicode_width::UnicodeWidthStr;

use crate::markdown;
use crate::state::AppState;

/// Height of the footer line.
const FOOTER_HEIGHT: u16 = 1;

/// Horizontal margin around slide content (each side).
const CONTENT_MARGIN: u16 = 2;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(FOOTER_HEIGHT)])
        .split(area);

    render_slide(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);
}

fn render_slide(app: &AppState, frame: &mut Frame, area: Rect) {
    let content_area = Rect {
        x: area.x + CONTENT_MARGIN,
        y: area.y + 1,
        width: area.width.saturating_sub(CONTENT_MARGIN * 2),
        height: area.height.saturating_sub(1),
    };

    let Some(slide) = app.navigator.current_slide() else {
        // Empty deck degrades to a placeholder, not an error.
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Empty deck",
            Style::default()
                .fg(app.theme.footer)
                .add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, content_area);
        return;
    };

    let lines = markdown::render_markdown(slide.source(), &app.theme);
    let slide_widget = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(slide_widget, content_area);
}

fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    if let Some(prompt) = &app.goto {
        let line = Line::from(vec![
            Span::styled("go to: ", Style::default().fg(app.theme.accent)),
            Span::raw(prompt.buffer.clone()),
            Span::styled("█", Style::default().fg(app.theme.accent)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let footer = Style::default().fg(app.theme.footer);
    let disabled = footer.add_modifier(Modifier::DIM);
    let hint = |label: &str, enabled: bool| {
        Span::styled(label.to_string(), if enabled { footer } else { disabled })
    };

    let mut spans = vec![
        hint("‹ prev", !app.navigator.at_first()),
        Span::raw("  "),
        hint("next ›", !app.navigator.at_last()),
        Span::raw("   "),
        Span::styled("g", footer),
        Span::raw(" go to  "),
        Span::styled("q", footer),
        Span::raw(" quit"),
    ];

    // Right-align the slide title and position by padding the middle of the
    // single line.
    let mut right = Vec::new();
    if let Some(title) = app.navigator.current_slide().and_then(Slide::title) {
        right.push(Span::styled(format!("{title}  "), disabled));
    }
    right.push(Span::styled(app.navigator.fragment().to_string(), footer));

    let used: usize = spans
        .iter()
        .chain(right.iter())
        .map(|span| span.content.width())
        .sum();
    spans.push(Span::raw(" ".repeat((area.width as usize).saturating_sub(used))));
    spans.extend(right);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
