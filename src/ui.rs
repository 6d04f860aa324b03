//! The UI renders the session into something visible.
//!
//! Outside full-viewport mode the document body sits between a title bar, a status bar carrying
//! the location fragment, and a help bar. In full-viewport mode the body takes the whole screen.

use crate::app_state::AppState;
use crate::document::Row;
use crate::navigator::Navigator;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HELP: &str = "↑/↓ Space: Section | Home/End: Top/End | l: Listing | f: Full view | j/k: Scroll | q: Quit";

/// Renders the document and, outside full-viewport mode, its chrome.
pub fn draw(f: &mut Frame, app: &AppState, navigator: &Navigator) {
    let area = f.area();
    if app.fullscreen {
        draw_body(f, app, navigator, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Document
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        app.document.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, chunks[0]);

    draw_body(f, app, navigator, chunks[1]);

    let current = navigator.current(app);
    let mut status = vec![
        Span::styled(
            format!("#{}", app.fragment),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(format!("  {}", current.title)),
    ];
    if let Some(target) = navigator.pending_section() {
        status.push(Span::styled(
            format!("  → {}", target.title),
            Style::default().fg(Color::Rgb(255, 165, 0)), // Orange
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(status)).style(Style::default().add_modifier(Modifier::REVERSED)),
        chunks[2],
    );

    let help = match &app.message {
        Some(msg) => Paragraph::new(msg.as_str()).style(Style::default().fg(Color::Red)),
        None => Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(help, chunks[3]);
}

fn draw_body(f: &mut Frame, app: &AppState, navigator: &Navigator, area: Rect) {
    let current = navigator.current(app);
    let current_span = app.document.spans.get(current.order).cloned();

    let lines: Vec<Line> = app
        .document
        .rows
        .iter()
        .enumerate()
        .skip(app.offset)
        .take(usize::from(area.height))
        .map(|(i, row)| {
            let in_current = current_span.as_ref().is_some_and(|span| span.contains(&i));
            let gutter = if in_current { "▌ " } else { "  " };
            Line::from(vec![
                Span::styled(gutter, Style::default().fg(Color::Yellow)),
                Span::styled(row.text.clone(), row_style(row)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn row_style(row: &Row) -> Style {
    match row.heading {
        Some(1) => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        Some(2) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Some(_) => Style::default().fg(Color::Cyan),
        None => Style::default(),
    }
}
