use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::contact::{
    ContactSnapshot, FormField, SubmitStatus, ERROR_BANNER_FALLBACK, SUCCESS_MESSAGE,
};
use crate::content::CONTACT;
use crate::ui::app::App;
use crate::ui::theme::Palette;

use super::section_heading;

const MESSAGE_HEIGHT: u16 = 6;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, palette: Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_info(frame, columns[0], palette);

    let snapshot = app.contact_snapshot();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    for (idx, field) in FormField::ALL.into_iter().enumerate() {
        render_field(frame, rows[idx], &snapshot, field, palette);
    }
    render_status(frame, rows[4], &snapshot, app.notice(), palette);
}

fn render_info(frame: &mut Frame<'_>, area: Rect, palette: Palette) {
    let muted = Style::default().fg(palette.muted);
    let accent = Style::default().fg(palette.accent);

    let mut lines = section_heading("Get In Touch", palette);
    lines.push(Line::from(Span::styled(
        "Have a project in mind or want to collaborate? Send a message.",
        Style::default().fg(palette.text),
    )));
    lines.push(Line::from(""));
    for (label, value) in [
        ("Email", CONTACT.email),
        ("GitHub", CONTACT.github),
        ("LinkedIn", CONTACT.linkedin),
    ] {
        lines.push(Line::from(Span::styled(label, muted)));
        lines.push(Line::from(Span::styled(value, accent)));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(widget, area);
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &ContactSnapshot,
    field: FormField,
    palette: Palette,
) {
    let focused = snapshot.focused == field;
    let border = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.border)
    };

    let value = snapshot.form_data.get(field);
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(palette.text))))
        .collect();
    if focused && !snapshot.is_submitting {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▌", Style::default().fg(palette.accent)));
        }
    }

    // Keep the caret line visible once the message outgrows the box
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height.max(1)) as u16;

    let widget = Paragraph::new(lines).scroll((scroll, 0)).block(
        Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(widget, area);
}

fn render_status(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &ContactSnapshot,
    notice: Option<&str>,
    palette: Palette,
) {
    let line = match (&snapshot.submit_status, notice) {
        (_, Some(notice)) => Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(palette.error),
        )),
        (SubmitStatus::Submitting, _) => Line::from(Span::styled(
            "Sending...",
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )),
        (SubmitStatus::Success, _) => Line::from(Span::styled(
            SUCCESS_MESSAGE,
            Style::default().fg(palette.success),
        )),
        (SubmitStatus::Error { .. }, _) => {
            let message = if snapshot.error_message.is_empty() {
                ERROR_BANNER_FALLBACK.to_string()
            } else {
                snapshot.error_message.clone()
            };
            Line::from(Span::styled(message, Style::default().fg(palette.error)))
        }
        (SubmitStatus::Idle, _) => Line::from(Span::styled(
            "Ctrl+S to send",
            Style::default().fg(palette.muted),
        )),
    };

    let title = if snapshot.is_submitting {
        " Sending... "
    } else {
        " Send Message "
    };
    let widget = Paragraph::new(line).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(widget, area);
}
