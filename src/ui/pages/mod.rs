//! One renderer per navigation page. Each takes the palette explicitly.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::Palette;

/// Bold accent heading followed by a blank line.
fn section_heading(title: &str, palette: Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

/// `• item` with a muted bullet.
fn bullet(text: &str, palette: Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(palette.muted)),
        Span::styled(text.to_string(), Style::default().fg(palette.text)),
    ])
}
