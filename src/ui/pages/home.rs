use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::{CONTACT, HEADLINE, PROFILE};
use crate::ui::app::App;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::Palette;

const HERO_WIDTH: u16 = 72;
const HERO_HEIGHT: u16 = 16;

/// Hero section. The typewriter line shows whatever frame the animator
/// last pushed, followed by a caret.
pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, palette: Palette) {
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);
    let accent = Style::default().fg(palette.accent);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {HEADLINE} "),
            accent.bg(palette.surface),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Hi, I'm ", text.add_modifier(Modifier::BOLD)),
            Span::styled(app.owner().to_string(), accent.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(app.typewriter_text().to_string(), text),
            Span::styled("▌", accent.add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(""),
        Line::from(Span::styled(PROFILE, muted)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email  ", muted),
            Span::styled(CONTACT.email, accent),
        ]),
        Line::from(vec![
            Span::styled("GitHub ", muted),
            Span::styled(CONTACT.github, accent),
        ]),
    ];

    let hero = centered_rect_by_size(area, HERO_WIDTH, HERO_HEIGHT);
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(widget, hero);
}
