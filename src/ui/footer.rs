use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Page;
use crate::ui::theme::Palette;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    page: Page,
}

impl Footer {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    fn hints(&self) -> &'static str {
        match self.page {
            Page::Contact => {
                " Tab: Next field │ Enter: Newline/Next │ Ctrl+S: Send │ Esc: Home │ Ctrl+T: Theme │ Ctrl+Q: Quit"
            }
            Page::Projects => {
                " 1-4: Page │ ←/→: Filter │ ↑/↓: Scroll │ t: Theme │ q: Quit"
            }
            Page::Home | Page::About => " 1-4: Page │ ↑/↓: Scroll │ t: Theme │ q: Quit",
        }
    }

    pub fn widget(&self, area: Rect, palette: Palette) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes, so the arrows don't skew alignment
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(palette.muted).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style.bg(palette.background))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
