use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};

use crate::ui::app::Page;
use crate::ui::theme::Palette;

/// Navigation bar: owner name followed by the page tabs.
pub struct Header<'a> {
    owner: &'a str,
    active: Page,
}

impl<'a> Header<'a> {
    pub fn new(owner: &'a str, active: Page) -> Self {
        Self { owner, active }
    }

    pub fn widget(&self, palette: Palette) -> Tabs<'static> {
        let titles = Page::ALL
            .iter()
            .enumerate()
            .map(|(idx, page)| Line::from(format!("{} {}", idx + 1, page.title())));

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                self.owner.to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);

        Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(palette.muted).bg(palette.background))
            .highlight_style(
                Style::default()
                    .fg(palette.text)
                    .bg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::styled("│", Style::default().fg(palette.border)))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
