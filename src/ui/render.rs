use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use crate::ui::app::{App, Page};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::pages;
use crate::ui::theme::Palette;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = Palette::for_mode(app.theme());
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.owner(), app.page()).widget(palette), header);
    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        body,
    );
    match app.page() {
        Page::Home => pages::home::render(frame, body, app, palette),
        Page::About => pages::about::render(frame, body, app, palette),
        Page::Projects => pages::projects::render(frame, body, app, palette),
        Page::Contact => pages::contact::render(frame, body, app, palette),
    }
    frame.render_widget(Footer::new(app.page()).widget(footer, palette), footer);
}
