use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::content::{Project, ProjectFilter};
use crate::ui::app::App;
use crate::ui::theme::Palette;

use super::bullet;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, palette: Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let options = ProjectFilter::options();
    let selected = options
        .iter()
        .position(|f| *f == app.project_filter())
        .unwrap_or(0);
    let filters = Tabs::new(options.iter().map(|f| Line::from(f.label())))
        .select(selected)
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(filters, chunks[0]);

    let projects = app.visible_projects();
    let mut lines = Vec::new();
    if projects.is_empty() {
        lines.push(Line::from(Span::styled(
            "No projects in this category yet.",
            Style::default().fg(palette.muted),
        )));
    }
    for (idx, project) in projects.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(Span::styled(
                "─".repeat(chunks[1].width.saturating_sub(2) as usize),
                Style::default().fg(palette.border),
            )));
        }
        lines.extend(project_card(project, palette));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(
            Block::default()
                .title(format!(" {} ({}) ", app.project_filter().label(), projects.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(widget, chunks[1]);
}

fn project_card(project: &Project, palette: Palette) -> Vec<Line<'static>> {
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);
    let accent = Style::default().fg(palette.accent);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(project.title, text.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {} · {}", project.kind, project.period), muted),
        ]),
        Line::from(Span::styled(project.description, text)),
        Line::from(Span::styled(project.technologies.join(" · "), accent)),
    ];
    lines.extend(project.key_points.iter().map(|p| bullet(p, palette)));

    let links: Vec<Span<'static>> = [("GitHub", project.github), ("Demo", project.demo)]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| (label, url)))
        .flat_map(|(label, url)| {
            [
                Span::styled(format!("{label}: "), muted),
                Span::styled(format!("{url}  "), accent),
            ]
        })
        .collect();
    if !links.is_empty() {
        lines.push(Line::from(links));
    }
    lines.push(Line::from(""));
    lines
}
