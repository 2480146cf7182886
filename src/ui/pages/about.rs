use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::content::{CERTIFICATIONS, EDUCATION, PROFILE, SKILL_GROUPS, SOFT_SKILLS, VOLUNTEERING};
use crate::ui::app::App;
use crate::ui::theme::Palette;

use super::{bullet, section_heading};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, palette: Palette) {
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);

    let mut lines = section_heading("About Me", palette);
    lines.push(Line::from(Span::styled(PROFILE, text)));
    lines.push(Line::from(""));

    lines.extend(section_heading("Education", palette));
    for entry in EDUCATION {
        lines.push(Line::from(Span::styled(
            entry.degree,
            text.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(entry.institution, muted),
            Span::styled(format!("  ({})", entry.period), muted),
        ]));
        lines.push(Line::from(Span::styled(entry.details, muted)));
        lines.push(Line::from(""));
    }

    lines.extend(section_heading("Technical Skills", palette));
    for group in SKILL_GROUPS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", group.label), muted),
            Span::styled(group.skills.join(", "), text),
        ]));
    }
    lines.push(Line::from(""));

    lines.extend(section_heading("Soft Skills", palette));
    lines.push(Line::from(Span::styled(SOFT_SKILLS.join(" · "), text)));
    lines.push(Line::from(""));

    lines.extend(section_heading("Certifications", palette));
    lines.extend(CERTIFICATIONS.iter().map(|c| bullet(c, palette)));
    lines.push(Line::from(""));

    lines.extend(section_heading("Volunteering", palette));
    lines.extend(VOLUNTEERING.iter().map(|v| bullet(v, palette)));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(widget, area);
}
