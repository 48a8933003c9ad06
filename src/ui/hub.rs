use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::models::{ModuleKind, Profile};
use crate::pages::HubPage;

use super::common;

pub fn render(frame: &mut Frame, area: Rect, page: &HubPage, profile: &Profile) {
    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_profile(frame, chunks[0], profile);
    render_modules(frame, chunks[1], page.selected());
    common::render_controls(
        frame,
        chunks[2],
        "j/k navigate  ·  enter open  ·  l language  ·  i interest  ·  q quit",
    );
}

fn render_profile(frame: &mut Frame, area: Rect, profile: &Profile) {
    let content = vec![
        Line::from(Span::styled(
            "STEAMSPARK",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!("Welcome, {}!", profile.name).fg(Color::White)),
        Line::from(vec![
            Span::styled("Language ", Style::default().fg(Color::DarkGray)),
            Span::styled(profile.language.name(), Style::default().fg(Color::Gray)),
            Span::styled("   Interest ", Style::default().fg(Color::DarkGray)),
            Span::styled(profile.interest.as_str(), Style::default().fg(Color::Gray)),
            Span::styled("   Score ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                profile.score().to_string(),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_modules(frame: &mut Frame, area: Rect, selected: ModuleKind) {
    let mut lines: Vec<Line> = Vec::with_capacity(ModuleKind::ALL.len() * 2);

    for module in ModuleKind::ALL {
        let is_selected = module == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{:<22}", module.title()), style),
            Span::styled(module.tagline(), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(widget, area);
}
