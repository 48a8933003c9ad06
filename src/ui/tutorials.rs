use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{ModuleKind, Profile};
use crate::pages::TutorialPage;

use super::common;

pub fn render(frame: &mut Frame, area: Rect, page: &TutorialPage, profile: &Profile) {
    let chunks = common::page_layout(area);
    common::render_header(frame, chunks[0], ModuleKind::Tutorials.title(), profile);

    if page.lessons.is_empty() {
        let message = format!("No lessons found for {} yet.", page.subject);
        common::render_empty(frame, chunks[1], &message);
    } else {
        let body = Layout::horizontal([Constraint::Percentage(45), Constraint::Fill(1)])
            .spacing(1)
            .split(chunks[1]);
        render_lessons(frame, body[0], page);
        render_player(frame, body[1], page);
    }

    common::render_controls(frame, chunks[3], "j/k select  ·  esc hub  ·  q quit");
}

fn render_lessons(frame: &mut Frame, area: Rect, page: &TutorialPage) {
    let lines: Vec<Line> = page
        .lessons
        .iter()
        .enumerate()
        .map(|(index, lesson)| {
            let is_selected = index == page.selected;
            let style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            let marker = if is_selected { ">" } else { " " };
            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(lesson.title.as_str(), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" {} lessons ", page.subject))
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}

fn render_player(frame: &mut Frame, area: Rect, page: &TutorialPage) {
    let content = match page.current() {
        Some(lesson) => match lesson.video_url() {
            Some(url) => vec![
                Line::from(lesson.title.as_str().fg(Color::White).bold()),
                Line::from(""),
                Line::from(url.fg(Color::Blue).underlined()),
            ],
            None => vec![
                Line::from(lesson.title.as_str().fg(Color::White).bold()),
                Line::from(""),
                Line::from("Video not available".fg(Color::Yellow)),
            ],
        },
        None => Vec::new(),
    };

    let widget = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Video ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, area);
}
