use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{ModuleKind, Profile};
use crate::pages::ChoicePage;

use super::common;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, page: &ChoicePage, profile: &Profile) {
    let chunks = common::page_layout(area);
    common::render_header(frame, chunks[0], page.module.title(), profile);

    match &page.item {
        Some(item) => {
            let body = Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Fill(1),
            ])
            .split(chunks[1]);

            render_context(frame, body[0], page);
            render_prompt(frame, body[1], page.module, &item.prompt);
            render_options(frame, body[2], &item.options, page.selected);
        }
        None => common::render_empty(frame, chunks[1], "No questions found in this dataset."),
    }

    common::render_feedback(frame, chunks[2], page.feedback.as_ref());
    common::render_controls(
        frame,
        chunks[3],
        "j/k choose  ·  enter submit  ·  n next  ·  esc hub  ·  q quit",
    );
}

fn render_context(frame: &mut Frame, area: Rect, page: &ChoicePage) {
    let mut lines = Vec::new();
    if let Some(subject) = &page.subject {
        lines.push(Line::from(format!("Subject: {}", subject).fg(Color::DarkGray)));
    }
    if let Some(notice) = &page.notice {
        lines.push(Line::from(
            notice.text().fg(common::feedback_color(notice)),
        ));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_prompt(frame: &mut Frame, area: Rect, module: ModuleKind, prompt: &str) {
    let title = match module {
        ModuleKind::IdiomQuest => " What does this idiom mean? ",
        _ => " Question ",
    };
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(title)
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('-');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(widget, area);
}
