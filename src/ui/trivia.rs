use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{ModuleKind, Profile};
use crate::pages::TriviaPage;

use super::common;

pub fn render(frame: &mut Frame, area: Rect, page: &TriviaPage, profile: &Profile) {
    let chunks = common::page_layout(area);
    common::render_header(frame, chunks[0], ModuleKind::Trivia.title(), profile);

    let Some(card) = &page.card else {
        common::render_empty(frame, chunks[1], "No trivia found in this dataset.");
        common::render_controls(frame, chunks[3], "esc hub  ·  q quit");
        return;
    };

    let body = Layout::vertical([Constraint::Length(6), Constraint::Fill(1)]).split(chunks[1]);

    let question = Paragraph::new(card.question.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Trivia ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(question, body[0]);

    let answer = if page.revealed {
        Line::from(vec![
            Span::styled("Answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(card.answer.as_str(), Style::default().fg(Color::Green).bold()),
        ])
    } else {
        Line::from("Think about it, then reveal the answer.".fg(Color::DarkGray))
    };
    let answer = Paragraph::new(answer)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(answer, body[1]);

    common::render_feedback(frame, chunks[2], page.feedback.as_ref());
    let controls = if page.revealed {
        "enter claim points  ·  n next  ·  esc hub  ·  q quit"
    } else {
        "enter reveal  ·  n next  ·  esc hub  ·  q quit"
    };
    common::render_controls(frame, chunks[3], controls);
}
