use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{ModuleKind, Profile};
use crate::pages::{ExplorerPage, SdgCard};

use super::common;

pub fn render(frame: &mut Frame, area: Rect, page: &ExplorerPage, profile: &Profile) {
    let chunks = common::page_layout(area);
    common::render_header(frame, chunks[0], ModuleKind::SdgExplorer.title(), profile);

    match &page.card {
        Some(card) => render_card(frame, chunks[1], card, page.index, page.total),
        None => common::render_empty(frame, chunks[1], "No goals found in this dataset."),
    }

    common::render_feedback(frame, chunks[2], page.feedback.as_ref());
    common::render_controls(
        frame,
        chunks[3],
        "p/n browse  ·  b collect badge  ·  t tutorials  ·  esc hub  ·  q quit",
    );
}

fn render_card(frame: &mut Frame, area: Rect, card: &SdgCard, index: usize, total: usize) {
    let title = format!(" {} Goal {}: {} ", card.icon, card.number, card.title);

    let content = vec![
        Line::from(card.overview.as_str().fg(Color::White)),
        Line::from(""),
        Line::from(Span::styled(
            "Challenge",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(card.challenge.as_str().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_bottom(Line::from(format!(" {} / {} ", index + 1, total)).right_aligned())
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, area);
}
