use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{ModuleKind, Profile};
use crate::pages::JourneyPage;

use super::common;

pub fn render(frame: &mut Frame, area: Rect, page: &JourneyPage, profile: &Profile) {
    let chunks = common::page_layout(area);
    common::render_header(frame, chunks[0], ModuleKind::Mindfulness.title(), profile);

    if page.days == 0 {
        common::render_empty(frame, chunks[1], "No journey days found in this dataset.");
    } else {
        let content = vec![
            Line::from(Span::styled(
                "Activity",
                Style::default().fg(Color::Yellow).bold(),
            )),
            Line::from(page.activity.as_str().fg(Color::White)),
            Line::from(""),
            Line::from(Span::styled(
                "Reflection",
                Style::default().fg(Color::Yellow).bold(),
            )),
            Line::from(page.reflection.as_str().fg(Color::Gray).italic()),
        ];

        let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(format!(" Day {} of {} ", page.day + 1, page.days))
                .title_style(Style::default().fg(Color::Cyan).bold())
                .padding(Padding::uniform(1)),
        );
        frame.render_widget(widget, chunks[1]);
    }

    common::render_feedback(frame, chunks[2], page.feedback.as_ref());
    common::render_controls(
        frame,
        chunks[3],
        "p/n change day  ·  enter complete  ·  esc hub  ·  q quit",
    );
}
