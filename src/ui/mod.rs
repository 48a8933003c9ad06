mod common;
mod explorer;
mod hub;
mod journey;
mod quiz;
mod trivia;
mod tutorials;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let profile = &app.ctx.profile;
    match &app.screen {
        Screen::Hub(page) => hub::render(frame, area, page, profile),
        Screen::Quiz(page) => quiz::render(frame, area, page, profile),
        Screen::Trivia(page) => trivia::render(frame, area, page, profile),
        Screen::Explorer(page) => explorer::render(frame, area, page, profile),
        Screen::Tutorials(page) => tutorials::render(frame, area, page, profile),
        Screen::Journey(page) => journey::render(frame, area, page, profile),
        Screen::Unavailable { module, message } => {
            common::render_unavailable(frame, area, *module, message)
        }
    }
}
