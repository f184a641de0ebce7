use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Text},
    widgets::{Block as BlockWidget, Widget},
};

use super::style;

const TITLE: &str = "RETRO TERMINAL TETRIS GAME";
const BANNER_WIDTH: u16 = 34;

/// The banner at the top of the screen.
#[derive(Debug, Default)]
pub struct TitleDisplay;

impl TitleDisplay {
    pub fn new() -> Self {
        Self
    }

    pub fn height(&self) -> u16 {
        4
    }
}

impl Widget for TitleDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = BlockWidget::bordered().style(style::TITLE);
        let area = area.centered_horizontally(Constraint::Length(BANNER_WIDTH));
        let inner = block.inner(area);
        block.render(area, buf);
        Text::from(vec![
            Line::from(TITLE),
            Line::from(format!("Version {}", env!("CARGO_PKG_VERSION"))),
        ])
        .style(style::TITLE)
        .centered()
        .render(inner, buf);
    }
}
