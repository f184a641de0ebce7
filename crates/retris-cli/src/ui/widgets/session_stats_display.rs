use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use retris_engine::GameSession;

use super::style;

/// Score panel: progression, line-clear statistics, play time and the key list.
pub struct SessionStatsDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SessionStatsDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        ROW_COUNT + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    Heading(&'static str),
    LabelValue(&'static str, fn(&GameSession) -> String),
    KeyHelp(&'static str, &'static str),
}

const ROWS: [Row; 18] = [
    Row::LabelValue("Score:", |session| session.stats().score().to_string()),
    Row::LabelValue("Level:", |session| session.stats().level().to_string()),
    Row::LabelValue("Lines:", |session| {
        session.stats().total_cleared_lines().to_string()
    }),
    Row::Empty,
    Row::LabelValue("Pieces:", |session| {
        session.stats().completed_pieces().to_string()
    }),
    Row::LabelValue("Singles:", |session| {
        session.stats().line_cleared_counter()[1].to_string()
    }),
    Row::LabelValue("Doubles:", |session| {
        session.stats().line_cleared_counter()[2].to_string()
    }),
    Row::LabelValue("Triples:", |session| {
        session.stats().line_cleared_counter()[3].to_string()
    }),
    Row::LabelValue("Tetris:", |session| {
        session.stats().line_cleared_counter()[4].to_string()
    }),
    Row::LabelValue("Time:", |session| {
        let dur = session.duration();
        format!(
            "{}:{:0>2}.{:0>2}",
            dur.as_secs() / 60,
            dur.as_secs() % 60,
            dur.subsec_millis() / 10
        )
    }),
    Row::Empty,
    Row::Heading("Controls:"),
    Row::KeyHelp("W", "Rotate"),
    Row::KeyHelp("A/D", "Move"),
    Row::KeyHelp("S", "Drop"),
    Row::KeyHelp("R", "Restart"),
    Row::KeyHelp("Q", "Quit"),
    Row::Empty,
];

#[expect(clippy::cast_possible_truncation)]
const ROW_COUNT: u16 = ROWS.len() as u16;

impl Widget for SessionStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let rows_areas = Layout::vertical(ROWS.map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS, rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::Heading(label) => {
                    Line::styled(label, style::HEADING)
                        .left_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.session), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
                Row::KeyHelp(key, action) => {
                    Line::styled(format!("{key} - {action}"), style)
                        .left_aligned()
                        .render(area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use retris_engine::{PieceKind, ScriptedPieces};

    use super::*;
    use crate::ui::widgets::{panel, test_util};

    #[test]
    fn test_panel_shows_progression() {
        let mut session = GameSession::new(50, Box::new(ScriptedPieces::new(vec![PieceKind::O])));
        for _ in 0..75 {
            session.increment_frame();
        }
        let display = SessionStatsDisplay::new(&session).block(panel("RETRO TETRIS"));
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);
        let lines = test_util::lines(&buf);

        assert!(lines[0].contains("RETRO TETRIS"));
        assert!(lines[1].starts_with("│Score:"), "{lines:#?}");
        assert!(lines[1].ends_with("0│"));
        assert!(lines[2].starts_with("│Level:"));
        assert!(lines[2].ends_with("1│"));
        assert!(lines[10].contains("0:01.50"), "{lines:#?}");
        assert!(lines[12].contains("Controls:"));
        assert!(lines[13].contains("W - Rotate"));
    }
}
