use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Text,
    widgets::{Block as BlockWidget, Clear, Widget},
};
use retris_engine::GameSession;

use super::{BoardDisplay, PieceDisplay, SessionStatsDisplay, panel, style};

/// Status panel, board and next-piece preview side by side, with a popup over the
/// board once the game is over.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }

    fn board(&self) -> BoardDisplay<'a> {
        // After game over this is the piece that failed to spawn.
        BoardDisplay::new(self.session.board())
            .block(panel(""))
            .falling_piece(self.session.falling_piece())
    }

    fn stats(&self) -> SessionStatsDisplay<'a> {
        SessionStatsDisplay::new(self.session).block(panel("RETRO TETRIS"))
    }

    fn next_piece(&self) -> PieceDisplay<'a> {
        PieceDisplay::new()
            .piece(self.session.next_piece())
            .block(panel("NEXT"))
    }

    pub fn height(&self) -> u16 {
        [
            self.board().height(),
            self.stats().height(),
            self.next_piece().height(),
        ]
        .into_iter()
        .max()
        .unwrap_or_default()
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game_board = self.board();
        let session_stats = self.stats();
        let next_piece = self.next_piece();

        let [stats_column, board_column, next_column] = Layout::horizontal([
            Constraint::Length(session_stats.width()),
            Constraint::Length(game_board.width()),
            Constraint::Length(next_piece.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(session_stats.height())]).areas(stats_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_piece.height())]).areas(next_column);

        let game_board_width = game_board.width();
        session_stats.render(stats_area, buf);
        game_board.render(board_area, buf);
        next_piece.render(next_area, buf);

        if self.session.session_state().is_game_over() {
            let block = BlockWidget::new().style(style::GAME_OVER);
            let text = Text::styled("GAME OVER", style::GAME_OVER).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
