use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use retris_engine::{Board, Piece};

use super::BlockDisplay;

#[allow(clippy::cast_possible_truncation)]
const COLUMNS: u16 = Board::WIDTH as u16;
#[allow(clippy::cast_possible_truncation)]
const ROWS: u16 = Board::HEIGHT as u16;

/// The locked blocks of a [`Board`] with the falling piece drawn on top.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    falling_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            falling_piece: None,
            block: None,
        }
    }

    pub fn falling_piece(self, piece: Piece) -> Self {
        Self {
            falling_piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        COLUMNS * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        ROWS * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut board = self.board.clone();
        if let Some(piece) = self.falling_piece {
            // Cells above the top row are not drawn.
            board.fill_piece(&piece);
        }

        for (row, y) in board.rows().zip(0..ROWS) {
            for (block, x) in row.iter().zip(0..COLUMNS) {
                let cell = Rect::new(
                    area.x + x * BlockDisplay::width(),
                    area.y + y * BlockDisplay::height(),
                    BlockDisplay::width(),
                    BlockDisplay::height(),
                )
                .intersection(area);
                if !cell.is_empty() {
                    BlockDisplay::from_block(*block, true).render(cell, buf);
                }
            }
        }
    }
}
