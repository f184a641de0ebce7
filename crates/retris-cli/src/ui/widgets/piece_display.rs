use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use retris_engine::{Block, PieceKind, PieceMask};

use super::BlockDisplay;

/// Size of the preview grid in cells.
const GRID: u16 = 4;

/// A piece in spawn orientation on its full 4×4 grid.
#[derive(Debug)]
pub struct PieceDisplay<'a> {
    piece: Option<PieceKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self {
            piece: None,
            block: None,
        }
    }

    pub fn piece(self, piece: PieceKind) -> Self {
        Self {
            piece: Some(piece),
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
        GRID * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        GRID * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area).centered(
            Constraint::Length(GRID * BlockDisplay::width()),
            Constraint::Length(GRID * BlockDisplay::height()),
        );

        let mask = self.piece.map_or(PieceMask::EMPTY, PieceKind::mask);
        let empty_block = BlockDisplay::from_block(Block::Empty, false);

        for y in 0..GRID {
            for x in 0..GRID {
                let cell = Rect::new(
                    area.x + x * BlockDisplay::width(),
                    area.y + y * BlockDisplay::height(),
                    BlockDisplay::width(),
                    BlockDisplay::height(),
                )
                .intersection(area);
                match self.piece {
                    Some(kind) if mask.is_set(usize::from(x), usize::from(y)) => {
                        BlockDisplay::from_block(Block::Piece(kind), false).render(cell, buf);
                    }
                    _ => Widget::render(&empty_block, cell, buf),
                }
            }
        }
    }
}
