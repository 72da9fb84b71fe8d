//! 文本棋盘渲染

use std::fmt::Write;

use checkers_core::{Board, Piece, PieceKind, Position, Side, BOARD_WIDTH};

/// 分隔线
const SEPARATOR: &str = "  +---+---+---+---+---+---+---+---+";

/// 棋盘渲染器
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    /// 是否显示列号
    pub column_header: bool,
}

impl Renderer {
    pub fn new(column_header: bool) -> Self {
        Self { column_header }
    }

    /// 棋子字符
    pub fn piece_glyph(piece: Piece) -> char {
        match (piece.side, piece.kind) {
            (Side::Black, PieceKind::Normal) => 'b',
            (Side::Black, PieceKind::Queen) => 'B',
            (Side::Red, PieceKind::Normal) => 'r',
            (Side::Red, PieceKind::Queen) => 'R',
        }
    }

    /// 单个格子的显示（三个字符宽）
    pub fn cell(pos: Position, square: Option<Piece>) -> String {
        match square {
            Some(piece) => format!(" {} ", Self::piece_glyph(piece)),
            None if pos.is_dark() => "   ".to_string(),
            None => " . ".to_string(),
        }
    }

    /// 渲染为字符串
    pub fn render(&self, board: &Board) -> String {
        let mut out = String::new();

        if self.column_header {
            out.push_str("  ");
            for x in 0..BOARD_WIDTH {
                out.push_str(&format!("  {} ", x));
            }
            out.push('\n');
            out.push_str(SEPARATOR);
            out.push('\n');
        }

        for (y, row) in board.rows().iter().enumerate() {
            out.push_str(&format!("{} |", y));
            for (x, square) in row.iter().enumerate() {
                let pos = Position::new_unchecked(x as i8, y as i8);
                out.push_str(&Self::cell(pos, *square));
                out.push('|');
            }
            out.push('\n');
            out.push_str(SEPARATOR);
            out.push('\n');
        }

        out
    }

    /// 渲染到任意 `fmt::Write`
    pub fn write_to(&self, board: &Board, out: &mut impl Write) -> std::fmt::Result {
        out.write_str(&self.render(board))
    }
}
