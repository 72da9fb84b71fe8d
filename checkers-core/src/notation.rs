//! 局面记法
//!
//! 格式：`<第0行>/<第1行>/.../<第7行> <走子方>`
//!
//! 每行从第 0 列写到第 7 列：`b`/`r` 为普通棋子，`B`/`R` 为王，
//! 数字表示连续空格数。走子方为 `b` 或 `r`，省略时为黑方。
//!
//! 示例（标准开局）：
//! `1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1 b`

use crate::board::{Board, BoardState};
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::NotationError;
use crate::piece::{Piece, Position, Side};

/// 标准开局局面
pub const STANDARD_POSITION: &str =
    "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1 b";

/// 局面记法处理
pub struct Notation;

impl Notation {
    /// 解析记法字符串为棋盘状态
    pub fn parse(text: &str) -> Result<BoardState, NotationError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let Some(board_str) = parts.first() else {
            return Err(NotationError::Empty);
        };

        let board = Self::parse_board(board_str)?;

        let current_turn = match parts.get(1) {
            None => Side::Black,
            Some(turn) => {
                let mut chars = turn.chars();
                match (chars.next().and_then(Side::from_notation_char), chars.next()) {
                    (Some(side), None) => side,
                    _ => return Err(NotationError::InvalidTurn(turn.to_string())),
                }
            }
        };

        Ok(BoardState::from_board(board, current_turn))
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, NotationError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_HEIGHT {
            return Err(NotationError::RowCount(rows.len()));
        }

        for (y, row) in rows.iter().enumerate() {
            let mut x = 0usize;

            for c in row.chars() {
                if let Some(empty_count) = c.to_digit(10) {
                    x += empty_count as usize;
                } else if let Some(piece) = Piece::from_notation_char(c) {
                    board.set(Position::new_unchecked(x as i8, y as i8), Some(piece));
                    x += 1;
                } else {
                    return Err(NotationError::InvalidPiece(c));
                }

                if x > BOARD_WIDTH {
                    return Err(NotationError::ColumnCount { row: y, columns: x });
                }
            }

            if x != BOARD_WIDTH {
                return Err(NotationError::ColumnCount { row: y, columns: x });
            }
        }

        Ok(board)
    }

    /// 将棋盘状态转换为记法字符串
    pub fn to_string(state: &BoardState) -> String {
        format!(
            "{} {}",
            Self::board_to_string(&state.board),
            state.current_turn.to_notation_char()
        )
    }

    /// 将棋盘转换为记法的棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        let rows: Vec<String> = board
            .rows()
            .iter()
            .map(|squares| {
                let mut row = String::new();
                let mut empty_count = 0;

                for square in squares {
                    match square {
                        Some(piece) => {
                            if empty_count > 0 {
                                row.push_str(&empty_count.to_string());
                                empty_count = 0;
                            }
                            row.push(piece.to_notation_char());
                        }
                        None => empty_count += 1,
                    }
                }

                if empty_count > 0 {
                    row.push_str(&empty_count.to_string());
                }
                row
            })
            .collect();

        rows.join("/")
    }
}
