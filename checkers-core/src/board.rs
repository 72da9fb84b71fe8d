//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, STARTING_ROWS};
use crate::piece::{Piece, Position, Side};

/// 开局布局
///
/// 参考实现先用黑子填满第 0-2 行的深色格，随后又用红子覆盖同样的格子，
/// 结果开局只剩红子。`Overlapping` 保留这种布局，`Standard` 为标准跳棋布局。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InitialLayout {
    /// 黑方第 0-2 行，红方第 5-7 行，中间两行为空
    #[default]
    Standard,
    /// 第 0-2 行全部为红子（与参考实现一致）
    Overlapping,
}

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，按 [y][x] 索引
    squares: [[Option<Piece>; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// 创建初始棋盘
    pub fn initial(layout: InitialLayout) -> Self {
        let mut board = Self::empty();

        match layout {
            InitialLayout::Standard => {
                board.fill_rows(0..STARTING_ROWS, Side::Black);
                board.fill_rows(BOARD_HEIGHT - STARTING_ROWS..BOARD_HEIGHT, Side::Red);
            }
            InitialLayout::Overlapping => {
                board.fill_rows(0..STARTING_ROWS, Side::Black);
                board.fill_rows(0..STARTING_ROWS, Side::Red);
            }
        }

        board
    }

    /// 用普通棋子填满指定行的深色格
    fn fill_rows(&mut self, rows: std::ops::Range<usize>, side: Side) {
        for y in rows {
            for x in 0..BOARD_WIDTH {
                let pos = Position::new_unchecked(x as i8, y as i8);
                if pos.is_dark() {
                    self.set(pos, Some(Piece::normal(side)));
                }
            }
        }
    }

    /// 获取指定位置的棋子，越界返回 None
    pub fn get(&self, pos: Position) -> Option<Piece> {
        let (y, x) = pos.to_index()?;
        self.squares[y][x]
    }

    /// 设置指定位置的棋子，越界时忽略
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if let Some((y, x)) = pos.to_index() {
            self.squares[y][x] = piece;
        }
    }

    /// 取出指定位置的棋子（该格变为空）
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        let (y, x) = pos.to_index()?;
        self.squares[y][x].take()
    }

    /// 获取指定阵营的所有棋子位置
    pub fn pieces(&self, side: Side) -> Vec<(Position, Piece)> {
        self.all_pieces()
            .into_iter()
            .filter(|(_, piece)| piece.side == side)
            .collect()
    }

    /// 获取所有棋子（按行优先顺序）
    pub fn all_pieces(&self) -> Vec<(Position, Piece)> {
        let mut result = Vec::new();
        for (y, row) in self.squares.iter().enumerate() {
            for (x, square) in row.iter().enumerate() {
                if let Some(piece) = square {
                    result.push((Position::new_unchecked(x as i8, y as i8), *piece));
                }
            }
        }
        result
    }

    /// 统计指定阵营的棋子数
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.side == side)
            .count()
    }

    /// 按行返回棋盘快照，供渲染使用
    pub fn rows(&self) -> &[[Option<Piece>; BOARD_WIDTH]; BOARD_HEIGHT] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial(InitialLayout::default())
    }
}

/// 完整的棋盘状态（棋盘 + 走子方）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Side,
}

impl BoardState {
    /// 创建初始状态（黑方先走）
    pub fn new(layout: InitialLayout) -> Self {
        Self::from_board(Board::initial(layout), Side::Black)
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, current_turn: Side) -> Self {
        Self {
            board,
            current_turn,
        }
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(InitialLayout::default())
    }
}
