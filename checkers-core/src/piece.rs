//! 棋子定义

use serde::{Deserialize, Serialize};

use crate::constants::{BLACK_PROMOTION_ROW, BOARD_HEIGHT, BOARD_WIDTH, RED_PROMOTION_ROW};

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// 普通棋子（只能向前走）
    Normal,
    /// 王（升变后，可前后走）
    Queen,
}

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 黑方（先手，向 y 增大方向走）
    Black,
    /// 红方（后手，向 y 减小方向走）
    Red,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Black => Side::Red,
            Side::Red => Side::Black,
        }
    }

    /// 普通棋子的前进方向（y 的符号）
    pub fn forward(&self) -> i8 {
        match self {
            Side::Black => 1,
            Side::Red => -1,
        }
    }

    /// 升变行
    pub fn promotion_row(&self) -> i8 {
        match self {
            Side::Black => BLACK_PROMOTION_ROW,
            Side::Red => RED_PROMOTION_ROW,
        }
    }

    /// 获取记法字符
    pub fn to_notation_char(&self) -> char {
        match self {
            Side::Black => 'b',
            Side::Red => 'r',
        }
    }

    /// 从记法字符解析
    pub fn from_notation_char(c: char) -> Option<Side> {
        match c {
            'b' | 'B' => Some(Side::Black),
            'r' | 'R' => Some(Side::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::Red => write!(f, "Red"),
        }
    }
}

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    /// 创建新棋子
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// 创建普通棋子
    pub fn normal(side: Side) -> Self {
        Self::new(PieceKind::Normal, side)
    }

    /// 创建王
    pub fn queen(side: Side) -> Self {
        Self::new(PieceKind::Queen, side)
    }

    pub fn is_queen(&self) -> bool {
        self.kind == PieceKind::Queen
    }

    /// 获取记法字符（普通棋子小写，王大写）
    pub fn to_notation_char(&self) -> char {
        let c = self.side.to_notation_char();
        match self.kind {
            PieceKind::Normal => c,
            PieceKind::Queen => c.to_ascii_uppercase(),
        }
    }

    /// 从记法字符解析
    pub fn from_notation_char(c: char) -> Option<Piece> {
        let side = Side::from_notation_char(c)?;
        let kind = if c.is_ascii_uppercase() {
            PieceKind::Queen
        } else {
            PieceKind::Normal
        };
        Some(Piece { kind, side })
    }
}

/// 棋盘位置
///
/// 使用有符号坐标，越界的位置也可以表示，由规则校验拒绝。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 列 (0-7)
    pub x: i8,
    /// 行 (0-7)
    pub y: i8,
}

impl Position {
    /// 创建新位置
    pub fn new(x: i8, y: i8) -> Option<Self> {
        let pos = Self { x, y };
        pos.is_valid().then_some(pos)
    }

    /// 创建新位置（不检查边界）
    pub const fn new_unchecked(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        self.x >= 0
            && (self.x as usize) < BOARD_WIDTH
            && self.y >= 0
            && (self.y as usize) < BOARD_HEIGHT
    }

    /// 是否为深色格（棋子只能放在深色格上）
    pub fn is_dark(&self) -> bool {
        (self.x + self.y).rem_euclid(2) == 1
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Position> {
        let x = self.x.checked_add(dx)?;
        let y = self.y.checked_add(dy)?;
        Position::new(x, y)
    }

    /// 两个位置的中点（跳吃时被跨越的格子）
    pub fn midpoint(&self, other: Position) -> Position {
        Position {
            x: ((self.x as i16 + other.x as i16) / 2) as i8,
            y: ((self.y as i16 + other.y as i16) / 2) as i8,
        }
    }

    /// 转换为数组索引 (行, 列)，越界返回 None
    pub fn to_index(&self) -> Option<(usize, usize)> {
        self.is_valid().then(|| (self.y as usize, self.x as usize))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
