//! 走法与走子结果

use serde::{Deserialize, Serialize};

use crate::constants::JUMP_DISTANCE;
use crate::piece::{Piece, Position, Side};

/// 走法
///
/// 由调用方根据输入构造，校验并执行一次后丢弃。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// 从四个坐标创建走法（不检查边界）
    pub fn from_coords(from_x: i8, from_y: i8, to_x: i8, to_y: i8) -> Self {
        Self::new(
            Position::new_unchecked(from_x, from_y),
            Position::new_unchecked(to_x, to_y),
        )
    }

    /// 列方向位移
    pub fn dx(&self) -> i16 {
        self.to.x as i16 - self.from.x as i16
    }

    /// 行方向位移
    pub fn dy(&self) -> i16 {
        self.to.y as i16 - self.from.y as i16
    }

    /// 被跨越的格子（仅当走法为两格斜跳时存在）
    pub fn captured_square(&self) -> Option<Position> {
        let jump = JUMP_DISTANCE as i16;
        (self.dx().abs() == jump && self.dy().abs() == jump).then(|| self.from.midpoint(self.to))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 校验通过的走法类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// 斜走一步
    Step,
    /// 斜跳吃子
    Capture { captured: Position },
}

/// 吃子记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// 被吃棋子所在位置
    pub position: Position,
    /// 被吃的棋子
    pub piece: Piece,
}

/// 走子结果，供展示层直接使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// 执行的走法
    pub mv: Move,
    /// 走子后的棋子（升变后为王）
    pub piece: Piece,
    /// 吃子（如果有）
    pub capture: Option<Capture>,
    /// 升变位置（如果有）
    pub promotion: Option<Position>,
    /// 下一个走子方
    pub next_turn: Side,
}

impl MoveOutcome {
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}
