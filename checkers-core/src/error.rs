//! 错误类型定义

use thiserror::Error;

use crate::piece::{Position, Side};

/// 走法违规（规则引擎拒绝走法的原因）
///
/// 每个变体对应一项校验，按校验顺序排列。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    /// 起点或终点超出棋盘
    #[error("out of bounds: {from} -> {to}")]
    OutOfBounds { from: Position, to: Position },

    /// 起点没有棋子
    #[error("no piece at start {from}")]
    NoPieceAtStart { from: Position },

    /// 终点已有棋子
    #[error("destination occupied at {to}")]
    DestinationOccupied { to: Position },

    /// 不是该方的回合
    #[error("not this color's turn: {side} piece moved on {turn}'s turn")]
    NotYourTurn { side: Side, turn: Side },

    /// 不是斜线走法
    #[error("not diagonal: {from} -> {to}")]
    NotDiagonal { from: Position, to: Position },

    /// 普通棋子后退
    #[error("wrong direction for normal piece: {side} {from} -> {to}")]
    WrongDirection {
        side: Side,
        from: Position,
        to: Position,
    },

    /// 跳吃时中间格为空
    #[error("nothing to capture at {over}")]
    NothingToCapture { over: Position },

    /// 跳吃己方棋子
    #[error("cannot capture own piece at {over}")]
    CannotCaptureOwnPiece { over: Position },

    /// 距离既不是一步也不是跳吃
    #[error("invalid move distance: {from} -> {to}")]
    InvalidDistance { from: Position, to: Position },
}

impl RuleViolation {
    /// 简短原因（不含坐标）
    pub fn reason(&self) -> &'static str {
        match self {
            RuleViolation::OutOfBounds { .. } => "out of bounds",
            RuleViolation::NoPieceAtStart { .. } => "no piece at start",
            RuleViolation::DestinationOccupied { .. } => "destination occupied",
            RuleViolation::NotYourTurn { .. } => "not this color's turn",
            RuleViolation::NotDiagonal { .. } => "not diagonal",
            RuleViolation::WrongDirection { .. } => "wrong direction for normal piece",
            RuleViolation::NothingToCapture { .. } => "nothing to capture",
            RuleViolation::CannotCaptureOwnPiece { .. } => "cannot capture own piece",
            RuleViolation::InvalidDistance { .. } => "invalid move distance",
        }
    }
}

/// 局面记法解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// 空字符串
    #[error("Empty position string")]
    Empty,

    /// 行数不对
    #[error("Expected 8 rows, got {0}")]
    RowCount(usize),

    /// 某行列数不对
    #[error("Row {row} has {columns} columns, expected 8")]
    ColumnCount { row: usize, columns: usize },

    /// 无效的棋子字符
    #[error("Invalid piece character: {0}")]
    InvalidPiece(char),

    /// 无效的走子方
    #[error("Invalid side to move: {0}")]
    InvalidTurn(String),
}
