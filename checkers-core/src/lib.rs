//! 跳棋规则引擎
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 走法校验与执行（吃子、升变、轮换走子方）
//! - 合法走法列举
//! - 局面记法

mod board;
mod constants;
mod error;
mod moves;
mod notation;
mod piece;
mod rules;

pub use board::{Board, BoardState, InitialLayout};
pub use constants::*;
pub use error::{NotationError, RuleViolation};
pub use moves::{Capture, Move, MoveKind, MoveOutcome};
pub use notation::{Notation, STANDARD_POSITION};
pub use piece::{Piece, PieceKind, Position, Side};
pub use rules::Rules;
