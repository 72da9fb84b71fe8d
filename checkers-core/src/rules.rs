//! 走法校验与执行
//!
//! 只支持单步走法（含单次跳吃），普通棋子与王走法几何相同，
//! 区别仅在于王不受方向限制。

use tracing::{debug, info};

use crate::board::BoardState;
use crate::constants::JUMP_DISTANCE;
use crate::error::RuleViolation;
use crate::moves::{Capture, Move, MoveKind, MoveOutcome};
use crate::piece::{Piece, PieceKind, Position};

/// 四个斜线方向
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// 规则引擎
pub struct Rules;

impl Rules {
    /// 校验走法（不修改棋盘）
    ///
    /// 按顺序检查，遇到第一个违规即返回。
    pub fn validate(state: &BoardState, mv: &Move) -> Result<MoveKind, RuleViolation> {
        let (from, to) = (mv.from, mv.to);

        if !from.is_valid() || !to.is_valid() {
            return Err(RuleViolation::OutOfBounds { from, to });
        }

        let piece = state
            .board
            .get(from)
            .ok_or(RuleViolation::NoPieceAtStart { from })?;

        if state.board.get(to).is_some() {
            return Err(RuleViolation::DestinationOccupied { to });
        }

        if piece.side != state.current_turn {
            return Err(RuleViolation::NotYourTurn {
                side: piece.side,
                turn: state.current_turn,
            });
        }

        let (dx, dy) = (mv.dx(), mv.dy());
        if dx.abs() != dy.abs() {
            return Err(RuleViolation::NotDiagonal { from, to });
        }

        if piece.kind == PieceKind::Normal && dy.signum() != piece.side.forward() as i16 {
            return Err(RuleViolation::WrongDirection {
                side: piece.side,
                from,
                to,
            });
        }

        match dy.abs() {
            1 => Ok(MoveKind::Step),
            d if d == JUMP_DISTANCE as i16 => {
                let over = from.midpoint(to);
                match state.board.get(over) {
                    None => Err(RuleViolation::NothingToCapture { over }),
                    Some(target) if target.side == piece.side => {
                        Err(RuleViolation::CannotCaptureOwnPiece { over })
                    }
                    Some(_) => Ok(MoveKind::Capture { captured: over }),
                }
            }
            _ => Err(RuleViolation::InvalidDistance { from, to }),
        }
    }

    /// 执行走法
    ///
    /// 先校验，校验失败时棋盘保持不变。
    pub fn apply(state: &mut BoardState, mv: &Move) -> Result<MoveOutcome, RuleViolation> {
        let kind = Self::validate(state, mv).map_err(|violation| {
            debug!("拒绝走法 {}: {}", mv, violation);
            violation
        })?;

        let mut piece = match state.board.take(mv.from) {
            Some(piece) => piece,
            // 校验已保证起点有子
            None => return Err(RuleViolation::NoPieceAtStart { from: mv.from }),
        };

        let capture = match kind {
            MoveKind::Step => None,
            MoveKind::Capture { captured } => state.board.take(captured).map(|taken| {
                info!("{} 吃掉 {} 位于 {}", piece.side, taken.side, captured);
                Capture {
                    position: captured,
                    piece: taken,
                }
            }),
        };

        let promotion = Self::promote(&mut piece, mv.to);
        state.board.set(mv.to, Some(piece));
        state.switch_turn();

        debug!("走法 {} 完成，轮到 {}", mv, state.current_turn);

        Ok(MoveOutcome {
            mv: *mv,
            piece,
            capture,
            promotion,
            next_turn: state.current_turn,
        })
    }

    /// 普通棋子到达底线时升变为王
    fn promote(piece: &mut Piece, at: Position) -> Option<Position> {
        if piece.kind == PieceKind::Normal && at.y == piece.side.promotion_row() {
            piece.kind = PieceKind::Queen;
            info!("{} 棋子在 {} 升变为王", piece.side, at);
            Some(at)
        } else {
            None
        }
    }

    /// 生成当前走子方的所有合法走法
    pub fn legal_moves(state: &BoardState) -> Vec<Move> {
        let mut moves = Vec::new();

        for (from, _) in state.board.pieces(state.current_turn) {
            for (dx, dy) in DIAGONALS {
                for distance in 1..=JUMP_DISTANCE {
                    if let Some(to) = from.offset(dx * distance, dy * distance) {
                        let mv = Move::new(from, to);
                        if Self::validate(state, &mv).is_ok() {
                            moves.push(mv);
                        }
                    }
                }
            }
        }

        moves
    }

    /// 当前走子方是否还有合法走法
    pub fn has_legal_move(state: &BoardState) -> bool {
        !Self::legal_moves(state).is_empty()
    }
}
