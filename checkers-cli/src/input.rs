//! 走法输入解析
//!
//! 把一行文本解析为命令或走法。走法为四个整数：起点列、起点行、终点列、终点行，
//! 以空白或逗号分隔。解析失败时不会构造走法。

use thiserror::Error;

use checkers_core::{Move, Position, BOARD_WIDTH};

/// 走法所需的坐标个数
const COORDINATE_COUNT: usize = 4;

/// 输入错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// 坐标个数不对
    #[error("expected {expected} numbers, got {found}")]
    WrongTokenCount { expected: usize, found: usize },

    /// 不是数字
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// 坐标越界
    #[error("coordinate out of range 0-7: {0}")]
    OutOfRange(i64),
}

/// 用户命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 走一步棋
    Move(Move),
    /// 显示帮助
    Help,
    /// 列出合法走法
    Moves,
    /// 重新显示棋盘
    Board,
    /// 显示局面记法
    Position,
    /// 退出
    Quit,
}

/// 解析一行输入为命令
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let command = match line.trim().to_ascii_lowercase().as_str() {
        "help" | "h" | "?" => Command::Help,
        "moves" | "m" => Command::Moves,
        "board" | "b" => Command::Board,
        "position" | "pos" => Command::Position,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Move(parse_move(line)?),
    };
    Ok(command)
}

/// 解析四个坐标为走法
pub fn parse_move(line: &str) -> Result<Move, InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() != COORDINATE_COUNT {
        return Err(InputError::WrongTokenCount {
            expected: COORDINATE_COUNT,
            found: tokens.len(),
        });
    }

    let mut coords = [0i8; COORDINATE_COUNT];
    for (slot, token) in coords.iter_mut().zip(&tokens) {
        *slot = parse_coordinate(token)?;
    }

    let [from_x, from_y, to_x, to_y] = coords;
    Ok(Move::new(
        Position::new_unchecked(from_x, from_y),
        Position::new_unchecked(to_x, to_y),
    ))
}

/// 解析单个坐标并检查范围
fn parse_coordinate(token: &str) -> Result<i8, InputError> {
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))?;

    if (0..BOARD_WIDTH as i64).contains(&value) {
        Ok(value as i8)
    } else {
        Err(InputError::OutOfRange(value))
    }
}
