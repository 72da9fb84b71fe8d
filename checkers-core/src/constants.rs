//! 规则常量定义

/// 棋盘宽度（列数）
pub const BOARD_WIDTH: usize = 8;

/// 棋盘高度（行数）
pub const BOARD_HEIGHT: usize = 8;

/// 开局时每方占据的行数
pub const STARTING_ROWS: usize = 3;

/// 黑方升变行（黑方向 y 增大方向走）
pub const BLACK_PROMOTION_ROW: i8 = 7;

/// 红方升变行（红方向 y 减小方向走）
pub const RED_PROMOTION_ROW: i8 = 0;

/// 吃子时的跨越距离
pub const JUMP_DISTANCE: i8 = 2;
