//! 跳棋命令行客户端
//!
//! 包含:
//! - 文本棋盘渲染
//! - 走法输入解析
//! - 设置持久化
//! - 交互式对局循环

pub mod input;
pub mod render;
pub mod session;
pub mod settings;

pub use input::{parse_command, parse_move, Command, InputError};
pub use render::Renderer;
pub use session::Session;
pub use settings::{LoadStatus, LogLevel, Settings, SettingsError};
