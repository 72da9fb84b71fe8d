//! 交互式对局
//!
//! 读取一行输入，解析为命令或走法，交给规则引擎执行并输出结果。

use std::io::{self, BufRead, Write};

use tracing::debug;

use checkers_core::{BoardState, Move, MoveOutcome, Notation, Rules};

use crate::input::{parse_command, Command};
use crate::render::Renderer;
use crate::settings::Settings;

const HELP: &str = "\
输入四个数字走棋：起点列 起点行 终点列 终点行（例如 1 2 2 3）
  moves     列出合法走法
  board     重新显示棋盘
  position  显示局面记法
  help      显示帮助
  quit      退出";

/// 对局会话
pub struct Session<R, W> {
    state: BoardState,
    settings: Settings,
    renderer: Renderer,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// 按设置创建新对局
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        let state = BoardState::new(settings.layout);
        Self::with_state(state, settings, input, output)
    }

    /// 从指定局面开始
    pub fn with_state(state: BoardState, settings: Settings, input: R, output: W) -> Self {
        Self {
            state,
            renderer: Renderer::new(settings.column_header),
            settings,
            input,
            output,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// 运行对局循环，直到退出或输入结束
    pub fn run(&mut self) -> io::Result<()> {
        self.print_board()?;

        loop {
            let legal = Rules::legal_moves(&self.state);
            if legal.is_empty() {
                writeln!(self.output, "{} 没有合法走法", self.state.current_turn)?;
            } else if self.settings.show_hints {
                self.print_moves(&legal)?;
            }

            write!(
                self.output,
                "{} 走棋 (输入 help 查看帮助): ",
                self.state.current_turn
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("输入结束");
                writeln!(self.output)?;
                break;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Moves) => self.print_moves(&legal)?,
                Ok(Command::Board) => self.print_board()?,
                Ok(Command::Position) => {
                    writeln!(self.output, "{}", Notation::to_string(&self.state))?
                }
                Ok(Command::Move(mv)) => self.play(mv)?,
                Err(e) => {
                    debug!("无效输入 {:?}: {}", line.trim(), e);
                    writeln!(self.output, "输入无效: {}", e)?;
                }
            }
        }

        Ok(())
    }

    /// 执行一步棋并输出结果
    fn play(&mut self, mv: Move) -> io::Result<()> {
        match Rules::apply(&mut self.state, &mv) {
            Ok(outcome) => {
                self.report(&outcome)?;
                self.print_board()
            }
            Err(violation) => {
                debug!("走法被拒绝 {}: {}", mv, violation.reason());
                writeln!(self.output, "走法被拒绝: {}", violation)
            }
        }
    }

    fn report(&mut self, outcome: &MoveOutcome) -> io::Result<()> {
        writeln!(
            self.output,
            "{} 走 {}",
            outcome.next_turn.opponent(),
            outcome.mv
        )?;
        if let Some(capture) = outcome.capture {
            writeln!(
                self.output,
                "吃掉 {} 棋子 {}",
                capture.piece.side, capture.position
            )?;
        }
        if let Some(at) = outcome.promotion {
            writeln!(self.output, "{} 升变为王", at)?;
        }
        writeln!(self.output, "轮到 {}", outcome.next_turn)
    }

    fn print_board(&mut self) -> io::Result<()> {
        write!(self.output, "{}", self.renderer.render(&self.state.board))
    }

    fn print_moves(&mut self, moves: &[Move]) -> io::Result<()> {
        writeln!(self.output, "合法走法:")?;
        for mv in moves {
            writeln!(
                self.output,
                "  {} {} {} {}",
                mv.from.x, mv.from.y, mv.to.x, mv.to.y
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{InitialLayout, Piece, Position, Side};
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    /// 收集日志输出的 writer
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// 在指定日志级别下运行会话，返回日志输出
    fn session_logs(level: tracing::Level, script: &str) -> String {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            run_session(BoardState::default(), Settings::default(), script);
        });
        logs.contents()
    }

    fn run_session(state: BoardState, settings: Settings, script: &str) -> (BoardState, String) {
        let mut session = Session::with_state(state, settings, Cursor::new(script.as_bytes()), Vec::new());
        session.run().unwrap();
        let output = String::from_utf8(session.output().clone()).unwrap();
        (session.state().clone(), output)
    }

    #[test]
    fn test_accepted_move() {
        let (state, output) = run_session(BoardState::default(), Settings::default(), "1 2 2 3\nquit\n");

        assert_eq!(state.current_turn, Side::Red);
        assert_eq!(
            state.board.get(Position::new_unchecked(2, 3)),
            Some(Piece::normal(Side::Black))
        );
        assert!(output.contains("Black 走 (1, 2) -> (2, 3)"));
        assert!(output.contains("轮到 Red"));
    }

    #[test]
    fn test_rejected_move_keeps_board() {
        let initial = BoardState::default();
        let (state, output) = run_session(initial.clone(), Settings::default(), "0 5 1 4\n1 2 1 3\n");

        assert_eq!(state, initial);
        assert!(output.contains("走法被拒绝: not this color's turn"));
        assert!(output.contains("走法被拒绝: not diagonal"));
    }

    #[test]
    fn test_rejected_move_logged_at_debug_only() {
        // 默认的 warn 级别下，被拒绝的走法不产生日志
        let logs = session_logs(tracing::Level::WARN, "1 2 1 3\n");
        assert!(logs.is_empty(), "{}", logs);

        let logs = session_logs(tracing::Level::DEBUG, "1 2 1 3\n");
        assert!(logs.contains("走法被拒绝"));
        assert!(logs.contains("DEBUG"));
        assert!(!logs.contains("WARN"));
    }

    #[test]
    fn test_malformed_input() {
        let initial = BoardState::default();
        let (state, output) = run_session(initial.clone(), Settings::default(), "1 2\n1 x 2 3\n1 2 9 3\n");

        assert_eq!(state, initial);
        assert!(output.contains("输入无效: expected 4 numbers, got 2"));
        assert!(output.contains("输入无效: not a number: \"x\""));
        assert!(output.contains("输入无效: coordinate out of range 0-7: 9"));
    }

    #[test]
    fn test_capture_and_promotion_report() {
        let state = Notation::parse("8/8/8/8/8/2b5/3r4/8 b").unwrap();
        let (state, output) = run_session(state, Settings::default(), "2 5 4 7\n");

        assert!(output.contains("吃掉 Red 棋子 (3, 6)"));
        assert!(output.contains("(4, 7) 升变为王"));
        assert_eq!(state.board.count(Side::Red), 0);
        assert_eq!(
            state.board.get(Position::new_unchecked(4, 7)),
            Some(Piece::queen(Side::Black))
        );
    }

    #[test]
    fn test_commands() {
        let (_, output) = run_session(BoardState::default(), Settings::default(), "help\nmoves\nposition\n");

        assert!(output.contains("列出合法走法"));
        assert!(output.contains("合法走法:\n  1 2 2 3\n  1 2 0 3\n"));
        assert!(output.contains(checkers_core::STANDARD_POSITION));
    }

    #[test]
    fn test_overlapping_layout_reports_no_moves() {
        let settings = Settings {
            layout: InitialLayout::Overlapping,
            ..Settings::default()
        };
        let mut session = Session::new(settings, Cursor::new(&b""[..]), Vec::new());
        session.run().unwrap();

        let output = String::from_utf8(session.output().clone()).unwrap();
        assert!(output.contains("Black 没有合法走法"));
        assert_eq!(session.state().board.count(Side::Black), 0);
    }
}
