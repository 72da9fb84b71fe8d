use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use checkers_cli::{Session, Settings};

fn main() -> Result<()> {
    // 日志级别来自设置，加载结果等订阅器初始化后再输出
    let (settings, status) = Settings::load_with_status();

    // 初始化日志（输出到 stderr，避免与棋盘混在一起）
    let mut filter = EnvFilter::from_default_env();
    for directive in settings.log_level.directives() {
        filter = filter.add_directive(directive.parse()?);
    }
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    info!("跳棋启动");
    status.log();
    info!("开局布局: {:?}", settings.layout);

    let stdin = io::stdin();
    let mut session = Session::new(settings, stdin.lock(), io::stdout());
    session.run()?;

    info!("对局结束");
    Ok(())
}
