//! Logging bootstrap for the probe binary.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// 安装 stderr 上的 fmt subscriber；stdout 只保留探测输出。
///
/// 过滤规则取自 `RUST_LOG`，未设置或无效时为 `warn`。
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
