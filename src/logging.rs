// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// 输出到 stderr，stdout 留给结果预览
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 参数
/// - default_level: RUST_LOG 未设置时的级别（如 "info"、"debug"）
/// - json: 是否输出 JSON 格式
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器，优先于 default_level
///   例如: RUST_LOG=debug 或 RUST_LOG=supplier_catalog=trace
///
/// # 示例
/// ```no_run
/// use supplier_catalog::logging;
/// logging::init("info", false);
/// ```
pub fn init(default_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    // 重复初始化时保留已有的订阅器
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
