// ==========================================
// 供应商目录导入 - 核心库
// ==========================================
// 输入: 供应商表格（第一个工作表，首行为表头）
// 输出: 按名称去重的目录 JSON + 逐行诊断日志
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 行记录与目录
pub mod domain;

// 导入层 - 解析、校验、合并
pub mod importer;

// 导出层 - JSON 与控制台预览
pub mod exporter;

// 配置层 - 导入参数
pub mod config;

// API 层 - 完整导入流程
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use api::{ImportApi, ImportApiResponse};
pub use config::{ColumnNames, ImportConfig};
pub use domain::{
    Catalog, CatalogEntry, ImportReport, ImportSummary, MergeOutcome, RejectReason,
    RowRejection, ValidatedRecord,
};
pub use importer::{
    CatalogImporter, DiagnosticsSink, FileParser, HeaderIndex, HeaderResolver, ImportError,
    ImportResult, LogFileSink, MemorySink, MergeEngine, RowValidator,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Импорт прайс-листа поставщика";
