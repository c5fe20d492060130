// ==========================================
// 供应商目录导入 - API 层
// ==========================================
// 职责: 串联配置、导入器、诊断日志与结果导出，供命令行调用
// ==========================================

pub mod import_api;

// 重导出核心类型
pub use import_api::{ImportApi, ImportApiResponse};
