// ==========================================
// 供应商目录导入 - 配置层
// ==========================================
// 职责: 列名、输出路径、预览条数等导入参数
// 存储: 可选 JSON 配置文件 + 命令行覆写
// ==========================================

pub mod import_config;

// 重导出核心配置类型
pub use import_config::{config_keys, ColumnNames, ImportConfig};
