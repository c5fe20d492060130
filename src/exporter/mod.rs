// ==========================================
// 供应商目录导入 - 结果导出层
// ==========================================
// 职责: 目录 → 缩进 JSON 文件 + 控制台预览
// ==========================================

pub mod json_exporter;
pub mod preview;

pub use json_exporter::{JsonExporter, PendingOutput};
pub use preview::write_preview;
