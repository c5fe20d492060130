// ==========================================
// 供应商目录导入 - 领域模型层
// ==========================================
// 职责: 定义行记录、目录条目、拒收原因、导入结果
// 红线: 不含文件读写逻辑，不含导入流程编排
// ==========================================

pub mod catalog;
pub mod import;
pub mod rejection;

// 重导出核心类型
pub use catalog::{Catalog, CatalogEntry, MergeOutcome, ValidatedRecord};
pub use import::{ImportReport, ImportSummary};
pub use rejection::{RejectReason, RowRejection};
