// ==========================================
// 供应商目录导入 - 导入层
// ==========================================
// 职责: 读取供应商表格，校验每一行，按名称合并为目录
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod catalog_importer;
pub mod catalog_importer_trait;
pub mod diagnostics;
pub mod error;
pub mod file_parser;
pub mod header_resolver;
pub mod merge_engine;
pub mod row_validator;

// 重导出核心类型
pub use catalog_importer::CatalogImporter;
pub use diagnostics::{LogFileSink, MemorySink};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use header_resolver::{HeaderIndex, HeaderResolver};
pub use merge_engine::MergeEngine;
pub use row_validator::{ceil_price, RowValidator};

// 重导出 Trait 接口
pub use catalog_importer_trait::{DiagnosticsSink, FileParser, Sheet};
