// ==========================================
// 供应商目录导入 API
// ==========================================
// 职责: 完整执行一次导入
// 顺序: 读取源文件 → 创建诊断日志 → 预建结果文件 → 校验合并 → 提交结果
// 红线: 任何致命错误都不留下输出文件
// ==========================================

use crate::config::ImportConfig;
use crate::domain::catalog::CatalogEntry;
use crate::domain::import::ImportSummary;
use crate::exporter::JsonExporter;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::{CatalogImporter, FileParser, LogFileSink, UniversalFileParser};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 导入API响应
#[derive(Debug, Clone, Serialize)]
pub struct ImportApiResponse {
    /// 批次ID
    pub batch_id: String,
    /// 导入开始时间
    pub started_at: DateTime<Utc>,
    /// 汇总统计
    pub summary: ImportSummary,
    /// 按名称排序的目录条目
    pub entries: Vec<CatalogEntry>,
    /// 结果文件路径
    pub output_path: PathBuf,
    /// 诊断日志路径
    pub diagnostics_path: PathBuf,
    /// 导入耗时（毫秒）
    pub elapsed_ms: u64,
}

/// 导入API
pub struct ImportApi {
    importer: CatalogImporter,
}

impl ImportApi {
    /// 创建新的ImportApi实例（按扩展名选择解析器）
    pub fn new(config: ImportConfig) -> Self {
        Self::with_parser(config, Box::new(UniversalFileParser))
    }

    pub fn with_parser(config: ImportConfig, file_parser: Box<dyn FileParser>) -> Self {
        Self {
            importer: CatalogImporter::new(config, file_parser),
        }
    }

    pub fn config(&self) -> &ImportConfig {
        self.importer.config()
    }

    /// 导入供应商表格
    ///
    /// # 参数
    /// - input_path: 源文件路径
    ///
    /// # 返回
    /// - Ok(ImportApiResponse): 导入结果，结果文件与诊断日志均已落盘
    /// - Err(ImportError): 致命错误，未产生任何输出文件
    pub fn import_supplier_file(&self, input_path: &Path) -> ImportResult<ImportApiResponse> {
        let config = self.importer.config();

        // === 步骤 1: 读取源文件 ===
        let sheet = self.importer.read_sheet(input_path)?;
        if sheet.is_empty() {
            error!(file_path = %input_path.display(), "源文件为空");
            return Err(ImportError::EmptySheet);
        }

        // === 步骤 2: 创建输出目标 ===
        let mut sink = LogFileSink::create(&config.diagnostics_path)?;
        let pending = match JsonExporter::prepare(&config.output_path) {
            Ok(pending) => pending,
            Err(e) => {
                drop(sink);
                remove_quietly(&config.diagnostics_path);
                return Err(e);
            }
        };

        // === 步骤 3: 校验 + 合并 ===
        let report = self.importer.import_sheet(input_path, sheet, &mut sink);
        drop(sink);
        let report = match report {
            Ok(report) => report,
            Err(e) => {
                remove_quietly(&config.diagnostics_path);
                return Err(e);
            }
        };

        // === 步骤 4: 提交结果 ===
        let entries = report.catalog.into_entries();
        if let Err(e) = pending.commit(&entries) {
            remove_quietly(&config.diagnostics_path);
            return Err(e);
        }

        info!(
            batch_id = %report.batch_id,
            output = %config.output_path.display(),
            diagnostics = %config.diagnostics_path.display(),
            "导入结果已写出"
        );

        Ok(ImportApiResponse {
            batch_id: report.batch_id,
            started_at: report.started_at,
            summary: report.summary,
            entries,
            output_path: config.output_path.clone(),
            diagnostics_path: config.diagnostics_path.clone(),
            elapsed_ms: report.elapsed_time.as_millis() as u64,
        })
    }
}

fn remove_quietly(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        tracing::debug!(path = %path.display(), error = %e, "清理输出文件失败");
    }
}
