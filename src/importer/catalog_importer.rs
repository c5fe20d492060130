// ==========================================
// 供应商目录导入 - 导入器实现
// ==========================================
// 流程: 解析文件 → 表头索引 → 逐行校验 → 合并去重
// 错误: 文件/工作表级问题中止导入；行级问题写诊断日志后跳过
// ==========================================

use crate::config::ImportConfig;
use crate::domain::catalog::{Catalog, MergeOutcome};
use crate::domain::import::{ImportReport, ImportSummary};
use crate::importer::catalog_importer_trait::{DiagnosticsSink, FileParser, Sheet};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::header_resolver::HeaderResolver;
use crate::importer::merge_engine::MergeEngine;
use crate::importer::row_validator::RowValidator;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// CatalogImporter - 目录导入器
// ==========================================
pub struct CatalogImporter {
    config: ImportConfig,
    file_parser: Box<dyn FileParser>,
}

impl CatalogImporter {
    pub fn new(config: ImportConfig, file_parser: Box<dyn FileParser>) -> Self {
        Self {
            config,
            file_parser,
        }
    }

    /// 按扩展名自动选择解析器
    pub fn with_default_parser(config: ImportConfig) -> Self {
        Self::new(config, Box::new(UniversalFileParser))
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// 读取源文件第一个工作表
    ///
    /// 与 import_sheet 分开，便于调用方在创建输出目标之前先确认源文件可读
    pub fn read_sheet(&self, file_path: &Path) -> ImportResult<Sheet> {
        self.file_parser.parse_sheet(file_path).map_err(|e| {
            error!(file_path = %file_path.display(), error = %e, "文件解析失败");
            e
        })
    }

    /// 从文件导入
    pub fn import_file(
        &self,
        file_path: &Path,
        sink: &mut dyn DiagnosticsSink,
    ) -> ImportResult<ImportReport> {
        let sheet = self.read_sheet(file_path)?;
        self.import_sheet(file_path, sheet, sink)
    }

    /// 从已读取的工作表导入
    ///
    /// # 返回
    /// - Ok(ImportReport): 合并后的目录与汇总统计
    /// - Err(EmptySheet): 工作表没有任何行
    #[instrument(skip_all, fields(file_path = %source_path.display(), batch_id))]
    pub fn import_sheet(
        &self,
        source_path: &Path,
        sheet: Sheet,
        sink: &mut dyn DiagnosticsSink,
    ) -> ImportResult<ImportReport> {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        info!(
            batch_id = %batch_id,
            file_path = %source_path.display(),
            "开始导入供应商数据"
        );

        let (catalog, summary) = self.build_catalog(sheet, sink)?;

        if let Err(e) = sink.finish() {
            // 诊断输出失败不影响目录结果
            warn!(error = %e, "诊断日志刷新失败");
        }

        let elapsed_time = start_time.elapsed();
        info!(
            total = summary.total_rows,
            accepted = summary.accepted_rows,
            rejected = summary.rejected_rows,
            distinct = summary.distinct_products,
            elapsed_ms = elapsed_time.as_millis() as u64,
            "导入完成"
        );

        Ok(ImportReport {
            batch_id,
            started_at,
            source_path: source_path.to_path_buf(),
            summary,
            catalog,
            elapsed_time,
        })
    }

    /// 核心流程: 表头 → 逐行校验 → 合并
    pub fn build_catalog(
        &self,
        sheet: Sheet,
        sink: &mut dyn DiagnosticsSink,
    ) -> ImportResult<(Catalog, ImportSummary)> {
        let mut rows = sheet.into_iter();
        let header_row = rows.next().ok_or(ImportError::EmptySheet)?;

        // === 步骤 1: 表头索引 ===
        let headers = HeaderResolver.resolve(&header_row);
        debug!(columns = headers.len(), "表头解析完成");
        for column in [
            &self.config.columns.name,
            &self.config.columns.stock,
            &self.config.columns.price,
        ] {
            if headers.position(column).is_none() {
                warn!(column = %column, "表头缺少必填列,所有行都将被拒收");
            }
        }

        // === 步骤 2: 逐行校验 + 合并 ===
        let validator = RowValidator::new(&headers, &self.config.columns);
        let mut engine = MergeEngine::new();
        let mut summary = ImportSummary::default();
        let mut replaced = 0usize;

        for (idx, row) in rows.enumerate() {
            summary.total_rows += 1;
            // 表头占第 1 行，数据行从第 2 行开始
            let row_number = idx + 2;

            match validator.validate(&row, row_number, sink) {
                Some(record) => {
                    summary.accepted_rows += 1;
                    if engine.merge(record) == MergeOutcome::Replaced {
                        replaced += 1;
                    }
                }
                None => summary.rejected_rows += 1,
            }
        }

        let catalog = engine.into_catalog();
        summary.distinct_products = catalog.len();
        debug!(replaced, "合并完成");

        Ok((catalog, summary))
    }
}
