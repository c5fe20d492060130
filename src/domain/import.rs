// ==========================================
// 供应商目录导入 - 导入结果
// ==========================================

use crate::domain::catalog::Catalog;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

// ==========================================
// ImportSummary - 导入汇总统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub total_rows: usize,        // 数据行总数（不含表头）
    pub accepted_rows: usize,     // 通过校验的行数
    pub rejected_rows: usize,     // 被拒收的行数
    pub distinct_products: usize, // 去重后的商品数
}

// ==========================================
// ImportReport - 一次导入的完整结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub batch_id: String,                  // 批次 ID
    pub started_at: DateTime<Utc>,         // 导入开始时间
    pub source_path: PathBuf,              // 源文件路径
    pub summary: ImportSummary,            // 汇总统计
    pub catalog: Catalog,                  // 合并后的目录
    pub elapsed_time: std::time::Duration, // 导入耗时
}
