// ==========================================
// 供应商目录导入 - 导入组件 Trait
// ==========================================
// 职责: 定义文件解析与诊断输出接口（不包含实现）
// ==========================================

use crate::domain::rejection::RowRejection;
use crate::importer::error::ImportResult;
use std::path::Path;

/// 原始工作表: 第 0 行为表头，其余为数据行（允许长短不一）
pub type Sheet = Vec<Vec<String>>;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 读取源文件的第一个工作表
// 实现者: ExcelParser, CsvParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始工作表
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Sheet): 所有行（含表头），行号与源文件一致（空行保留为空行）
    /// - Err: 文件不存在、格式不支持、无工作表
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<Sheet>;
}

// ==========================================
// DiagnosticsSink Trait
// ==========================================
// 用途: 接收被拒收行的诊断信息（只追加）
// 实现者: LogFileSink, MemorySink
pub trait DiagnosticsSink {
    /// 写入一条拒收记录
    ///
    /// 写入失败不得中止导入，实现方自行记录告警
    fn emit(&mut self, rejection: &RowRejection);

    /// 导入结束时刷新并释放目标
    fn finish(&mut self) -> ImportResult<()> {
        Ok(())
    }
}
