// ==========================================
// 供应商目录导入 - 诊断输出
// ==========================================
// 职责: 每个被拒收的行写一行可读文本
// 实现: LogFileSink（文件/任意 Write）、MemorySink（内存，测试与嵌入调用）
// ==========================================

use crate::domain::rejection::RowRejection;
use crate::importer::catalog_importer_trait::DiagnosticsSink;
use crate::importer::error::{ImportError, ImportResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::warn;

// ==========================================
// LogFileSink - 追加写入文本日志
// ==========================================
pub struct LogFileSink<W: Write> {
    writer: W,
    written: usize,
    failed: usize,
}

impl LogFileSink<BufWriter<File>> {
    /// 创建（截断）诊断日志文件
    pub fn create<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ImportError::DiagnosticsCreateError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LogFileSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            failed: 0,
        }
    }

    /// 成功写入的行数
    pub fn written(&self) -> usize {
        self.written
    }

    /// 写入失败的行数
    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticsSink for LogFileSink<W> {
    fn emit(&mut self, rejection: &RowRejection) {
        match writeln!(self.writer, "{}", rejection) {
            Ok(()) => self.written += 1,
            Err(e) => {
                self.failed += 1;
                warn!(row_number = rejection.row_number, error = %e, "诊断日志写入失败");
            }
        }
    }

    fn finish(&mut self) -> ImportResult<()> {
        self.writer
            .flush()
            .map_err(|e| ImportError::DiagnosticsWriteError(e.to_string()))
    }
}

// ==========================================
// MemorySink - 内存收集
// ==========================================
#[derive(Debug, Default)]
pub struct MemorySink {
    rejections: Vec<RowRejection>,
}

impl MemorySink {
    pub fn rejections(&self) -> &[RowRejection] {
        &self.rejections
    }

    /// 按日志格式渲染的行
    pub fn lines(&self) -> Vec<String> {
        self.rejections.iter().map(ToString::to_string).collect()
    }
}

impl DiagnosticsSink for MemorySink {
    fn emit(&mut self, rejection: &RowRejection) {
        self.rejections.push(rejection.clone());
    }
}
