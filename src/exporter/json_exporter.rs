// ==========================================
// 供应商目录导入 - JSON 导出
// ==========================================
// 格式: [{"name", "stock", "price"}, ...]，两空格缩进，按名称升序
// 落盘: 先写同目录临时文件，成功后再改名，失败不留半成品
// ==========================================

use crate::domain::catalog::CatalogEntry;
use crate::importer::error::{ImportError, ImportResult};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct JsonExporter;

impl JsonExporter {
    /// 序列化为缩进 JSON 文本
    pub fn to_json_string(entries: &[CatalogEntry]) -> ImportResult<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }

    /// 预先创建输出目标
    ///
    /// 在处理数据行之前调用，确保结果文件可写
    pub fn prepare<P: AsRef<Path>>(path: P) -> ImportResult<PendingOutput> {
        let final_path = path.as_ref().to_path_buf();
        let tmp_path = tmp_path_for(&final_path);
        let file = File::create(&tmp_path).map_err(|e| ImportError::OutputCreateError {
            path: final_path.clone(),
            message: e.to_string(),
        })?;
        debug!(tmp_path = %tmp_path.display(), "输出临时文件已创建");

        Ok(PendingOutput {
            final_path,
            tmp_path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// 一次性写出（prepare + commit）
    pub fn write_file<P: AsRef<Path>>(path: P, entries: &[CatalogEntry]) -> ImportResult<()> {
        Self::prepare(path)?.commit(entries)
    }
}

/// 同目录临时文件: result.json → result.json.tmp
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ==========================================
// PendingOutput - 待提交的输出文件
// ==========================================
// 未 commit 即被丢弃时删除临时文件
pub struct PendingOutput {
    final_path: PathBuf,
    tmp_path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl PendingOutput {
    pub fn final_path(&self) -> &Path {
        &self.final_path
    }

    /// 写入 JSON 并改名为最终文件
    pub fn commit(mut self, entries: &[CatalogEntry]) -> ImportResult<()> {
        let json = JsonExporter::to_json_string(entries)?;
        let output_error = |e: std::io::Error| ImportError::OutputCreateError {
            path: self.final_path.clone(),
            message: e.to_string(),
        };

        if let Some(mut writer) = self.writer.take() {
            writer.write_all(json.as_bytes()).map_err(output_error)?;
            writer.write_all(b"\n").map_err(output_error)?;
            writer.flush().map_err(output_error)?;
        }
        std::fs::rename(&self.tmp_path, &self.final_path).map_err(output_error)?;

        info!(
            path = %self.final_path.display(),
            entries = entries.len(),
            "结果已保存"
        );
        Ok(())
    }
}

impl Drop for PendingOutput {
    fn drop(&mut self) {
        // commit 成功后临时文件已改名，删除失败可忽略
        if self.tmp_path.exists() {
            self.writer.take();
            let _ = std::fs::remove_file(&self.tmp_path);
        }
    }
}
