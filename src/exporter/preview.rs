// ==========================================
// 供应商目录导入 - 控制台预览
// ==========================================

use crate::domain::catalog::CatalogEntry;
use std::io::{self, Write};

/// 输出前 limit 条目录条目，每条一行紧凑 JSON
///
/// limit 为 0 时不输出任何内容
pub fn write_preview<W: Write>(
    out: &mut W,
    entries: &[CatalogEntry],
    limit: usize,
) -> io::Result<()> {
    if limit == 0 {
        return Ok(());
    }

    let shown = entries.len().min(limit);
    writeln!(out, "Данные успешно спарсены (первые {} строк):", shown)?;
    for entry in entries.iter().take(limit) {
        let line = serde_json::to_string(entry).map_err(io::Error::other)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
