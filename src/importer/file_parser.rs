// ==========================================
// 供应商目录导入 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xlsb/.xls/.ods) / CSV (.csv)
// 范围: 仅读取第一个工作表，单元格统一转为文本
// ==========================================

use crate::importer::catalog_importer_trait::{FileParser, Sheet};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// 小写扩展名
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// 去除行尾空单元格（行可能因此短于表头）
///
/// 仅用于 Excel: 表格中的空单元格不存在，CSV 中的空字段是真实存在的单元格
fn trim_trailing_empty(mut row: Vec<String>) -> Vec<String> {
    while row.last().is_some_and(|cell| cell.is_empty()) {
        row.pop();
    }
    row
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<Sheet> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false) // 表头由 HeaderResolver 处理
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // csv 会跳过空行，按记录起始行号补齐，使行号与文件行一致
        let mut sheet: Sheet = Vec::new();
        for result in reader.records() {
            let record = result?;
            if let Some(position) = record.position() {
                let line = position.line() as usize;
                while sheet.len() + 1 < line {
                    sheet.push(Vec::new());
                }
            }
            sheet.push(record.iter().map(str::to_string).collect());
        }

        // Excel 另存的 CSV 常带 UTF-8 BOM
        if let Some(first) = sheet.first_mut().and_then(|row| row.first_mut()) {
            if let Some(stripped) = first.strip_prefix('\u{feff}').map(str::to_string) {
                *first = stripped;
            }
        }

        debug!(rows = sheet.len(), "CSV 解析完成");
        Ok(sheet)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<Sheet> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 按扩展名自动选择 xlsx/xls/ods 读取器
        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ImportError::SheetNotFound)??;

        // Range 从第一个非空单元格开始，补齐前导空行与空列，保持 A1 起始的绝对位置
        let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
        let mut sheet: Sheet = vec![Vec::new(); row_offset as usize];
        for row in range.rows() {
            let cells = std::iter::repeat(String::new())
                .take(col_offset as usize)
                .chain(row.iter().map(|cell| cell.to_string()))
                .collect();
            sheet.push(trim_trailing_empty(cells));
        }

        debug!(rows = sheet.len(), "Excel 解析完成");
        Ok(sheet)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_sheet(&self, file_path: &Path) -> ImportResult<Sheet> {
        let ext = extension_of(file_path);

        match ext.as_str() {
            "csv" => CsvParser.parse_sheet(file_path),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelParser.parse_sheet(file_path),
            _ => {
                ensure_exists(file_path)?;
                Err(ImportError::UnsupportedFormat(ext))
            }
        }
    }
}
