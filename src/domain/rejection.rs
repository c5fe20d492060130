// ==========================================
// 供应商目录导入 - 行拒收记录
// ==========================================
// 用途: 行校验失败时写入诊断日志（不落盘为结构化数据）
// 行号: 数据行下标 + 2（表头占 1 行，且从 1 开始计数）
// ==========================================

use serde::Serialize;
use std::fmt;

// ==========================================
// RejectReason - 拒收原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    ColumnMissing, // 表头无此列，或列下标超出本行长度
    EmptyValue,    // 单元格为空字符串
    ParseFailure,  // 数值无法解析
}

// ==========================================
// RowRejection - 单行拒收明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowRejection {
    pub row_number: usize,            // 展示行号（从 1 开始，含表头）
    pub product_name: Option<String>, // 已解析出的商品名称
    pub column: String,               // 出错列名
    pub reason: RejectReason,         // 拒收原因
    pub raw_value: Option<String>,    // 原始单元格文本
    pub detail: Option<String>,       // 解析错误说明
}

impl RowRejection {
    pub fn column_missing(row_number: usize, column: &str, product_name: Option<&str>) -> Self {
        Self {
            row_number,
            product_name: product_name.map(str::to_string),
            column: column.to_string(),
            reason: RejectReason::ColumnMissing,
            raw_value: None,
            detail: None,
        }
    }

    pub fn empty_value(row_number: usize, column: &str) -> Self {
        Self {
            row_number,
            product_name: None,
            column: column.to_string(),
            reason: RejectReason::EmptyValue,
            raw_value: Some(String::new()),
            detail: None,
        }
    }

    pub fn parse_failure(
        row_number: usize,
        column: &str,
        raw_value: &str,
        product_name: &str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            row_number,
            product_name: Some(product_name.to_string()),
            column: column.to_string(),
            reason: RejectReason::ParseFailure,
            raw_value: Some(raw_value.to_string()),
            detail: Some(detail.into()),
        }
    }
}

/// 诊断日志行格式（不含换行符）
impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Строка {}: ", self.row_number)?;
        match self.reason {
            RejectReason::ColumnMissing => {
                write!(f, "колонка '{}' не найдена или вне диапазона", self.column)?
            }
            RejectReason::EmptyValue => write!(f, "пустое значение в колонке '{}'", self.column)?,
            RejectReason::ParseFailure => write!(
                f,
                "не удалось распарсить '{}'='{}'",
                self.column,
                self.raw_value.as_deref().unwrap_or_default()
            )?,
        }
        if let Some(name) = &self.product_name {
            write!(f, " для '{}'", name)?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}
