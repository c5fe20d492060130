// ==========================================
// 供应商目录导入 - 行校验与类型转换
// ==========================================
// 职责: 单行 → ValidatedRecord，或产出一条拒收诊断
// 顺序: 名称 → 库存 → 单价（遇到第一个失败即停止）
// 红线: 行级问题不得中止整次导入
// ==========================================

use crate::config::ColumnNames;
use crate::domain::catalog::ValidatedRecord;
use crate::domain::rejection::RowRejection;
use crate::importer::catalog_importer_trait::DiagnosticsSink;
use crate::importer::header_resolver::HeaderIndex;
use tracing::warn;

/// 单价向上取整到整数计费单位（10.01 → 11，10.00 → 10）
///
/// 非有限值或超出 i64 范围返回 None
pub fn ceil_price(price: f64) -> Option<i64> {
    let ceiled = price.ceil();
    // i64::MAX as f64 == 2^63，该值本身已越界
    if !ceiled.is_finite() || ceiled < i64::MIN as f64 || ceiled >= i64::MAX as f64 {
        return None;
    }
    Some(ceiled as i64)
}

/// 解析十进制浮点数文本（不做 trim）
fn parse_number(raw: &str) -> Result<f64, String> {
    let value = raw.parse::<f64>().map_err(|e| e.to_string())?;
    if !value.is_finite() {
        return Err("значение не является конечным числом".to_string());
    }
    Ok(value)
}

pub struct RowValidator<'a> {
    headers: &'a HeaderIndex,
    columns: &'a ColumnNames,
}

impl<'a> RowValidator<'a> {
    pub fn new(headers: &'a HeaderIndex, columns: &'a ColumnNames) -> Self {
        Self { headers, columns }
    }

    /// 校验一行数据
    ///
    /// # 参数
    /// - row: 原始单元格
    /// - row_number: 展示行号（数据行下标 + 2）
    /// - sink: 诊断输出，失败时恰好写入一条
    ///
    /// # 返回
    /// - Some(ValidatedRecord): 三个必填列均有效
    /// - None: 已拒收
    pub fn validate(
        &self,
        row: &[String],
        row_number: usize,
        sink: &mut dyn DiagnosticsSink,
    ) -> Option<ValidatedRecord> {
        match self.check(row, row_number) {
            Ok(record) => Some(record),
            Err(rejection) => {
                warn!(
                    row_number,
                    column = %rejection.column,
                    reason = ?rejection.reason,
                    "行被拒收"
                );
                sink.emit(&rejection);
                None
            }
        }
    }

    fn check(&self, row: &[String], row_number: usize) -> Result<ValidatedRecord, RowRejection> {
        // === 名称 ===
        let name_column = self.columns.name.as_str();
        let name = self
            .cell(row, name_column)
            .ok_or_else(|| RowRejection::column_missing(row_number, name_column, None))?;
        if name.is_empty() {
            return Err(RowRejection::empty_value(row_number, name_column));
        }

        // === 库存 ===
        let (_, stock) = self.number(row, row_number, &self.columns.stock, name)?;

        // === 单价 ===
        let price_column = self.columns.price.as_str();
        let (raw_price, price) = self.number(row, row_number, price_column, name)?;
        let price = ceil_price(price).ok_or_else(|| {
            RowRejection::parse_failure(
                row_number,
                price_column,
                raw_price,
                name,
                "цена вне допустимого диапазона",
            )
        })?;

        Ok(ValidatedRecord {
            name: name.to_string(),
            stock,
            price,
        })
    }

    /// 取单元格: 表头无此列或下标超出本行长度时返回 None
    fn cell<'r>(&self, row: &'r [String], column: &str) -> Option<&'r str> {
        self.headers
            .position(column)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
    }

    /// 取数值列，返回（原始文本，数值）
    fn number<'r>(
        &self,
        row: &'r [String],
        row_number: usize,
        column: &str,
        name: &str,
    ) -> Result<(&'r str, f64), RowRejection> {
        let raw = self
            .cell(row, column)
            .ok_or_else(|| RowRejection::column_missing(row_number, column, Some(name)))?;
        parse_number(raw)
            .map(|value| (raw, value))
            .map_err(|e| RowRejection::parse_failure(row_number, column, raw, name, e))
    }
}
