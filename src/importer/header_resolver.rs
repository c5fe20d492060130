// ==========================================
// 供应商目录导入 - 表头解析器
// ==========================================
// 职责: 表头名称 → 列下标（从 0 开始）
// 规则: 跳过空表头；同名表头以最右侧为准
// ==========================================

use std::collections::HashMap;

// ==========================================
// HeaderIndex - 表头索引
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    /// 列名对应的下标
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

pub struct HeaderResolver;

impl HeaderResolver {
    /// 由第一行构建表头索引
    ///
    /// 空表头行得到空索引，后续每一行都会因缺列被拒收
    pub fn resolve(&self, header_row: &[String]) -> HeaderIndex {
        let mut columns = HashMap::new();
        for (idx, cell) in header_row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            columns.insert(cell.clone(), idx);
        }
        HeaderIndex { columns }
    }
}
