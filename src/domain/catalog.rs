// ==========================================
// 供应商目录导入 - 目录领域模型
// ==========================================
// 用途: 行校验产出 ValidatedRecord，合并引擎维护 Catalog
// 红线: CatalogEntry 只允许整体替换，不做字段级修补
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// ValidatedRecord - 通过校验的行记录
// ==========================================
// 生命周期: 每行临时构造，立即交给合并引擎消费
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecord {
    pub name: String, // 商品名称（非空）
    pub stock: f64,   // 库存数量（不做下限校验）
    pub price: i64,   // 单价（向上取整后的整数）
}

// ==========================================
// CatalogEntry - 目录条目（导出结构）
// ==========================================
// 字段名固定为 name / stock / price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub stock: f64,
    pub price: i64,
}

impl From<ValidatedRecord> for CatalogEntry {
    fn from(record: ValidatedRecord) -> Self {
        Self {
            name: record.name,
            stock: record.stock,
            price: record.price,
        }
    }
}

// ==========================================
// MergeOutcome - 单条记录合并结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Inserted, // 新名称，直接插入
    Replaced, // 价格严格更高，整体替换
    Kept,     // 价格不高于已有条目，保留原条目
}

// ==========================================
// Catalog - 商品名称 → 目录条目
// ==========================================
// 导出顺序按名称升序，保证结果可复现
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// 按名称升序遍历
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// 转为有序条目列表（导出用）
    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries.into_values().collect()
    }

    pub(crate) fn slot(&mut self, name: &str) -> Option<&mut CatalogEntry> {
        self.entries.get_mut(name)
    }

    pub(crate) fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }
}
