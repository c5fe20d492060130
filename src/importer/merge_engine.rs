// ==========================================
// 供应商目录导入 - 合并引擎
// ==========================================
// 职责: 按商品名称去重，保留最高报价
// 规则: 名称不存在 → 插入；单价严格更高 → 整体替换；否则保留原条目
// 说明: 同价时保留先出现记录的库存
// ==========================================

use crate::domain::catalog::{Catalog, CatalogEntry, MergeOutcome, ValidatedRecord};
use tracing::trace;

#[derive(Debug, Default)]
pub struct MergeEngine {
    catalog: Catalog,
}

impl MergeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在已有目录上继续合并
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// 合并一条记录
    pub fn merge(&mut self, record: ValidatedRecord) -> MergeOutcome {
        if let Some(existing) = self.catalog.slot(&record.name) {
            if record.price > existing.price {
                trace!(name = %record.name, old = existing.price, new = record.price, "报价更高,替换");
                *existing = CatalogEntry::from(record);
                return MergeOutcome::Replaced;
            }
            return MergeOutcome::Kept;
        }

        self.catalog.insert(CatalogEntry::from(record));
        MergeOutcome::Inserted
    }

    pub fn merge_all<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = ValidatedRecord>,
    {
        for record in records {
            self.merge(record);
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 交出目录（导入结束后调用）
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, stock: f64, price: i64) -> ValidatedRecord {
        ValidatedRecord {
            name: name.to_string(),
            stock,
            price,
        }
    }

    #[test]
    fn test_merge_insert_new() {
        let mut engine = MergeEngine::new();

        assert_eq!(engine.merge(record("Bolt", 100.0, 10)), MergeOutcome::Inserted);
        assert_eq!(engine.merge(record("Nut", 5.0, 1)), MergeOutcome::Inserted);
        assert_eq!(engine.catalog().len(), 2);
    }

    #[test]
    fn test_merge_higher_price_replaces_whole_entry() {
        let mut engine = MergeEngine::new();
        engine.merge(record("Bolt", 100.0, 10));

        assert_eq!(engine.merge(record("Bolt", 50.0, 12)), MergeOutcome::Replaced);

        let entry = engine.catalog().get("Bolt").unwrap();
        assert_eq!(entry.price, 12);
        assert_eq!(entry.stock, 50.0);
    }

    #[test]
    fn test_merge_lower_price_kept() {
        let mut engine = MergeEngine::new();
        engine.merge(record("Bolt", 50.0, 12));

        assert_eq!(engine.merge(record("Bolt", 999.0, 10)), MergeOutcome::Kept);

        let entry = engine.catalog().get("Bolt").unwrap();
        assert_eq!(entry.price, 12);
        assert_eq!(entry.stock, 50.0);
    }

    #[test]
    fn test_merge_equal_price_keeps_first_stock() {
        let mut engine = MergeEngine::new();
        engine.merge(record("Bolt", 1.0, 12));

        assert_eq!(engine.merge(record("Bolt", 2.0, 12)), MergeOutcome::Kept);
        assert_eq!(engine.merge(record("Bolt", 3.0, 12)), MergeOutcome::Kept);

        assert_eq!(engine.catalog().get("Bolt").unwrap().stock, 1.0);
    }

    #[test]
    fn test_merge_retains_max_price_in_any_order() {
        let prices = [7, 3, 15, 9, 15, 1];
        let mut engine = MergeEngine::new();
        for (idx, price) in prices.iter().enumerate() {
            engine.merge(record("Bolt", idx as f64, *price));
        }

        let entry = engine.catalog().get("Bolt").unwrap();
        assert_eq!(entry.price, 15);
        // 第一个 15 出现在下标 2
        assert_eq!(entry.stock, 2.0);
    }

    #[test]
    fn test_merge_idempotent() {
        let records = vec![
            record("Bolt", 100.0, 10),
            record("Bolt", 50.0, 12),
            record("Nut", 5.0, 1),
            record("Nut", 6.0, 1),
        ];

        let mut once = MergeEngine::new();
        once.merge_all(records.clone());
        let catalog_once = once.into_catalog();

        let mut twice = MergeEngine::from_catalog(catalog_once.clone());
        twice.merge_all(records);

        assert_eq!(twice.into_catalog(), catalog_once);
    }

    #[test]
    fn test_merge_names_are_exact() {
        let mut engine = MergeEngine::new();
        engine.merge(record("Bolt", 1.0, 1));
        engine.merge(record("bolt", 1.0, 1));
        engine.merge(record("Bolt ", 1.0, 1));

        assert_eq!(engine.catalog().len(), 3);
    }
}
