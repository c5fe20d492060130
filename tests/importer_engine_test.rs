// ==========================================
// 导入引擎集成测试
// ==========================================
// 测试目标: 通过公开 API 验证表头解析、行校验、合并去重的组合行为
// 说明: 使用内存解析器与 MemorySink，不触碰文件系统
// ==========================================

use std::path::Path;
use supplier_catalog::importer::{FileParser, Sheet};
use supplier_catalog::{
    CatalogImporter, DiagnosticsSink, ImportConfig, ImportError, ImportResult, MemorySink,
    MergeEngine, RejectReason, RowRejection, ValidatedRecord,
};

/// 内存解析器: 忽略路径，返回预设工作表
struct StaticParser(Sheet);

impl FileParser for StaticParser {
    fn parse_sheet(&self, _file_path: &Path) -> ImportResult<Sheet> {
        Ok(self.0.clone())
    }
}

/// 统计 finish 调用次数的 sink
#[derive(Default)]
struct CountingSink {
    emitted: usize,
    finished: usize,
}

impl DiagnosticsSink for CountingSink {
    fn emit(&mut self, _rejection: &RowRejection) {
        self.emitted += 1;
    }

    fn finish(&mut self) -> ImportResult<()> {
        self.finished += 1;
        Ok(())
    }
}

fn sheet(rows: &[&[&str]]) -> Sheet {
    rows.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

fn importer(rows: &[&[&str]]) -> CatalogImporter {
    CatalogImporter::new(ImportConfig::default(), Box::new(StaticParser(sheet(rows))))
}

const HEADER: &[&str] = &["Название", "Остаток", "Цена за 1 уп."];

#[test]
fn test_import_file_end_to_end_scenario() {
    let importer = importer(&[
        HEADER,
        &["Bolt", "100", "9.99"],
        &["Bolt", "50", "12.00"],
        &["Nut", "", "5"],
    ]);
    let mut sink = MemorySink::default();

    let report = importer
        .import_file(Path::new("supplier.xlsx"), &mut sink)
        .unwrap();

    assert_eq!(report.catalog.len(), 1);
    let bolt = report.catalog.get("Bolt").unwrap();
    assert_eq!((bolt.stock, bolt.price), (50.0, 12));
    assert_eq!(sink.rejections().len(), 1);
    assert_eq!(sink.rejections()[0].row_number, 4);
}

#[test]
fn test_every_rejected_row_emits_exactly_one_line() {
    let importer = importer(&[
        HEADER,
        &["", "1", "1"],           // 空名称
        &["A", "x", "y"],          // 库存与单价都非法
        &["B"],                    // 库存列越界
        &["C", "1"],               // 单价列越界
        &["D", "1", "not-a-price"], // 单价非法
        &["E", "1", "1"],          // 正常
    ]);
    let mut sink = CountingSink::default();

    let report = importer.import_file(Path::new("x.csv"), &mut sink).unwrap();

    assert_eq!(sink.emitted, 5);
    assert_eq!(report.summary.rejected_rows, 5);
    assert_eq!(report.summary.accepted_rows, 1);
    assert_eq!(report.catalog.len(), 1);
    // 导入结束时释放一次
    assert_eq!(sink.finished, 1);
}

#[test]
fn test_rejection_reasons_follow_column_order() {
    let importer = importer(&[
        HEADER,
        &["", "bad", "bad"],
        &["A", "bad", "bad"],
        &["B", "1"],
    ]);
    let mut sink = MemorySink::default();

    importer.import_file(Path::new("x.csv"), &mut sink).unwrap();

    let reasons: Vec<(RejectReason, &str)> = sink
        .rejections()
        .iter()
        .map(|r| (r.reason, r.column.as_str()))
        .collect();
    assert_eq!(
        reasons,
        vec![
            (RejectReason::EmptyValue, "Название"),
            (RejectReason::ParseFailure, "Остаток"),
            (RejectReason::ColumnMissing, "Цена за 1 уп."),
        ]
    );
}

#[test]
fn test_missing_required_header_rejects_all_rows() {
    let importer = importer(&[
        &["Название", "Остаток"],
        &["Bolt", "1", "1"],
        &["Nut", "1", "1"],
    ]);
    let mut sink = MemorySink::default();

    let report = importer.import_file(Path::new("x.csv"), &mut sink).unwrap();

    assert!(report.catalog.is_empty());
    assert!(sink
        .rejections()
        .iter()
        .all(|r| r.reason == RejectReason::ColumnMissing && r.column == "Цена за 1 уп."));
    // 名称已解析，日志中带上名称
    assert_eq!(sink.rejections()[0].product_name.as_deref(), Some("Bolt"));
}

#[test]
fn test_empty_sheet_is_fatal() {
    let importer = importer(&[]);
    let mut sink = MemorySink::default();

    let result = importer.import_file(Path::new("x.csv"), &mut sink);

    assert!(matches!(result, Err(ImportError::EmptySheet)));
}

#[test]
fn test_tied_max_price_keeps_first_seen_stock() {
    let importer = importer(&[
        HEADER,
        &["Bolt", "1", "11.5"],
        &["Bolt", "2", "12"],
        &["Bolt", "3", "11.2"],
        &["Bolt", "4", "12"],
    ]);
    let mut sink = MemorySink::default();

    let report = importer.import_file(Path::new("x.csv"), &mut sink).unwrap();

    // 11.5 / 11.2 向上取整均为 12，第一条即为最高价
    let bolt = report.catalog.get("Bolt").unwrap();
    assert_eq!(bolt.price, 12);
    assert_eq!(bolt.stock, 1.0);
}

#[test]
fn test_reimport_same_records_is_idempotent() {
    let records = vec![
        ValidatedRecord {
            name: "Bolt".to_string(),
            stock: 100.0,
            price: 10,
        },
        ValidatedRecord {
            name: "Bolt".to_string(),
            stock: 50.0,
            price: 12,
        },
        ValidatedRecord {
            name: "Nut".to_string(),
            stock: 1.0,
            price: 1,
        },
    ];

    let mut engine = MergeEngine::new();
    engine.merge_all(records.clone());
    let first = engine.catalog().clone();
    engine.merge_all(records);

    assert_eq!(engine.into_catalog(), first);
}
