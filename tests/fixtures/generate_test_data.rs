// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成供应商价格表 CSV 数据集（手工验证与性能观察用）
// 输出: tests/fixtures/datasets/*.csv
// 用法: cargo run --bin generate_test_data
// ==========================================

use csv::Writer;
use std::error::Error;
use std::fs::{self, File};

// CSV 表头（俄文列名）
const CSV_HEADER: &[&str] = &["Название", "Остаток", "Цена за 1 уп."];

const OUTPUT_DIR: &str = "tests/fixtures/datasets";

const PRODUCTS: &[&str] = &[
    "Болт М6", "Болт М8", "Гайка М6", "Гайка М8", "Шайба 6", "Шайба 8", "Саморез 3.5x25",
    "Анкер 10x100", "Дюбель 6x40", "Шуруп 4x50",
];

// 供应商记录（原样写出的文本）
struct SupplierRow {
    name: String,
    stock: String,
    price: String,
}

impl SupplierRow {
    fn to_row(&self) -> [&str; 3] {
        [self.name.as_str(), self.stock.as_str(), self.price.as_str()]
    }
}

// 生成正常记录（名称循环出现，制造重复）
fn generate_normal_row(index: usize) -> SupplierRow {
    SupplierRow {
        name: PRODUCTS[index % PRODUCTS.len()].to_string(),
        stock: format!("{}", (index * 7) % 500),
        price: format!("{:.2}", 5.0 + (index % 37) as f64 * 0.45),
    }
}

fn write_dataset(file_name: &str, rows: &[SupplierRow]) -> Result<(), Box<dyn Error>> {
    let path = format!("{}/{}", OUTPUT_DIR, file_name);
    let file = File::create(&path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record(row.to_row())?;
    }
    wtr.flush()?;

    println!("  ✓ {} ({} 行)", path, rows.len());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all(OUTPUT_DIR)?;

    // 1. 正常数据 (100条，10 种商品反复报价)
    let normal: Vec<SupplierRow> = (0..100).map(generate_normal_row).collect();
    write_dataset("01_normal_data.csv", &normal)?;

    // 2. 大数据集 (10000条)
    let large: Vec<SupplierRow> = (0..10_000).map(generate_normal_row).collect();
    write_dataset("02_large_dataset.csv", &large)?;

    // 3. 数值格式错误
    let invalid = vec![
        SupplierRow {
            name: "Болт М6".to_string(),
            stock: "abc".to_string(),
            price: "3.50".to_string(),
        },
        SupplierRow {
            name: "Гайка М6".to_string(),
            stock: "10".to_string(),
            price: "12,50".to_string(),
        },
        SupplierRow {
            name: "Шайба 6".to_string(),
            stock: String::new(),
            price: "1".to_string(),
        },
    ];
    write_dataset("03_invalid_values.csv", &invalid)?;

    // 4. 混合问题（空名称、同价不同库存、向上取整边界）
    let mixed = vec![
        SupplierRow {
            name: String::new(),
            stock: "1".to_string(),
            price: "1".to_string(),
        },
        SupplierRow {
            name: "Анкер 10x100".to_string(),
            stock: "5".to_string(),
            price: "10.00".to_string(),
        },
        SupplierRow {
            name: "Анкер 10x100".to_string(),
            stock: "9".to_string(),
            price: "10.00".to_string(),
        },
        SupplierRow {
            name: "Дюбель 6x40".to_string(),
            stock: "2".to_string(),
            price: "10.01".to_string(),
        },
    ];
    write_dataset("04_mixed_issues.csv", &mixed)?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}
