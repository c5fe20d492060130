// ==========================================
// 供应商目录导入 - 导入配置
// ==========================================
// 职责: 定义导入参数及默认值，支持从 JSON 文件加载
// 红线: 不包含导入逻辑
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ==========================================
// 配置键（用于错误信息与文档）
// ==========================================
pub mod config_keys {
    pub const NAME_COLUMN: &str = "columns.name";
    pub const STOCK_COLUMN: &str = "columns.stock";
    pub const PRICE_COLUMN: &str = "columns.price";
    pub const DIAGNOSTICS_PATH: &str = "diagnostics_path";
    pub const OUTPUT_PATH: &str = "output_path";
    pub const PREVIEW_LIMIT: &str = "preview_limit";
}

/// 默认表头名称
pub const DEFAULT_NAME_COLUMN: &str = "Название";
pub const DEFAULT_STOCK_COLUMN: &str = "Остаток";
pub const DEFAULT_PRICE_COLUMN: &str = "Цена за 1 уп.";

// ==========================================
// ColumnNames - 三个必填列的表头名称
// ==========================================
// 匹配规则: 精确匹配，区分大小写
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub name: String,
    pub stock: String,
    pub price: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_COLUMN.to_string(),
            stock: DEFAULT_STOCK_COLUMN.to_string(),
            price: DEFAULT_PRICE_COLUMN.to_string(),
        }
    }
}

// ==========================================
// ImportConfig - 导入配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub columns: ColumnNames,       // 必填列表头
    pub diagnostics_path: PathBuf,  // 诊断日志路径
    pub output_path: PathBuf,       // JSON 结果路径
    pub preview_limit: usize,       // 控制台预览条数（0 = 不预览）
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            diagnostics_path: PathBuf::from("log.txt"),
            output_path: PathBuf::from("result.json"),
            preview_limit: 5,
        }
    }
}

impl ImportConfig {
    /// 从 JSON 文件加载配置（缺省字段取默认值）
    ///
    /// # 返回
    /// - Ok(ImportConfig): 已通过 validate() 的配置
    /// - Err: 文件读取失败 / JSON 格式错误 / 配置值非法
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: ImportConfig =
            serde_json::from_str(&raw).map_err(|e| ImportError::ConfigReadError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// 校验配置值
    ///
    /// - 三个列名必须非空且互不相同
    /// - 输出路径不能与诊断日志路径相同
    pub fn validate(&self) -> ImportResult<()> {
        let columns = [
            (config_keys::NAME_COLUMN, &self.columns.name),
            (config_keys::STOCK_COLUMN, &self.columns.stock),
            (config_keys::PRICE_COLUMN, &self.columns.price),
        ];

        for (idx, (key, value)) in columns.iter().enumerate() {
            if value.is_empty() {
                return Err(ImportError::ConfigValueError {
                    key: key.to_string(),
                    value: String::new(),
                    message: "имя колонки не может быть пустым".to_string(),
                });
            }
            if columns[..idx].iter().any(|(_, other)| other == value) {
                return Err(ImportError::ConfigValueError {
                    key: key.to_string(),
                    value: value.to_string(),
                    message: "имя колонки повторяется".to_string(),
                });
            }
        }

        if self.output_path == self.diagnostics_path {
            return Err(ImportError::ConfigValueError {
                key: config_keys::OUTPUT_PATH.to_string(),
                value: self.output_path.display().to_string(),
                message: format!("совпадает с {}", config_keys::DIAGNOSTICS_PATH),
            });
        }

        Ok(())
    }
}
