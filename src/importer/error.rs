// ==========================================
// 供应商目录导入 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 范围: 仅致命错误（整次导入中止）；行级问题走诊断日志
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("файл не найден: {0}")]
    FileNotFound(String),

    #[error("неподдерживаемый формат файла: {0} (поддерживаются .xlsx/.xlsm/.xls/.ods/.csv)")]
    UnsupportedFormat(String),

    #[error("ошибка чтения файла: {0}")]
    FileReadError(String),

    #[error("ошибка разбора Excel: {0}")]
    ExcelParseError(String),

    #[error("ошибка разбора CSV: {0}")]
    CsvParseError(String),

    // ===== 工作表错误 =====
    #[error("активный лист не найден в файле")]
    SheetNotFound,

    #[error("файл пустой")]
    EmptySheet,

    // ===== 输出目标错误 =====
    #[error("не удалось создать лог-файл {path}: {message}")]
    DiagnosticsCreateError { path: PathBuf, message: String },

    #[error("ошибка записи лог-файла: {0}")]
    DiagnosticsWriteError(String),

    #[error("не удалось сохранить результат {path}: {message}")]
    OutputCreateError { path: PathBuf, message: String },

    #[error("ошибка сериализации JSON: {0}")]
    SerializeError(String),

    // ===== 配置错误 =====
    #[error("ошибка чтения конфигурации {path}: {message}")]
    ConfigReadError { path: PathBuf, message: String },

    #[error("некорректное значение конфигурации (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::SerializeError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
