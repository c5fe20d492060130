// ==========================================
// 供应商目录导入 - 命令行入口
// ==========================================
// 用法: supplier-catalog <INPUT> [-o result.json] [--log log.txt] [-c config.json]
// 退出码: 0 成功；1 致命错误（不产生输出文件）
// ==========================================

use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use supplier_catalog::exporter::write_preview;
use supplier_catalog::{logging, ImportApi, ImportConfig};

#[derive(Debug, Parser)]
#[command(name = "supplier-catalog", version, about = supplier_catalog::APP_NAME)]
struct Cli {
    /// 供应商表格（.xlsx/.xlsm/.xlsb/.xls/.ods/.csv）
    input: PathBuf,

    /// JSON 结果路径
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 诊断日志路径
    #[arg(long = "log")]
    diagnostics: Option<PathBuf>,

    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 控制台预览条数（0 = 不预览）
    #[arg(long)]
    preview: Option<usize>,

    /// 输出 debug 级别日志
    #[arg(short, long)]
    verbose: bool,

    /// 以 JSON 格式输出运行日志
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    /// 配置文件 + 命令行覆写
    fn load_config(&self) -> anyhow::Result<ImportConfig> {
        let mut config = match &self.config {
            Some(path) => ImportConfig::from_json_file(path)
                .with_context(|| format!("конфигурация {}", path.display()))?,
            None => ImportConfig::default(),
        };

        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(diagnostics) = &self.diagnostics {
            config.diagnostics_path = diagnostics.clone();
        }
        if let Some(preview) = self.preview {
            config.preview_limit = preview;
        }

        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let preview_limit = config.preview_limit;

    let api = ImportApi::new(config);
    let response = api.import_supplier_file(&cli.input)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "✅ Обработано строк: {}", response.summary.accepted_rows)?;
    writeln!(out, "⚠️ Строк с ошибками: {}", response.summary.rejected_rows)?;
    writeln!(out, "Уникальных товаров: {}", response.summary.distinct_products)?;
    write_preview(&mut out, &response.entries, preview_limit)?;
    writeln!(
        out,
        "Результаты сохранены в {}",
        response.output_path.display()
    )?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(if cli.verbose { "debug" } else { "info" }, cli.json_logs);
    tracing::info!(version = supplier_catalog::VERSION, input = %cli.input.display(), "启动导入");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "导入失败");
            eprintln!("Ошибка при парсинге: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
