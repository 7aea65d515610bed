use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::*;
use std::env;
use std::path::PathBuf;

use go_scaffold::project::DEFAULT_PROJECT_NAME;
use go_scaffold::utils::init_cli_logger;
use go_scaffold::{CleanupPolicy, GoModInit, ProjectName, ScaffoldError, Scaffolder};

/// Go Project Scaffolder
///
/// 生成 cmd/internal/pkg 布局的 Go 项目，并写入 main.go 与 Dockerfile
#[derive(Parser, Debug)]
#[command(name = "go-scaffold")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Creates a new Go project directory named after the last segment of NAME,\n\
                  runs `go mod init NAME` inside it and lays out cmd/, internal/ and pkg/\n\
                  together with a main.go stub and a Dockerfile pinned to the detected Go version."
)]
struct Cli {
    /// 项目名（模块路径），优先于 --name
    #[arg(value_name = "NAME")]
    project: Option<String>,

    /// 项目名（模块路径）
    #[arg(short, long, default_value = DEFAULT_PROJECT_NAME)]
    name: String,

    /// 创建失败时如何处理已生成的目录
    #[arg(long, value_enum, default_value_t = OnError::Remove)]
    on_error: OnError,

    /// go 可执行文件
    #[arg(long, value_name = "PATH", default_value = "go")]
    go: PathBuf,

    /// 在此目录下创建项目（默认当前目录）
    #[arg(short = 'C', long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OnError {
    /// 删除已创建的项目目录
    Remove,
    /// 保留已生成的部分
    Keep,
}

impl From<OnError> for CleanupPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Remove => CleanupPolicy::Remove,
            OnError::Keep => CleanupPolicy::Keep,
        }
    }
}

impl Cli {
    /// 位置参数覆盖 --name
    fn project_name(&self) -> &str {
        self.project.as_deref().unwrap_or(&self.name)
    }
}

// ═══════════════════════════════════════════════════════════════════
// 错误输出
// ═══════════════════════════════════════════════════════════════════

fn report_error(err: &ScaffoldError) {
    if err.is_directory_exists() {
        println!("{}", err.to_string().red());
        return;
    }

    match err {
        ScaffoldError::Aborted {
            dir,
            project,
            cleanup_error,
            ..
        } => {
            eprintln!("{} {}", "An error has occurred:".red(), err.root_cause());
            eprintln!(
                "Aborting and removing directory: {:?} for project: {:?}",
                dir, project
            );
            if let Some(e) = cleanup_error {
                eprintln!(
                    "{}",
                    format!("Error when trying to remove directory: {}", e).red()
                );
            }
        }
        other => {
            eprintln!("{} {}", "Error:".red(), other);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    let cwd = env::current_dir()?;
    let base_dir = cli.dir.clone().unwrap_or_else(|| cwd.clone());
    let go = GoModInit::new(&cli.go).resolve_from(&cwd);

    let result = ProjectName::parse(cli.project_name()).and_then(|project| {
        let scaffolder = Scaffolder::new(base_dir, go, cli.on_error.into());
        scaffolder.scaffold(&project)
    });

    match result {
        Ok(report) => {
            println!(
                "{}",
                format!(
                    "Directory: {:?} for project: {:?} created!",
                    report.project.dir_name(),
                    report.project.full()
                )
                .green()
            );
            tracing::info!(root = %report.root.display(), go = %report.go_version, "done");
            Ok(())
        }
        Err(err) => {
            report_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
