//! 错误类型
//!
//! 脚手架流程中所有可能的失败，统一为 `ScaffoldError`

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// 项目名的最后一段不能作为目录名
    #[error("Invalid project name {name:?}: cannot derive a directory name")]
    InvalidName { name: String },

    /// 目标目录已存在（用户可修正，不做清理）
    #[error("Directory {dir} already exist!")]
    DirectoryExists { dir: String },

    /// 外部工具（go mod init）执行失败
    #[error("`{command}` failed: {message}")]
    ExternalTool { command: String, message: String },

    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 嵌入的模板缺失或无法解码（构建产物有问题）
    #[error("Embedded template {name} unavailable: {message}")]
    Template { name: String, message: String },

    /// go.mod 不是预期的三行格式
    #[error("Unexpected manifest format in {}: {message}", path.display())]
    ManifestFormat { path: PathBuf, message: String },

    /// 创建过程中失败，已尝试删除项目目录
    #[error("{source}")]
    Aborted {
        source: Box<ScaffoldError>,
        dir: String,
        project: String,
        cleanup_error: Option<String>,
    },
}

impl ScaffoldError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// 是否为 "目录已存在"
    pub fn is_directory_exists(&self) -> bool {
        matches!(self, ScaffoldError::DirectoryExists { .. })
    }

    /// 进程退出码
    ///
    /// 所有失败统一为 1，包括原先以异常终止的路径
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// 去掉 `Aborted` 包装后的根本原因
    pub fn root_cause(&self) -> &ScaffoldError {
        match self {
            ScaffoldError::Aborted { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
