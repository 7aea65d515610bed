//! 文件系统工具
//!
//! 所有失败都携带出错路径，包装为 `ScaffoldError::Filesystem`

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// 新建目录的权限位（rwxr-xr-x）
pub const DIR_MODE: u32 = 0o755;

/// 创建单个目录（父目录必须已存在）
///
/// 目录已存在时返回 `io::ErrorKind::AlreadyExists`，由调用方决定如何处理
pub fn create_dir(path: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(path)
}

/// 在 `parent` 下按顺序创建多个目录
pub fn create_dirs(parent: &Path, names: &[&str]) -> Result<()> {
    for name in names {
        let path = parent.join(name);
        tracing::debug!(path = %path.display(), "create dir");
        create_dir(&path).map_err(|e| ScaffoldError::filesystem(&path, e))?;
    }
    Ok(())
}

/// 创建空文件
pub fn create_empty_file(path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "create empty file");
    File::create(path)
        .map(drop)
        .map_err(|e| ScaffoldError::filesystem(path, e))
}

/// 写入文件（文件句柄在返回前关闭）
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    tracing::debug!(path = %path.display(), bytes = content.len(), "write file");
    let mut file = File::create(path).map_err(|e| ScaffoldError::filesystem(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::filesystem(path, e))?;
    file.flush().map_err(|e| ScaffoldError::filesystem(path, e))
}

/// 读取文件内容
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| ScaffoldError::filesystem(path, e))
}

/// 递归删除目录
pub fn remove_dir_all(path: &Path) -> std::io::Result<()> {
    tracing::debug!(path = %path.display(), "remove dir");
    fs::remove_dir_all(path)
}
