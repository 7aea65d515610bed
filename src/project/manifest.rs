//! go.mod 解析
//!
//! `go mod init` 生成的文件固定为三行：
//!
//! ```text
//! module <path>
//!
//! go <version>
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::utils::read_file;

lazy_static! {
    // 1.22 / 1.22.4 / 1.23rc1
    static ref GO_VERSION: Regex = Regex::new(r"^\d+\.\d+(\.\d+)?([a-z]+\d+)?$").unwrap();
}

const MODULE_PREFIX: &str = "module ";
const GO_PREFIX: &str = "go ";

/// 读取 go.mod 并提取 Go 版本
pub fn read_go_version(path: &Path) -> Result<String> {
    let content = read_file(path)?;
    parse_go_version(&content).map_err(|message| ScaffoldError::ManifestFormat {
        path: path.to_path_buf(),
        message,
    })
}

/// 从 go.mod 内容中提取 Go 版本
///
/// 格式不符时返回错误描述，不做猜测
pub fn parse_go_version(content: &str) -> std::result::Result<String, String> {
    let mut lines = content.lines();

    match lines.next() {
        Some(line) if line.starts_with(MODULE_PREFIX) => {}
        Some(line) => return Err(format!("line 1 should declare the module, got {line:?}")),
        None => return Err("file is empty".to_string()),
    }

    match lines.next() {
        Some(line) if line.trim().is_empty() => {}
        Some(line) => return Err(format!("line 2 should be blank, got {line:?}")),
        None => return Err("missing go directive".to_string()),
    }

    let line = lines
        .next()
        .ok_or_else(|| "missing go directive".to_string())?
        .trim_end();

    let version = line
        .strip_prefix(GO_PREFIX)
        .ok_or_else(|| format!("line 3 should be the go directive, got {line:?}"))?
        .trim();

    if !GO_VERSION.is_match(version) {
        return Err(format!("invalid go version {version:?}"));
    }

    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_go_version() {
        let content = "module github.com/user/proj\n\ngo 1.22.4\n";
        assert_eq!(parse_go_version(content).unwrap(), "1.22.4");
    }

    #[test]
    fn test_parse_short_and_prerelease_versions() {
        assert_eq!(parse_go_version("module a\n\ngo 1.21\n").unwrap(), "1.21");
        assert_eq!(
            parse_go_version("module a\n\ngo 1.23rc1\n").unwrap(),
            "1.23rc1"
        );
    }

    #[test]
    fn test_ignores_trailing_lines_and_crlf() {
        let content = "module a\r\n\r\ngo 1.22.0\r\n\r\ntoolchain go1.22.4\r\n";
        assert_eq!(parse_go_version(content).unwrap(), "1.22.0");
    }

    #[test]
    fn test_rejects_unexpected_shapes() {
        let cases = [
            "",
            "module a\n",
            "module a\ngo 1.22\n",
            "go 1.22\n\nmodule a\n",
            "module a\n\ntoolchain go1.22.4\n",
            "module a\n\ngo \n",
            "module a\n\ngo latest\n",
        ];
        for content in cases {
            assert!(parse_go_version(content).is_err(), "{content:?}");
        }
    }

    #[test]
    fn test_read_go_version_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("go.mod");
        std::fs::write(&path, "module demo\n\ngo 1.22.4\n").unwrap();

        assert_eq!(read_go_version(&path).unwrap(), "1.22.4");
    }

    #[test]
    fn test_read_go_version_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("go.mod");

        let err = read_go_version(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));

        std::fs::write(&path, "garbage").unwrap();
        let err = read_go_version(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestFormat { .. }));
    }
}
