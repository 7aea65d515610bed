//! 项目名解析

use std::fmt;

use crate::error::{Result, ScaffoldError};

/// 默认项目名
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// 项目名
///
/// `full` 原样作为 Go 模块路径；`dir_name` 是按 `/` 切分后的最后一段，
/// 作为本地目录名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    full: String,
    dir_name: String,
}

impl ProjectName {
    /// 解析项目名
    ///
    /// 只做路径切分；最后一段为空、`.` 或 `..` 时拒绝
    pub fn parse(name: &str) -> Result<Self> {
        let dir_name = name.rsplit('/').next().unwrap_or(name);

        if dir_name.is_empty() || dir_name == "." || dir_name == ".." {
            return Err(ScaffoldError::InvalidName {
                name: name.to_string(),
            });
        }

        Ok(Self {
            full: name.to_string(),
            dir_name: dir_name.to_string(),
        })
    }

    /// 完整模块路径
    pub fn full(&self) -> &str {
        &self.full
    }

    /// 本地目录名
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let name = ProjectName::parse("demo").unwrap();
        assert_eq!(name.full(), "demo");
        assert_eq!(name.dir_name(), "demo");
    }

    #[test]
    fn test_module_path_uses_last_segment() {
        let name = ProjectName::parse("github.com/user/proj").unwrap();
        assert_eq!(name.full(), "github.com/user/proj");
        assert_eq!(name.dir_name(), "proj");
        assert_eq!(name.to_string(), "github.com/user/proj");
    }

    #[test]
    fn test_default_name() {
        let name = ProjectName::parse(DEFAULT_PROJECT_NAME).unwrap();
        assert_eq!(name.dir_name(), "my-project");
    }

    #[test]
    fn test_rejects_empty_last_segment() {
        for bad in ["", "github.com/user/", "a/.", "a/.."] {
            let err = ProjectName::parse(bad).unwrap_err();
            assert!(matches!(err, ScaffoldError::InvalidName { .. }), "{bad}");
        }
    }
}
