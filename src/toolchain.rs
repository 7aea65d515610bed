//! Go 工具链调用
//!
//! `go mod init` 是流程中唯一的外部进程。通过 `ModuleInitializer`
//! trait 抽象出来，测试时可以替换成不依赖 go 的实现

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, ScaffoldError};

/// 模块初始化器：在 `dir` 下生成 go.mod
pub trait ModuleInitializer {
    fn init(&self, module: &str, dir: &Path) -> Result<()>;
}

/// 调用 `<go> mod init <module>`
#[derive(Debug, Clone)]
pub struct GoModInit {
    program: PathBuf,
}

impl GoModInit {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 相对路径（如 `./bin/go`）以 `base` 为准转成绝对路径
    ///
    /// 子进程在项目目录中启动，相对路径会被错误地解析到那里；
    /// 单独的程序名（如 `go`）仍然走 PATH 查找
    pub fn resolve_from(mut self, base: &Path) -> Self {
        if self.program.is_relative() && self.program.components().count() > 1 {
            self.program = base.join(&self.program);
        }
        self
    }

    fn command_line(&self, module: &str) -> String {
        format!("{} mod init {}", self.program.display(), module)
    }
}

impl Default for GoModInit {
    fn default() -> Self {
        Self::new("go")
    }
}

impl ModuleInitializer for GoModInit {
    fn init(&self, module: &str, dir: &Path) -> Result<()> {
        let command = self.command_line(module);
        tracing::debug!(command = %command, dir = %dir.display(), "running module init");

        let output = Command::new(&self.program)
            .args(["mod", "init", module])
            .current_dir(dir)
            .output()
            .map_err(|e| ScaffoldError::ExternalTool {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            return Err(ScaffoldError::ExternalTool { command, message });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_program_is_go() {
        assert_eq!(GoModInit::default().program, Path::new("go"));
    }

    #[test]
    fn test_resolve_from_relative_path() {
        let init = GoModInit::new("./bin/go").resolve_from(Path::new("/work"));
        assert_eq!(init.program, Path::new("/work/./bin/go"));

        let init = GoModInit::new("tools/go").resolve_from(Path::new("/work"));
        assert_eq!(init.program, Path::new("/work/tools/go"));
    }

    #[test]
    fn test_resolve_from_keeps_bare_and_absolute() {
        let init = GoModInit::new("go").resolve_from(Path::new("/work"));
        assert_eq!(init.program, Path::new("go"));

        let init = GoModInit::new("/usr/local/go/bin/go").resolve_from(Path::new("/work"));
        assert_eq!(init.program, Path::new("/usr/local/go/bin/go"));
    }

    #[test]
    fn test_missing_program_is_external_tool_error() {
        let temp = TempDir::new().unwrap();
        let init = GoModInit::new(temp.path().join("no-such-go"));

        let err = init.init("example.com/demo", temp.path()).unwrap_err();
        match err {
            ScaffoldError::ExternalTool { command, .. } => {
                assert!(command.ends_with("mod init example.com/demo"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_target_dir_with_full_module_name() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("fake-go");
        std::fs::write(
            &script,
            "#!/bin/sh\nprintf 'module %s\\n\\ngo 1.22.4\\n' \"$3\" > go.mod\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let work = temp.path().join("proj");
        std::fs::create_dir(&work).unwrap();

        GoModInit::new(&script)
            .init("github.com/user/proj", &work)
            .unwrap();

        let content = std::fs::read_to_string(work.join("go.mod")).unwrap();
        assert!(content.starts_with("module github.com/user/proj\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_carries_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("fake-go");
        std::fs::write(&script, "#!/bin/sh\necho 'go: malformed module path' >&2\nexit 1\n")
            .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = GoModInit::new(&script)
            .init("bad name", temp.path())
            .unwrap_err();
        assert!(err.to_string().contains("malformed module path"));
    }
}
