//! 项目目录布局
//!
//! 生成的目录结构是固定的：
//!
//! ```text
//! <dir>/
//! ├── .env
//! ├── Dockerfile
//! ├── go.mod
//! ├── cmd/app/main.go
//! ├── internal/
//! │   ├── app/{delivery,repository,usecase}/
//! │   ├── domain/
//! │   └── infrastructure/{database,http}/
//! └── pkg/
//! ```

use std::path::{Path, PathBuf};

pub const TOP_LEVEL_DIRS: [&str; 3] = ["cmd", "internal", "pkg"];
pub const INTERNAL_DIRS: [&str; 3] = ["app", "domain", "infrastructure"];
pub const INTERNAL_APP_DIRS: [&str; 3] = ["delivery", "repository", "usecase"];
pub const INFRASTRUCTURE_DIRS: [&str; 2] = ["database", "http"];

pub const CMD_APP_DIR: &str = "app";
pub const ENV_FILE: &str = ".env";
pub const MAIN_GO_FILE: &str = "main.go";
pub const DOCKERFILE: &str = "Dockerfile";
pub const GO_MOD_FILE: &str = "go.mod";

/// 项目内各路径
///
/// 所有步骤都通过它拿绝对路径，不依赖进程当前目录
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn go_mod(&self) -> PathBuf {
        self.root.join(GO_MOD_FILE)
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join(ENV_FILE)
    }

    pub fn dockerfile(&self) -> PathBuf {
        self.root.join(DOCKERFILE)
    }

    pub fn cmd(&self) -> PathBuf {
        self.root.join("cmd")
    }

    pub fn cmd_app(&self) -> PathBuf {
        self.cmd().join(CMD_APP_DIR)
    }

    pub fn main_go(&self) -> PathBuf {
        self.cmd_app().join(MAIN_GO_FILE)
    }

    pub fn internal(&self) -> PathBuf {
        self.root.join("internal")
    }

    pub fn internal_app(&self) -> PathBuf {
        self.internal().join("app")
    }

    pub fn infrastructure(&self) -> PathBuf {
        self.internal().join("infrastructure")
    }
}

/// 骨架中所有条目（相对路径，`/` 分隔，目录以 `/` 结尾）
///
/// 不含 go.mod，它由外部工具生成
pub fn skeleton_entries() -> Vec<String> {
    let mut entries: Vec<String> = TOP_LEVEL_DIRS.iter().map(|d| format!("{d}/")).collect();

    entries.push(ENV_FILE.to_string());
    entries.push(DOCKERFILE.to_string());
    entries.push(format!("cmd/{CMD_APP_DIR}/"));
    entries.push(format!("cmd/{CMD_APP_DIR}/{MAIN_GO_FILE}"));

    for dir in INTERNAL_DIRS {
        entries.push(format!("internal/{dir}/"));
    }
    for dir in INTERNAL_APP_DIRS {
        entries.push(format!("internal/app/{dir}/"));
    }
    for dir in INFRASTRUCTURE_DIRS {
        entries.push(format!("internal/infrastructure/{dir}/"));
    }

    entries
}
