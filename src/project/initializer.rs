//! 项目初始化
//!
//! 按固定顺序创建项目：根目录 → go mod init → 读取 Go 版本 → 目录骨架 →
//! main.go → Dockerfile。任一步失败即终止，根目录创建之后的失败按
//! `CleanupPolicy` 处理

use std::io;
use std::path::{Path, PathBuf};

use super::layout::{
    ProjectPaths, CMD_APP_DIR, INFRASTRUCTURE_DIRS, INTERNAL_APP_DIRS, INTERNAL_DIRS,
    TOP_LEVEL_DIRS,
};
use super::manifest::read_go_version;
use super::name::ProjectName;
use crate::error::{Result, ScaffoldError};
use crate::templates::files::{DOCKERFILE, MAIN_GO};
use crate::templates::{render_dockerfile, TemplateAssets};
use crate::toolchain::ModuleInitializer;
use crate::utils::{create_dir, create_dirs, create_empty_file, remove_dir_all, write_file};

/// 失败时如何处理已创建的根目录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPolicy {
    /// 删除整个根目录
    #[default]
    Remove,
    /// 保留已生成的部分
    Keep,
}

/// 成功结果
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub project: ProjectName,
    pub root: PathBuf,
    pub go_version: String,
}

/// 项目脚手架
pub struct Scaffolder<I> {
    base_dir: PathBuf,
    initializer: I,
    policy: CleanupPolicy,
}

impl<I: ModuleInitializer> Scaffolder<I> {
    /// `base_dir` 是项目目录的父目录
    pub fn new(base_dir: impl Into<PathBuf>, initializer: I, policy: CleanupPolicy) -> Self {
        Self {
            base_dir: base_dir.into(),
            initializer,
            policy,
        }
    }

    /// 创建项目
    pub fn scaffold(&self, project: &ProjectName) -> Result<ScaffoldReport> {
        let root = self.base_dir.join(project.dir_name());

        match create_dir(&root) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ScaffoldError::DirectoryExists {
                    dir: project.dir_name().to_string(),
                });
            }
            Err(e) => return Err(ScaffoldError::filesystem(&root, e)),
        }
        tracing::info!(root = %root.display(), project = %project, "created project root");

        let paths = ProjectPaths::new(&root);
        match self.populate(project, &paths) {
            Ok(go_version) => Ok(ScaffoldReport {
                project: project.clone(),
                root,
                go_version,
            }),
            Err(err) => Err(self.handle_failure(err, project, &root)),
        }
    }

    /// 根目录之后的所有步骤，返回检测到的 Go 版本
    fn populate(&self, project: &ProjectName, paths: &ProjectPaths) -> Result<String> {
        self.initializer.init(project.full(), paths.root())?;

        let go_version = read_go_version(&paths.go_mod())?;
        tracing::debug!(go_version = %go_version, "detected go version");

        create_dirs(paths.root(), &TOP_LEVEL_DIRS)?;
        create_empty_file(&paths.env_file())?;

        create_dirs(&paths.cmd(), &[CMD_APP_DIR])?;
        let main_go = TemplateAssets::get_main_go().map_err(template_error(MAIN_GO))?;
        write_file(&paths.main_go(), &main_go)?;

        create_dirs(&paths.internal(), &INTERNAL_DIRS)?;
        create_dirs(&paths.internal_app(), &INTERNAL_APP_DIRS)?;
        create_dirs(&paths.infrastructure(), &INFRASTRUCTURE_DIRS)?;

        let dockerfile =
            render_dockerfile(&go_version).map_err(template_error(DOCKERFILE))?;
        write_file(&paths.dockerfile(), &dockerfile)?;

        Ok(go_version)
    }

    fn handle_failure(
        &self,
        err: ScaffoldError,
        project: &ProjectName,
        root: &Path,
    ) -> ScaffoldError {
        tracing::debug!(error = %err, policy = ?self.policy, "scaffolding failed");

        match self.policy {
            CleanupPolicy::Keep => err,
            CleanupPolicy::Remove => {
                let cleanup_error = remove_dir_all(root).err().map(|e| e.to_string());
                if let Some(e) = &cleanup_error {
                    tracing::warn!(root = %root.display(), error = %e, "cleanup failed");
                }

                ScaffoldError::Aborted {
                    source: Box::new(err),
                    dir: project.dir_name().to_string(),
                    project: project.full().to_string(),
                    cleanup_error,
                }
            }
        }
    }
}

fn template_error(name: &'static str) -> impl FnOnce(anyhow::Error) -> ScaffoldError {
    move |e| ScaffoldError::Template {
        name: name.to_string(),
        message: e.to_string(),
    }
}
