//! 模板文件嵌入
//!
//! main.go 与 Dockerfile 在编译时嵌入二进制

use anyhow::{anyhow, Result};
use rust_embed::RustEmbed;

/// Dockerfile 中的 Go 版本占位符
pub const GO_VERSION_PLACEHOLDER: &str = "GO_VERSION";

pub const MAIN_GO: &str = "main.go";
pub const DOCKERFILE: &str = "Dockerfile";

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/templates/"]
pub struct TemplateAssets;

impl TemplateAssets {
    /// 获取 main.go 模板
    pub fn get_main_go() -> Result<String> {
        Self::get_file(MAIN_GO)
    }

    /// 获取 Dockerfile 模板（未替换版本号）
    pub fn get_dockerfile() -> Result<String> {
        Self::get_file(DOCKERFILE)
    }

    /// 获取指定模板文件
    fn get_file(filename: &str) -> Result<String> {
        let file =
            Self::get(filename).ok_or_else(|| anyhow!("Template '{}' not found", filename))?;

        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| anyhow!("Failed to decode template '{}': {}", filename, e))?;

        Ok(content.to_string())
    }

    /// 列出所有可用的模板文件
    pub fn list_templates() -> Vec<String> {
        Self::iter().map(|path| path.as_ref().to_string()).collect()
    }

    /// 检查模板文件是否存在
    pub fn template_exists(filename: &str) -> bool {
        Self::get(filename).is_some()
    }
}

/// 渲染 Dockerfile：只替换第一个占位符
pub fn render_dockerfile(go_version: &str) -> Result<String> {
    let template = TemplateAssets::get_dockerfile()?;
    Ok(template.replacen(GO_VERSION_PLACEHOLDER, go_version, 1))
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
