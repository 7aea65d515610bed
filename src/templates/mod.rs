//! 嵌入资源管理
//!
//! 使用 rust-embed 将生成项目用到的模板编译进二进制

pub mod files;

pub use files::{render_dockerfile, TemplateAssets, GO_VERSION_PLACEHOLDER};
