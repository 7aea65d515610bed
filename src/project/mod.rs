//! 项目管理模块
//!
//! 项目名解析、目录布局、go.mod 解析与脚手架流程

pub mod initializer;
pub mod layout;
pub mod manifest;
pub mod name;

// 重导出
pub use initializer::{CleanupPolicy, ScaffoldReport, Scaffolder};
pub use layout::ProjectPaths;
pub use manifest::{parse_go_version, read_go_version};
pub use name::{ProjectName, DEFAULT_PROJECT_NAME};
