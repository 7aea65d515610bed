// Go Project Scaffolder - Library Root
//
// 按固定布局生成 Go 项目：go.mod、cmd/internal/pkg 骨架、main.go 和 Dockerfile

pub mod error;
pub mod project;
pub mod templates;
pub mod toolchain;
pub mod utils;

// 重新导出常用类型
pub use error::{Result, ScaffoldError};
pub use project::{CleanupPolicy, ProjectName, ScaffoldReport, Scaffolder};
pub use toolchain::{GoModInit, ModuleInitializer};
