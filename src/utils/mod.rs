//! 工具模块
//!
//! 文件系统与日志相关的通用函数

pub mod fs;
pub mod logger;

// 重导出
pub use fs::*;
pub use logger::init_cli_logger;
