// 核心模块 - 基础设施
// 开发心理：建立稳固的基础架构，为抽取管线提供错误处理与配置管理

pub mod config;
pub mod error;

// 重新导出核心类型
pub use config::{GachaConfig, LAST_POKEDEX_ID};
pub use error::{ErrorSeverity, GachaError, Result};
