// 宝可梦扭蛋生成器库入口
// 开发心理：库负责完整的抽取管线，二进制入口只做参数解析和输出
// 架构：api提供数据源抽象，pokemon实现筛选与抽样，gacha负责编排与渲染

pub mod api;
pub mod core;
pub mod gacha;
pub mod pokemon;

// 重新导出主要类型
pub use crate::api::{CatalogProvider, PokeApiClient};
pub use crate::core::{GachaConfig, GachaError, Result};
pub use crate::gacha::{generate, GachaRequest, ALL_TYPES};
pub use crate::pokemon::GachaEntry;

// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
