// 宝可梦抽取管线模块 - 核心筛选与抽样逻辑
// 开发心理：每个阶段只做一件事：解析进化链、过滤资格、无放回抽样、补全展示信息
// 设计原则：纯逻辑与I/O分离、数据提供方显式注入

pub mod evolution;
pub mod filter;
pub mod info;
pub mod sampler;

// 重新导出主要类型
pub use evolution::{resolve_final_evolutions, FinalEvolutions};
pub use filter::filter_eligible;
pub use info::{lookup_display_info, GachaEntry};
pub use sampler::{sample_from_pool, sample_id_range};
