// 扭蛋生成模块 - 抽取流程编排
// 开发心理：把"校验 -> 取池 -> 过滤 -> 抽样 -> 补全 -> 渲染"串成一条管线，
// 任一阶段失败则整个请求失败，不输出部分结果
// 设计原则：限定属性走高级扭蛋（只保留最终进化），不限定属性走全图鉴普通扭蛋

pub mod bbcode;

use futures::future::try_join_all;
use lazy_static::lazy_static;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use crate::api::models::NamedResource;
use crate::api::CatalogProvider;
use crate::core::config::GachaConfig;
use crate::core::error::{GachaError, Result};
use crate::gacha::bbcode::{render_envelope, render_set};
use crate::pokemon::filter::filter_eligible;
use crate::pokemon::info::{lookup_display_info, GachaEntry};
use crate::pokemon::sampler::{sample_from_pool, sample_id_range};

// 全部18种属性名
pub const ALL_TYPES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

lazy_static! {
    static ref KNOWN_TYPES: HashSet<&'static str> = ALL_TYPES.iter().copied().collect();
}

// 检查属性名是否合法
pub fn is_known_type(name: &str) -> bool {
    KNOWN_TYPES.contains(name)
}

// 一次扭蛋生成请求
#[derive(Debug, Clone)]
pub struct GachaRequest {
    // 扭蛋组数
    pub num_sets: u32,
    // 每组抽取数量
    pub set_size: usize,
    // 限定属性，空字符串表示不限定
    pub type_filter: String,
    // 是否使用闪光立绘
    pub shiny: bool,
}

impl GachaRequest {
    pub fn validate(&self) -> Result<()> {
        if self.num_sets == 0 {
            return Err(GachaError::InvalidInput("扭蛋组数必须大于0".to_string()));
        }
        if self.set_size == 0 {
            return Err(GachaError::InvalidInput(
                "每组抽取数量必须大于0".to_string(),
            ));
        }
        Ok(())
    }
}

// 生成扭蛋BBCode文本
pub async fn generate(
    provider: &dyn CatalogProvider,
    config: &GachaConfig,
    request: &GachaRequest,
) -> Result<String> {
    request.validate()?;

    let mut rng: StdRng = match config.general.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let trimmed_type = request.type_filter.trim().to_lowercase();
    let mut sets = Vec::with_capacity(request.num_sets as usize);

    if trimmed_type.is_empty() {
        // 普通扭蛋：在全图鉴编号范围内抽取
        info!("生成 {} 组普通扭蛋，每组 {} 只", request.num_sets, request.set_size);
        for _ in 0..request.num_sets {
            let ids = sample_id_range(request.set_size, config.rules.last_pokedex_id, &mut rng)?;
            let records =
                try_join_all(ids.iter().map(|id| provider.get_pokemon_by_id(*id))).await?;
            let entries = enrich(provider, config, request, records.iter().map(|r| r.name.as_str())).await?;
            sets.push(render_set(&entries, false));
        }
    } else if is_known_type(&trimmed_type) {
        // 高级扭蛋：限定属性并只保留最终进化形态
        info!(
            "生成 {} 组 {} 属性高级扭蛋，每组 {} 只",
            request.num_sets, trimmed_type, request.set_size
        );
        for _ in 0..request.num_sets {
            let membership = provider.get_type_members(&trimmed_type).await?;
            let pool: Vec<NamedResource> = membership
                .pokemon
                .into_iter()
                .map(|slot| slot.pokemon)
                .collect();
            debug!("属性 {} 共有 {} 只候选", trimmed_type, pool.len());

            let eligible = filter_eligible(provider, &pool, true, config).await?;
            let selected = sample_from_pool(&eligible, request.set_size, &mut rng)?;
            let entries =
                enrich(provider, config, request, selected.iter().map(|p| p.name.as_str())).await?;
            sets.push(render_set(&entries, true));
        }
    } else {
        return Err(GachaError::InvalidInput(format!(
            "无效的属性 \"{}\"，请输入单一属性名或留空",
            request.type_filter
        )));
    }

    Ok(render_envelope(&sets))
}

// 并发补全一组抽中宝可梦的展示信息，保持抽中顺序
async fn enrich<'a>(
    provider: &dyn CatalogProvider,
    config: &GachaConfig,
    request: &GachaRequest,
    names: impl Iterator<Item = &'a str>,
) -> Result<Vec<GachaEntry>> {
    try_join_all(names.map(|name| {
        lookup_display_info(provider, name, &config.general.language, request.shiny)
    }))
    .await
}
