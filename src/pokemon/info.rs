// 展示信息补全
// 开发心理：抽中之后才按需补全展示名称与立绘链接，每只一次往返
// 设计原则：语言标签可配置、闪光立绘作为可选项

use log::debug;
use serde::{Deserialize, Serialize};

use crate::api::{species_for_pokemon, CatalogProvider};
use crate::core::error::{GachaError, Result};

// 渲染用条目：展示名称 + 立绘链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GachaEntry {
    pub display_name: String,
    pub sprite_url: Option<String>,
}

// 查询宝可梦的展示名称与立绘链接
//
// 展示名称取自物种记录中指定语言的条目，缺失时视为响应不完整；
// shiny为true时选用闪光立绘
pub async fn lookup_display_info(
    provider: &dyn CatalogProvider,
    pokemon_name: &str,
    language: &str,
    shiny: bool,
) -> Result<GachaEntry> {
    let species = species_for_pokemon(provider, pokemon_name).await?;
    let display_name = species
        .display_name(language)
        .map(str::to_string)
        .ok_or_else(|| {
            GachaError::Parse(format!(
                "物种 {} 缺少语言 {} 的展示名称",
                species.name, language
            ))
        })?;

    let record = provider.get_pokemon_by_name(pokemon_name).await?;
    let sprite_url = if shiny {
        record.sprites.front_shiny
    } else {
        record.sprites.front_default
    };

    debug!("补全展示信息: {} -> {}", pokemon_name, display_name);
    Ok(GachaEntry {
        display_name,
        sprite_url,
    })
}
