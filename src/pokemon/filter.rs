// 候选资格过滤
// 开发心理：先做零请求的编号范围过滤，再做单跳的稀有度过滤，
// 最后才做多跳的进化过滤，尽量压缩请求扇出
// 设计原则：并发扇出、全有或全无（任一请求失败则整体失败）

use futures::future::try_join_all;
use log::{debug, info};
use std::collections::HashSet;

use crate::api::models::NamedResource;
use crate::api::{species_for_pokemon, CatalogProvider};
use crate::core::config::GachaConfig;
use crate::core::error::Result;
use crate::pokemon::evolution::resolve_final_evolutions;

// 过滤候选池，保留符合抽取资格的宝可梦
//
// 依次执行：
// 1. 范围过滤 - 丢弃图鉴编号超出上限的条目（越界的是异常形态）
// 2. 稀有度过滤 - 并发获取物种记录，丢弃传说、幻兽和孵化周期超限的条目
// 3. 进化过滤（可选）- 只保留名称出现在整个候选池最终进化名称并集中的条目
//
// 输出顺序不保证与输入一致，但不会引入重复条目。
pub async fn filter_eligible(
    provider: &dyn CatalogProvider,
    pool: &[NamedResource],
    final_evolution_only: bool,
    config: &GachaConfig,
) -> Result<Vec<NamedResource>> {
    // 范围过滤，同时剔除异常形态
    let mut survivors = Vec::new();
    for candidate in pool {
        if candidate.catalog_id()? <= config.rules.last_pokedex_id {
            survivors.push(candidate.clone());
        }
    }
    debug!("范围过滤后剩余 {} / {} 只候选", survivors.len(), pool.len());

    // 稀有度过滤：并发获取全部幸存者的物种记录
    let species = try_join_all(
        survivors
            .iter()
            .map(|candidate| species_for_pokemon(provider, &candidate.name)),
    )
    .await?;

    let excluded: HashSet<String> = species
        .iter()
        .filter(|s| {
            s.is_legendary || s.is_mythical || s.hatch_counter > config.rules.hatch_counter_limit
        })
        .map(|s| s.name.clone())
        .collect();

    survivors.retain(|candidate| !excluded.contains(&candidate.name));
    debug!("稀有度过滤后剩余 {} 只候选", survivors.len());

    if !final_evolution_only {
        return Ok(survivors);
    }

    // 进化过滤：对整个候选池的最终进化名称取并集，
    // 候选只要出现在并集中就保留（不做逐链检查）
    let resolved = try_join_all(
        survivors
            .iter()
            .map(|candidate| resolve_final_evolutions(provider, &candidate.name)),
    )
    .await?;

    let final_names: HashSet<String> = resolved
        .into_iter()
        .flat_map(|result| result.names)
        .collect();

    survivors.retain(|candidate| final_names.contains(&candidate.name));
    info!("进化过滤后剩余 {} 只候选", survivors.len());

    Ok(survivors)
}
