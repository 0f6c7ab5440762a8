// 数据源模块 - 目录数据提供方抽象
// 开发心理：通过trait注入数据提供方，管线各阶段不依赖具体HTTP实现，测试可替换
// 设计原则：接口最小化、异步优先、错误直接上抛

pub mod client;
pub mod models;

#[cfg(test)]
pub mod mock;

pub use client::PokeApiClient;
pub use models::{
    ChainLink, EvolutionChain, LocalizedName, NamedResource, PokemonRecord, PokemonSpecies,
    ResourceLink, Sprites, TypeMembership, TypeSlot,
};

use async_trait::async_trait;

use crate::core::error::Result;

// 目录数据提供方接口
// 每个管线阶段都显式接收该接口，不使用全局客户端实例
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    // 按图鉴编号获取宝可梦记录
    async fn get_pokemon_by_id(&self, id: u32) -> Result<PokemonRecord>;

    // 按名称获取宝可梦记录
    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonRecord>;

    // 按物种名称获取物种记录（稀有度与进化元数据）
    async fn get_species_by_name(&self, name: &str) -> Result<PokemonSpecies>;

    // 获取某属性的全部成员
    async fn get_type_members(&self, type_name: &str) -> Result<TypeMembership>;

    // 按编号获取进化链
    async fn get_evolution_chain(&self, chain_id: u32) -> Result<EvolutionChain>;
}

// 按宝可梦名称查询其物种记录
// 先取个体记录再跟随species链接，个体名与物种名不一定相同（如地区形态）
pub async fn species_for_pokemon(
    provider: &dyn CatalogProvider,
    pokemon_name: &str,
) -> Result<PokemonSpecies> {
    let record = provider.get_pokemon_by_name(pokemon_name).await?;
    provider.get_species_by_name(&record.species.name).await
}
