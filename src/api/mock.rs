// 测试用目录数据提供方
// 开发心理：用内存HashMap模拟PokeAPI，未注册的资源返回Provider错误，
// 这样也能顺便模拟"数据源失败"的场景

use async_trait::async_trait;
use std::collections::HashMap;

use crate::api::models::{
    ChainLink, EvolutionChain, LocalizedName, NamedResource, PokemonRecord, PokemonSpecies,
    ResourceLink, Sprites, TypeMembership, TypeSlot,
};
use crate::api::CatalogProvider;
use crate::core::error::{GachaError, Result};

pub fn pokemon_url(id: u32) -> String {
    format!("https://pokeapi.co/api/v2/pokemon/{}/", id)
}

pub fn species_url(id: u32) -> String {
    format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id)
}

pub fn chain_url(id: u32) -> String {
    format!("https://pokeapi.co/api/v2/evolution-chain/{}/", id)
}

// 测试中en展示名约定为首字母大写
pub fn display_name_of(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// 构造进化树节点
pub fn link(name: &str, id: u32, evolves_to: Vec<ChainLink>) -> ChainLink {
    ChainLink {
        species: NamedResource::new(name, species_url(id)),
        evolves_to,
    }
}

#[derive(Default)]
pub struct MockProvider {
    pub pokemon: HashMap<String, PokemonRecord>,
    pub pokemon_ids: HashMap<u32, String>,
    pub species: HashMap<String, PokemonSpecies>,
    pub types: HashMap<String, TypeMembership>,
    pub chains: HashMap<u32, EvolutionChain>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    // 注册一只普通宝可梦（非传说、非幻兽、孵化周期20）
    pub fn add_pokemon(&mut self, name: &str, id: u32) -> &mut Self {
        self.add_pokemon_full(name, id, false, false, 20, id)
    }

    // 注册宝可梦个体记录和对应物种记录
    pub fn add_pokemon_full(
        &mut self,
        name: &str,
        id: u32,
        is_legendary: bool,
        is_mythical: bool,
        hatch_counter: u32,
        chain_id: u32,
    ) -> &mut Self {
        let record = PokemonRecord {
            id,
            name: name.to_string(),
            species: NamedResource::new(name, species_url(id)),
            sprites: Sprites {
                front_default: Some(format!("https://sprites.example/{}.png", name)),
                front_shiny: Some(format!("https://sprites.example/{}-shiny.png", name)),
            },
        };
        let species = PokemonSpecies {
            name: name.to_string(),
            is_legendary,
            is_mythical,
            hatch_counter,
            evolution_chain: ResourceLink {
                url: chain_url(chain_id),
            },
            names: vec![LocalizedName {
                name: display_name_of(name),
                language: NamedResource::new("en", "https://pokeapi.co/api/v2/language/9/"),
            }],
        };

        self.pokemon_ids.insert(id, name.to_string());
        self.pokemon.insert(name.to_string(), record);
        self.species.insert(name.to_string(), species);
        self
    }

    // 注册属性成员列表，成员不要求已注册（用于构造越界候选）
    pub fn add_type(&mut self, type_name: &str, members: &[(&str, u32)]) -> &mut Self {
        let membership = TypeMembership {
            name: type_name.to_string(),
            pokemon: members
                .iter()
                .map(|(name, id)| TypeSlot {
                    pokemon: NamedResource::new(*name, pokemon_url(*id)),
                })
                .collect(),
        };
        self.types.insert(type_name.to_string(), membership);
        self
    }

    // 注册进化链
    pub fn add_chain(&mut self, chain_id: u32, root: ChainLink) -> &mut Self {
        self.chains.insert(
            chain_id,
            EvolutionChain {
                id: chain_id,
                chain: root,
            },
        );
        self
    }
}

#[async_trait]
impl CatalogProvider for MockProvider {
    async fn get_pokemon_by_id(&self, id: u32) -> Result<PokemonRecord> {
        let name = self
            .pokemon_ids
            .get(&id)
            .ok_or_else(|| GachaError::Provider(format!("未找到宝可梦: #{}", id)))?;
        self.get_pokemon_by_name(name).await
    }

    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonRecord> {
        self.pokemon
            .get(name)
            .cloned()
            .ok_or_else(|| GachaError::Provider(format!("未找到宝可梦: {}", name)))
    }

    async fn get_species_by_name(&self, name: &str) -> Result<PokemonSpecies> {
        self.species
            .get(name)
            .cloned()
            .ok_or_else(|| GachaError::Provider(format!("未找到物种: {}", name)))
    }

    async fn get_type_members(&self, type_name: &str) -> Result<TypeMembership> {
        self.types
            .get(type_name)
            .cloned()
            .ok_or_else(|| GachaError::Provider(format!("未找到属性: {}", type_name)))
    }

    async fn get_evolution_chain(&self, chain_id: u32) -> Result<EvolutionChain> {
        self.chains
            .get(&chain_id)
            .cloned()
            .ok_or_else(|| GachaError::Provider(format!("未找到进化链: #{}", chain_id)))
    }
}
