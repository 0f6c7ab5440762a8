// PokeAPI数据模型
// 开发心理：用显式的serde结构体约束外部数据的形状，在边界处完成校验
// 设计原则：数据驱动、字段按需声明、未知字段忽略

use serde::{Deserialize, Serialize};

use crate::core::error::{GachaError, Result};

// 从资源链接中解析编号
// PokeAPI的资源链接以斜杠结尾，编号位于倒数第二段，
// 例如 https://pokeapi.co/api/v2/pokemon-species/25/ -> 25
pub fn parse_id_from_url(url: &str) -> Result<u32> {
    let parts: Vec<&str> = url.split('/').collect();
    if parts.len() < 2 {
        return Err(GachaError::Resolution(format!("资源链接格式无效: {}", url)));
    }
    let raw = parts[parts.len() - 2];
    raw.parse::<u32>()
        .map_err(|_| GachaError::Resolution(format!("资源链接中的编号无效: {}", url)))
}

// 带名称的资源引用（宝可梦、物种、语言等通用形状）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    // 图鉴编号，从资源链接解析
    pub fn catalog_id(&self) -> Result<u32> {
        parse_id_from_url(&self.url)
    }
}

// 匿名资源链接（只有url字段，如物种的进化链引用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

impl ResourceLink {
    pub fn id(&self) -> Result<u32> {
        parse_id_from_url(&self.url)
    }
}

// 宝可梦个体记录（pokemon端点）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    pub species: NamedResource,
    pub sprites: Sprites,
}

// 立绘链接，缺失时为null
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

// 物种记录（pokemon-species端点）- 稀有度与进化元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub name: String,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub hatch_counter: u32,
    pub evolution_chain: ResourceLink,
    pub names: Vec<LocalizedName>,
}

impl PokemonSpecies {
    // 查找指定语言的展示名称
    pub fn display_name(&self, language: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.name.as_str())
    }
}

// 多语言名称条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

// 属性成员列表（type端点）- 某一属性下的全部候选宝可梦
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeMembership {
    pub name: String,
    pub pokemon: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    pub pokemon: NamedResource,
}

// 进化链（evolution-chain端点）
// 根节点不代表任何形态，其子节点才是第一进化阶段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

// 进化树节点，叶子节点即最终进化形态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    pub evolves_to: Vec<ChainLink>,
}
