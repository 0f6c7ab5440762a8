// 进化链解析
// 开发心理：进化链是一棵树，根节点不代表形态，叶子节点即最终进化
// 设计原则：广度优先遍历、空结果回退到自身、解析失败直接上抛

use log::debug;
use std::collections::{HashSet, VecDeque};

use crate::api::{species_for_pokemon, CatalogProvider};
use crate::core::error::Result;

// 最终进化解析结果
// chain_id保留下来，后续若要排除同链候选可以直接使用
#[derive(Debug, Clone)]
pub struct FinalEvolutions {
    pub chain_id: u32,
    pub names: HashSet<String>,
}

// 解析某只宝可梦进化链上的全部最终进化形态名称
//
// 从根节点的直接子节点开始遍历（根节点本身不是形态），没有子节点的
// 节点即最终进化。遍历结果为空时回退为输入宝可梦自身的名称，保证
// 非空输入永远不会得到空集合。
pub async fn resolve_final_evolutions(
    provider: &dyn CatalogProvider,
    pokemon_name: &str,
) -> Result<FinalEvolutions> {
    let species = species_for_pokemon(provider, pokemon_name).await?;
    let chain_id = species.evolution_chain.id()?;
    let chain = provider.get_evolution_chain(chain_id).await?;

    let mut names = HashSet::new();
    let mut queue: VecDeque<_> = chain.chain.evolves_to.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        if node.evolves_to.is_empty() {
            names.insert(node.species.name);
        } else {
            queue.extend(node.evolves_to);
        }
    }

    if names.is_empty() {
        names.insert(pokemon_name.to_string());
    }

    debug!("进化链 #{} 的最终形态: {:?}", chain_id, names);
    Ok(FinalEvolutions { chain_id, names })
}
