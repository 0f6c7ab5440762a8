/*
* 开发心理过程：
* 1. 创建扭蛋生成器配置管理，支持默认值与TOML文件两种来源
* 2. 提供类型安全的配置访问接口
* 3. 配置加载后统一校验，尽早暴露非法取值
* 4. 支持固定随机种子，便于测试和复现抽取结果
*/

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, info, warn};

use crate::core::error::{GachaError, Result};

// 全国图鉴最后一只宝可梦的编号，超出该编号的是异常形态
pub const LAST_POKEDEX_ID: u32 = 1025;

// 孵化周期上限，超过视为稀有排除
pub const HATCH_COUNTER_LIMIT: u32 = 48;

// 每组扭蛋默认抽取数量
pub const POKEMON_PER_SET: usize = 3;

// PokeAPI 基础地址
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GachaConfig {
    pub general: GeneralConfig,
    pub api: ApiConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    // 展示名称使用的语言标签
    pub language: String,
    // 固定随机种子，None表示每次运行随机
    pub seed: Option<u64>,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub last_pokedex_id: u32,
    pub hatch_counter_limit: u32,
    pub pokemon_per_set: usize,
}

impl Default for GachaConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            api: ApiConfig::default(),
            rules: RulesConfig::default(),
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            last_pokedex_id: LAST_POKEDEX_ID,
            hatch_counter_limit: HATCH_COUNTER_LIMIT,
            pokemon_per_set: POKEMON_PER_SET,
        }
    }
}

impl GachaConfig {
    // 从TOML文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("加载配置文件: {}", path.display());

        let text = fs::read_to_string(path)?;
        let config: GachaConfig = toml::from_str(&text)?;
        config.validate()?;

        debug!("配置加载完成: {:?}", config);
        Ok(config)
    }

    // 有路径则从文件加载，否则使用默认配置
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    // 校验配置取值
    pub fn validate(&self) -> Result<()> {
        if self.general.language.trim().is_empty() {
            return Err(GachaError::Config("语言标签不能为空".to_string()));
        }
        if self.rules.last_pokedex_id == 0 {
            return Err(GachaError::Config("图鉴编号上限必须大于0".to_string()));
        }
        if self.rules.pokemon_per_set == 0 {
            return Err(GachaError::Config("每组抽取数量必须大于0".to_string()));
        }
        if !self.api.base_url.starts_with("http") {
            return Err(GachaError::Config(format!(
                "API地址无效: {}",
                self.api.base_url
            )));
        }
        if self.api.timeout_secs == 0 {
            warn!("请求超时设置为0，将使用reqwest默认行为");
        }
        Ok(())
    }
}
