// PokeAPI网络客户端
// 开发心理：客户端负责与PokeAPI通信，只做请求、解码和统计
// 设计原则：异步通信、无重试无缓存（失败直接上抛）、统计信息便于观察请求量

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::api::models::{EvolutionChain, PokemonRecord, PokemonSpecies, TypeMembership};
use crate::api::CatalogProvider;
use crate::core::config::ApiConfig;
use crate::core::error::{GachaError, Result};

// PokeAPI客户端
pub struct PokeApiClient {
    client: Client,
    base_url: String,

    // 请求统计
    requests_sent: AtomicU64,
    requests_failed: AtomicU64,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            requests_sent: AtomicU64::new(0),
            requests_failed: AtomicU64::new(0),
        })
    }

    // 获取基础地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // 已发送的请求数
    pub fn request_count(&self) -> u64 {
        self.requests_sent.load(Ordering::Relaxed)
    }

    // 失败的请求数
    pub fn failure_count(&self) -> u64 {
        self.requests_failed.load(Ordering::Relaxed)
    }

    // 发起GET请求并将JSON响应解码为目标类型
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        self.requests_sent.fetch_add(1, Ordering::Relaxed);
        debug!("请求: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            self.requests_failed.fetch_add(1, Ordering::Relaxed);
            GachaError::Provider(format!("请求 {} 失败: {}", url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            self.requests_failed.fetch_add(1, Ordering::Relaxed);
            warn!("请求失败: {} -> HTTP {}", url, status);
            return Err(GachaError::Provider(format!(
                "请求 {} 失败: HTTP {}",
                url, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            self.requests_failed.fetch_add(1, Ordering::Relaxed);
            GachaError::Provider(format!("解码 {} 的响应失败: {}", url, e))
        })
    }
}

#[async_trait]
impl CatalogProvider for PokeApiClient {
    async fn get_pokemon_by_id(&self, id: u32) -> Result<PokemonRecord> {
        self.get_json(&format!("pokemon/{}", id)).await
    }

    async fn get_pokemon_by_name(&self, name: &str) -> Result<PokemonRecord> {
        self.get_json(&format!("pokemon/{}", name)).await
    }

    async fn get_species_by_name(&self, name: &str) -> Result<PokemonSpecies> {
        self.get_json(&format!("pokemon-species/{}", name)).await
    }

    async fn get_type_members(&self, type_name: &str) -> Result<TypeMembership> {
        self.get_json(&format!("type/{}", type_name)).await
    }

    async fn get_evolution_chain(&self, chain_id: u32) -> Result<EvolutionChain> {
        self.get_json(&format!("evolution-chain/{}", chain_id)).await
    }
}
