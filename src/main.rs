// 宝可梦扭蛋生成器主程序入口
// 开发心理：简洁的启动流程，参数解析交给clap，生成逻辑全部在库中
// 错误统一打印到stderr并以非零码退出，用户输入错误与运行错误区分退出码

use clap::Parser;
use log::{debug, error, info};
use std::path::PathBuf;

use pokegacha::{generate, GachaConfig, GachaRequest, PokeApiClient, Result};

#[derive(Parser, Debug)]
#[command(name = "pokegacha", version, about = "随机宝可梦扭蛋BBCode生成器")]
struct Cli {
    /// 扭蛋组数
    #[arg(long, default_value_t = 1)]
    sets: u32,

    /// 每组抽取数量，默认取配置中的数值
    #[arg(long)]
    size: Option<usize>,

    /// 限定属性（如 fire），留空表示全图鉴抽取
    #[arg(long = "type", default_value = "")]
    type_filter: String,

    /// 使用闪光立绘
    #[arg(long)]
    shiny: bool,

    /// TOML配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 固定随机种子，便于复现抽取结果
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    // 初始化日志系统
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("启动宝可梦扭蛋生成器 v{}", pokegacha::VERSION);

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("生成失败: {}", e);
        eprintln!("ERROR: {}", e);
        // 用户输入问题用退出码2，运行错误用退出码1
        std::process::exit(if e.is_user_error() { 2 } else { 1 });
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = GachaConfig::load_or_default(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.general.seed = Some(seed);
    }

    let request = GachaRequest {
        num_sets: cli.sets,
        set_size: cli.size.unwrap_or(config.rules.pokemon_per_set),
        type_filter: cli.type_filter,
        shiny: cli.shiny,
    };

    let provider = PokeApiClient::new(&config.api)?;
    let bbcode = generate(&provider, &config, &request).await?;

    println!("{}", bbcode);
    debug!(
        "共发送 {} 个API请求，失败 {} 个",
        provider.request_count(),
        provider.failure_count()
    );
    Ok(())
}
