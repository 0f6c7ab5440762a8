// 错误处理系统
// 开发心理：统一的错误类型系统，提供清晰的错误信息
// 使用Rust的Result类型确保错误处理的安全性和一致性

use std::{error::Error as StdError, fmt, io};
use serde::{Deserialize, Serialize};

// 扭蛋生成器主要错误类型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GachaError {
    // 输入校验错误 - 用户输入的属性名不合法
    InvalidInput(String),

    // 候选不足 - 抽样请求的数量超过可用数量，携带实际可用数量
    InsufficientCandidates(usize),

    // 解析错误 - 资源链接无法解析出编号
    Resolution(String),

    // 数据提供方错误 - 网络、未找到、响应格式异常
    Provider(String),

    // 响应内容解析错误
    Parse(String),

    // 配置错误
    Config(String),
}

// Result类型别名
pub type Result<T> = std::result::Result<T, GachaError>;

impl fmt::Display for GachaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GachaError::InvalidInput(msg) => write!(f, "输入无效: {}", msg),
            GachaError::InsufficientCandidates(available) => {
                write!(f, "符合条件的宝可梦数量不足，仅有 {} 只可用", available)
            }
            GachaError::Resolution(msg) => write!(f, "解析失败: {}", msg),
            GachaError::Provider(msg) => write!(f, "数据源错误: {}", msg),
            GachaError::Parse(msg) => write!(f, "响应解析错误: {}", msg),
            GachaError::Config(msg) => write!(f, "配置错误: {}", msg),
        }
    }
}

impl StdError for GachaError {}

// 错误转换实现
impl From<io::Error> for GachaError {
    fn from(error: io::Error) -> Self {
        GachaError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for GachaError {
    fn from(error: serde_json::Error) -> Self {
        GachaError::Parse(error.to_string())
    }
}

impl From<toml::de::Error> for GachaError {
    fn from(error: toml::de::Error) -> Self {
        GachaError::Config(error.to_string())
    }
}

impl From<reqwest::Error> for GachaError {
    fn from(error: reqwest::Error) -> Self {
        GachaError::Provider(error.to_string())
    }
}

impl GachaError {
    // 获取错误的严重程度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GachaError::InvalidInput(_) => ErrorSeverity::Low,
            GachaError::InsufficientCandidates(_) => ErrorSeverity::Low,
            GachaError::Resolution(_) => ErrorSeverity::Medium,
            GachaError::Parse(_) => ErrorSeverity::Medium,
            GachaError::Config(_) => ErrorSeverity::Medium,
            GachaError::Provider(_) => ErrorSeverity::High,
        }
    }

    // 检查是否为用户输入导致的错误
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            GachaError::InvalidInput(_) | GachaError::InsufficientCandidates(_)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}
