use serde::Deserialize;
use config::{Config, File};
use anyhow::Result;
use std::env;

pub const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";

#[derive(Debug, Deserialize, Clone)]
pub struct DeepSeekConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_sec: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeishuConfig {
    pub webhook_url: Option<String>,
    /// 机器人开启「签名校验」时才需要
    pub secret: Option<String>,
    pub timeout_sec: u64,
}

/// 一次运行所需的全部配置，显式传入各个客户端，不读全局状态。
#[derive(Debug, Deserialize, Clone)]
pub struct BriefingProfile {
    pub deepseek: DeepSeekConfig,
    pub feishu: FeishuConfig,
}

impl BriefingProfile {
    /// 默认值 < briefing_config.{toml,yaml,json} < 环境变量
    pub fn load() -> Result<Self> {
        Self::build(Some("briefing_config"), |key| env::var(key).ok())
    }

    pub fn build<F>(file: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 空字符串按未设置处理
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut builder = Config::builder()
            .set_default("deepseek.base_url", DEFAULT_DEEPSEEK_BASE_URL)?
            .set_default("deepseek.model", DEFAULT_DEEPSEEK_MODEL)?
            .set_default("deepseek.max_tokens", 800_i64)?
            .set_default("deepseek.timeout_sec", 60_i64)?
            .set_default("feishu.timeout_sec", 30_i64)?;

        if let Some(name) = file {
            builder = builder.add_source(File::with_name(name).required(false));
        }

        let settings = builder
            .set_override_option("deepseek.api_key", var("DEEPSEEK_API_KEY"))?
            .set_override_option("deepseek.base_url", var("DEEPSEEK_BASE_URL"))?
            .set_override_option("deepseek.model", var("DEEPSEEK_MODEL"))?
            .set_override_option("feishu.webhook_url", var("FEISHU_WEBHOOK_URL"))?
            .set_override_option("feishu.secret", var("FEISHU_SECRET"))?
            .build()?;

        let profile: BriefingProfile = settings.try_deserialize()?;
        Ok(profile)
    }
}
