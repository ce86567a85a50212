mod config;
mod error;
mod utils;
mod modules;

use chrono::{DateTime, Utc};
use dotenvy::dotenv;
use reqwest::Client;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::BriefingProfile;
use crate::error::BriefingError;
use crate::modules::brain::{ContentComposer, DeepSeekClient};
use crate::modules::report::build_card;
use crate::utils::http_client::HttpClientFactory;
use crate::utils::notifier::FeishuNotifier;

/// 生成 -> 组卡 -> 投递，任一步失败都直接返回，不会发出半张卡片
async fn run_once(profile: &BriefingProfile, client: Client, now: DateTime<Utc>) -> Result<Value, BriefingError> {
    let composer = ContentComposer::new(DeepSeekClient::new(client.clone(), profile.deepseek.clone()));
    let briefing = composer.generate_briefing().await?;

    let card = build_card(&briefing.news, &briefing.interest, now);
    info!("🗞️ [Card] Built card with {} elements", card.card.elements.len());

    let notifier = FeishuNotifier::new(client, profile.feishu.clone());
    notifier.deliver(&card).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Starting Daily Briefing...");

    let profile = BriefingProfile::load()?;
    let client = HttpClientFactory::create()?;

    let result = run_once(&profile, client, Utc::now()).await?;
    println!("发送结果： {}", result);
    Ok(())
}
