use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::briefing_profile::DeepSeekConfig;
use crate::error::{error_body, BriefingError};

const SERVICE: &str = "DeepSeek";

pub const SYSTEM_PROMPT: &str = "你是一个冷静、不煽情的每日简报助手。\
只输出客观简洁的信息，不带任何负面渲染，不带无意义八卦。";

/// 文本生成的抽象，组稿器只依赖它，方便在测试里替换
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<String, BriefingError>;
}

pub struct DeepSeekClient {
    client: Client,
    config: DeepSeekConfig,
}

impl DeepSeekClient {
    pub fn new(client: Client, config: DeepSeekConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextGenerator for DeepSeekClient {
    /// 单次调用，不重试；返回首个 choice 去掉首尾空白后的内容
    async fn complete(&self, prompt: &str, temperature: f64) -> Result<String, BriefingError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| BriefingError::Configuration("DEEPSEEK_API_KEY is not set".to_string()))?;

        if prompt.trim().is_empty() {
            return Err(BriefingError::InvalidInput("prompt must not be empty".to_string()));
        }
        if !(0.0..=1.0).contains(&temperature) {
            return Err(BriefingError::InvalidInput(format!(
                "temperature {} is outside [0, 1]",
                temperature
            )));
        }

        let body = json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "temperature": temperature,
            "max_tokens": self.config.max_tokens,
        });

        info!("🧠 [DeepSeek] Requesting completion (model: {}, temperature: {:.1})", self.config.model, temperature);

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(key)
            .timeout(Duration::from_secs(self.config.timeout_sec))
            .json(&body)
            .send()
            .await
            .map_err(|e| BriefingError::transport(SERVICE, e))?;

        let status = resp.status();
        if !status.is_success() {
            let err = error_body(resp.text().await);
            warn!("⚠️ DeepSeek API Error: {} {}", status, err);
            return Err(BriefingError::Transport {
                service: SERVICE,
                status: Some(status.as_u16()),
                message: err,
            });
        }

        let raw = resp
            .text()
            .await
            .map_err(|e| BriefingError::transport(SERVICE, e))?;
        let content = extract_content(&raw)?;
        debug!("🧠 [DeepSeek] {} chars generated", content.chars().count());
        Ok(content)
    }
}

fn extract_content(raw: &str) -> Result<String, BriefingError> {
    let json: Value = serde_json::from_str(raw).map_err(|e| BriefingError::MalformedResponse {
        service: SERVICE,
        message: format!("body is not JSON: {}", e),
    })?;

    json["choices"][0]["message"]["content"]
        .as_str()
        .map(|content| content.trim().to_string())
        .ok_or_else(|| BriefingError::MalformedResponse {
            service: SERVICE,
            message: "missing choices[0].message.content".to_string(),
        })
}
