use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use base64::{Engine as _, engine::general_purpose};
use url::Url;

use crate::config::briefing_profile::FeishuConfig;
use crate::error::{error_body, BriefingError};
use crate::modules::report::CardDocument;

const SERVICE: &str = "Feishu";

/// 开启签名校验时在卡片顶层追加 timestamp / sign
#[derive(Serialize)]
struct SignedPayload<'a> {
    timestamp: String,
    sign: String,
    #[serde(flatten)]
    card: &'a CardDocument,
}

pub struct FeishuNotifier {
    client: Client,
    config: FeishuConfig,
}

impl FeishuNotifier {
    pub fn new(client: Client, config: FeishuConfig) -> Self {
        Self { client, config }
    }

    fn webhook_url(&self) -> Result<Url, BriefingError> {
        let raw = self
            .config
            .webhook_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| BriefingError::Configuration("FEISHU_WEBHOOK_URL is not set".to_string()))?;

        Url::parse(raw).map_err(|e| {
            BriefingError::Configuration(format!("FEISHU_WEBHOOK_URL is not a valid URL: {}", e))
        })
    }

    /// 飞书签名：以 "timestamp\nsecret" 为 key 对空串做 HmacSHA256，再 base64
    fn sign(secret: &str, timestamp: u64) -> String {
        let string_to_sign = format!("{}\n{}", timestamp, secret);
        let mac = Hmac::<Sha256>::new_from_slice(string_to_sign.as_bytes())
            .expect("HMAC can take key of any size");
        general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }

    /// 直接序列化结构体，保持卡片字段顺序
    fn payload(&self, card: &CardDocument, timestamp: u64) -> Result<String, BriefingError> {
        let body = match self.config.secret.as_deref().filter(|s| !s.is_empty()) {
            Some(secret) => serde_json::to_string(&SignedPayload {
                timestamp: timestamp.to_string(),
                sign: Self::sign(secret, timestamp),
                card,
            }),
            None => serde_json::to_string(card),
        };
        body.map_err(|e| BriefingError::InvalidInput(format!("card is not serializable: {}", e)))
    }

    /// 单次投递，不重试；只检查 HTTP 状态，回执原样返回
    pub async fn deliver(&self, card: &CardDocument) -> Result<Value, BriefingError> {
        let url = self.webhook_url()?;

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let body = self.payload(card, timestamp)?;

        info!("📨 [Feishu] Delivering card...");
        let resp = self
            .client
            .post(url)
            .timeout(Duration::from_secs(self.config.timeout_sec))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| BriefingError::transport(SERVICE, e))?;

        let status = resp.status();
        if !status.is_success() {
            let err = error_body(resp.text().await);
            return Err(BriefingError::Transport {
                service: SERVICE,
                status: Some(status.as_u16()),
                message: err,
            });
        }

        let ack: Value = resp.json().await.map_err(|e| BriefingError::MalformedResponse {
            service: SERVICE,
            message: format!("acknowledgment is not JSON: {}", e),
        })?;

        // 飞书业务错误同样返回 200，这里只记录
        if let Some(code) = ack.get("code").and_then(Value::as_i64) {
            if code != 0 {
                warn!("❌ Feishu Error: {}", ack);
            }
        }
        Ok(ack)
    }
}
