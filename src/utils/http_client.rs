use reqwest::Client;
use std::time::Duration;
use anyhow::Result;
use tracing::debug;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// 创建共享 HTTP Client (DeepSeek + 飞书 Webhook)
    /// 总超时由每个请求单独设置，这里只管连接层面
    pub fn create() -> Result<Client> {
        let builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(30)));

        debug!("🌐 [Http Client] built (per-request timeouts)");

        let client = builder.build()?;
        Ok(client)
    }
}
