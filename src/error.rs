use thiserror::Error;

/// 一次简报运行中可能出现的全部错误，均不重试，直接上抛到 main。
#[derive(Debug, Error)]
pub enum BriefingError {
    /// 缺少 API Key / Webhook 地址等，必须在发起网络请求前失败
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 网络失败、超时或非 2xx 状态
    #[error("{service} transport error (status: {status:?}): {message}")]
    Transport {
        service: &'static str,
        status: Option<u16>,
        message: String,
    },

    #[error("Malformed response from {service}: {message}")]
    MalformedResponse {
        service: &'static str,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 错误响应的正文读不出来时保留原因，避免 message 为空
pub fn error_body<E: std::fmt::Display>(read: Result<String, E>) -> String {
    match read {
        Ok(text) => text,
        Err(e) => format!("<unreadable body: {}>", e),
    }
}

impl BriefingError {
    pub fn transport(service: &'static str, err: reqwest::Error) -> Self {
        Self::Transport {
            service,
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_keeps_text_or_explains_failure() {
        assert_eq!(error_body::<String>(Ok("upstream down".to_string())), "upstream down");
        assert_eq!(
            error_body::<&str>(Err("connection reset")),
            "<unreadable body: connection reset>"
        );
    }
}
