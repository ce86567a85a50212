use tracing::{info, warn};

use super::llm::TextGenerator;
use super::prompts::{
    INTEREST_PROMPT, INTEREST_TEMPERATURE, MAX_INTEREST_CHARS, MAX_NEWS_ITEMS, NEWS_PROMPT,
    NEWS_TEMPERATURE,
};
use crate::error::BriefingError;

/// 两段生成好的 Markdown 文本
#[derive(Debug, Clone, PartialEq)]
pub struct Briefing {
    pub news: String,
    pub interest: String,
}

pub struct ContentComposer<G> {
    generator: G,
}

impl<G: TextGenerator> ContentComposer<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// 两次生成互不依赖，并发发出；任意一次失败则整体失败
    pub async fn generate_briefing(&self) -> Result<Briefing, BriefingError> {
        info!("📝 [Composer] Generating news digest + interest topic...");

        let (news, interest) = tokio::try_join!(
            self.generator.complete(NEWS_PROMPT, NEWS_TEMPERATURE),
            self.generator.complete(INTEREST_PROMPT, INTEREST_TEMPERATURE),
        )?;

        audit(&news, &interest);
        Ok(Briefing { news, interest })
    }
}

/// 上游不保证遵守格式要求，这里只记录偏差，不改写内容
fn audit(news: &str, interest: &str) {
    let items = count_bullets(news);
    if items > MAX_NEWS_ITEMS {
        warn!("⚠️ [Composer] News digest has {} items (asked for at most {})", items, MAX_NEWS_ITEMS);
    }

    let chars = interest.chars().count();
    if chars > MAX_INTEREST_CHARS {
        warn!("⚠️ [Composer] Interest topic is {} chars (asked for at most {})", chars, MAX_INTEREST_CHARS);
    }
}

fn count_bullets(markdown: &str) -> usize {
    markdown
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with("- ") || line.starts_with("* ") || line.starts_with("• "))
        .count()
}
