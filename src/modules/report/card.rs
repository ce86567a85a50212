use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// 日期按东八区显示
const CN_OFFSET_SECS: i32 = 8 * 3600;

pub const HEADER_TEMPLATE: &str = "turquoise";
pub const NEWS_LABEL: &str = "📌 **今日新闻简报（偏科技 & 趋势）**";
pub const INTEREST_LABEL: &str = "🎯 **今日兴趣拓展**";
// 回复调优目前只是文案，没有任何处理回复的逻辑
pub const NOTE_TEXT: &str =
    "小提示：如果哪一类主题你特别喜欢或不喜欢，可以在飞书里回复，我以后会帮你逐渐调整推荐方向。";

/// 飞书 interactive 卡片消息，字段顺序与线上渲染器约定一致
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDocument {
    pub msg_type: &'static str,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub config: CardConfig,
    pub header: CardHeader,
    pub elements: Vec<CardElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardConfig {
    pub wide_screen_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardHeader {
    pub template: &'static str,
    pub title: TextBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tag")]
pub enum TextBlock {
    #[serde(rename = "plain_text")]
    PlainText { content: String },
    #[serde(rename = "lark_md")]
    LarkMd { content: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum CardElement {
    Div { text: TextBlock },
    Hr,
    Note { elements: Vec<TextBlock> },
}

/// east_opt 只在 |secs| >= 86400 时返回 None，8 * 3600 恒在范围内
fn cn_offset() -> FixedOffset {
    FixedOffset::east_opt(CN_OFFSET_SECS).expect("UTC+8 is within ±24h")
}

pub fn format_cn_date(now: DateTime<Utc>) -> String {
    now.with_timezone(&cn_offset()).format("%Y-%m-%d").to_string()
}

/// 纯函数：相同输入得到完全相同的卡片
pub fn build_card(news: &str, interest: &str, now: DateTime<Utc>) -> CardDocument {
    let markdown = |label: &str, body: &str| CardElement::Div {
        text: TextBlock::LarkMd {
            content: format!("{}\n\n{}", label, body),
        },
    };

    CardDocument {
        msg_type: "interactive",
        card: Card {
            config: CardConfig { wide_screen_mode: true },
            header: CardHeader {
                template: HEADER_TEMPLATE,
                title: TextBlock::PlainText {
                    content: format!("你的每日世界小报 · {}", format_cn_date(now)),
                },
            },
            elements: vec![
                markdown(NEWS_LABEL, news),
                CardElement::Hr,
                markdown(INTEREST_LABEL, interest),
                CardElement::Hr,
                CardElement::Note {
                    elements: vec![TextBlock::PlainText {
                        content: NOTE_TEXT.to_string(),
                    }],
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn date_shifts_across_midnight_into_utc8() {
        assert_eq!(format_cn_date(at("2024-01-01T20:00:00Z")), "2024-01-02");
        assert_eq!(format_cn_date(at("2024-01-01T15:59:59Z")), "2024-01-01");
        assert_eq!(format_cn_date(Utc.with_ymd_and_hms(2024, 12, 31, 16, 0, 0).unwrap()), "2025-01-01");
    }

    #[test]
    fn cn_offset_is_eight_hours_east() {
        assert_eq!(cn_offset().local_minus_utc(), 8 * 3600);
    }

    #[test]
    fn card_has_five_elements_in_fixed_order() {
        let card = build_card("- 新闻", "主题", at("2024-01-01T00:00:00Z"));
        let elements = &card.card.elements;
        assert_eq!(elements.len(), 5);
        assert!(matches!(&elements[0], CardElement::Div { text: TextBlock::LarkMd { content } } if content.ends_with("- 新闻")));
        assert_eq!(elements[1], CardElement::Hr);
        assert!(matches!(&elements[2], CardElement::Div { text: TextBlock::LarkMd { content } } if content.ends_with("主题")));
        assert_eq!(elements[3], CardElement::Hr);
        assert!(matches!(&elements[4], CardElement::Note { .. }));
    }

    #[test]
    fn build_is_deterministic() {
        let now = at("2024-06-01T08:30:00Z");
        let a = serde_json::to_string(&build_card("a", "b", now)).unwrap();
        let b = serde_json::to_string(&build_card("a", "b", now)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_to_interactive_card_wire_shape() {
        let card = build_card("- 一条", "冷门主题", at("2024-01-01T20:00:00Z"));
        let expected = json!({
            "msg_type": "interactive",
            "card": {
                "config": {"wide_screen_mode": true},
                "header": {
                    "template": "turquoise",
                    "title": {"tag": "plain_text", "content": "你的每日世界小报 · 2024-01-02"}
                },
                "elements": [
                    {"tag": "div", "text": {"tag": "lark_md", "content": "📌 **今日新闻简报（偏科技 & 趋势）**\n\n- 一条"}},
                    {"tag": "hr"},
                    {"tag": "div", "text": {"tag": "lark_md", "content": "🎯 **今日兴趣拓展**\n\n冷门主题"}},
                    {"tag": "hr"},
                    {"tag": "note", "elements": [{"tag": "plain_text", "content": NOTE_TEXT}]}
                ]
            }
        });
        assert_eq!(serde_json::to_value(&card).unwrap(), expected);
    }

    #[test]
    fn key_order_matches_renderer() {
        let raw = serde_json::to_string(&build_card("n", "i", at("2024-01-01T00:00:00Z"))).unwrap();
        assert!(raw.starts_with(r#"{"msg_type":"interactive","card":{"config":{"wide_screen_mode":true},"header":{"template":"turquoise","title":{"tag":"plain_text","content":"#));
        assert!(raw.contains(r#"{"tag":"hr"}"#));
    }
}
