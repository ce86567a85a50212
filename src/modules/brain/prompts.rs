/// 偏科技 / AI / 长期趋势的「安全新闻简报」
pub const NEWS_PROMPT: &str = "请以中文生成一份「今日世界简报」，仅包含：
1）科技 / AI / 工程 / 科学进展相关的要点
2）文化、教育、长期趋势类信息

特别要求：
- 不要包含任何血腥暴力、犯罪、灾难、八卦、情绪化社会事件、股市投资内容。
- 条目控制在 3 条以内，每条用一行，简洁明了。
- 不要胡编乱造具体日期、地点，如不确定请用「最近」「近几年」等模糊时间表达。
- 使用 Markdown 列表格式输出，例如：
- xxx
- xxx";

pub const NEWS_TEMPERATURE: f64 = 0.5;

/// 「今日兴趣拓展」主题
pub const INTEREST_PROMPT: &str = "用户是一名计算机专业大三学生，对以下方向都感兴趣：
- 体育（如 F1、电竞、篮球、足球）
- 音乐
- 艺术（绘画、摄影、建筑等）
- 电子游戏
- 科技前沿（AI、航天、工程）
- 人文与历史
- 生活方式（美食、旅行、文化）
- 各种小众但有趣的冷门领域

请为用户生成一个「今日兴趣拓展」主题，输出格式为：
1）先给出一个主题名
2）用 2~4 句介绍这个主题的有趣之处（不要太学术，轻松一点）
3）最后用一句话告诉用户：为什么今天值得花 3 分钟了解这个东西
要求：
- 全程中文
- 总长度控制在 200 字以内
- 不要出现任何暴力、血腥、极端内容，不涉及政治争论
- 适合在手机上快速阅读";

pub const INTEREST_TEMPERATURE: f64 = 0.9;

pub const MAX_NEWS_ITEMS: usize = 3;
pub const MAX_INTEREST_CHARS: usize = 200;
