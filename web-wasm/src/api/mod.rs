//! 外部接口客户端与取数流水线

pub mod generate;
pub mod images;
pub mod weather;

use outfit_ai_common::{build_outfit_prompt, Error, OutfitReport, Result, Selection};

/// 穿搭建议流水线
///
/// 严格线性：天气 -> 提示词 -> 生成 -> 解析 -> 实测天气覆盖 -> 配图。
/// 每一步只尝试一次，不重试、不缓存；天气与配图失败就地降级，
/// 只有生成式环节的失败会向上传播
pub async fn produce_suggestion(selection: &Selection, api_key: &str) -> Result<OutfitReport> {
    if api_key.trim().is_empty() {
        return Err(Error::ConfigMissing);
    }

    let live_weather = weather::fetch_weather(selection).await;

    let prompt = build_outfit_prompt(selection, live_weather.as_ref());
    let mut response = generate::request_suggestion(api_key, &prompt).await?;

    // 实测天气永远覆盖模型自行编造的天气字段
    if let Some(snapshot) = live_weather {
        response.weather = snapshot;
    }

    let images = match response.outfit.visual_prompts.first() {
        Some(query) if !query.is_empty() => images::search_images(query).await,
        _ => Vec::new(),
    };

    Ok(OutfitReport {
        weather: response.weather,
        outfit: response.outfit,
        images,
    })
}
