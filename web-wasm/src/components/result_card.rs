//! 结果卡片组件
//!
//! OutfitReport 的纯展示：天气摘要、单品网格、推荐色板、灵感配图。
//! 自身不持有任何状态，色块与图标在渲染时按关键词规则现场解析

use leptos::prelude::*;
use outfit_ai_common::palette::{category_label, resolve_color, resolve_icon, IconKind, SWATCH_CAP};
use outfit_ai_common::types::{OutfitItem, OutfitReport, WeatherSnapshot};

/// 渲染时派生的穿搭单品，附解析出的色值与图标
struct DisplayItem {
    name: String,
    color: String,
    material: String,
    category: String,
    color_hex: &'static str,
    icon: IconKind,
}

impl DisplayItem {
    fn resolve(item: &OutfitItem) -> DisplayItem {
        DisplayItem {
            name: item.name.clone(),
            color: item.color.clone(),
            material: item.material.clone(),
            category: category_label(&item.category).to_string(),
            color_hex: resolve_color(&item.color),
            icon: resolve_icon(&item.name),
        }
    }
}

/// 湿度展示行；湿度缺失时回退到降水概率字符串
fn humidity_line(weather: &WeatherSnapshot) -> String {
    if weather.humidity.is_empty() {
        if weather.precipitation.is_empty() {
            "湿度 -".to_string()
        } else {
            format!("降水概率 {}", weather.precipitation)
        }
    } else {
        format!("湿度 {}%", weather.humidity)
    }
}

#[component]
pub fn ResultCard(report: OutfitReport) -> impl IntoView {
    let items: Vec<DisplayItem> = report.outfit.items.iter().map(DisplayItem::resolve).collect();
    let palette = report.outfit.color_palette.clone();
    let images: Vec<_> = report.images.iter().take(3).cloned().collect();
    let humidity = humidity_line(&report.weather);
    let weather = report.weather;
    let title = format!("{} · {}", weather.location, weather.condition);
    let temperature = format!("{}°C", weather.temperature);
    let feels_like = format!("体感 {}°C", weather.feels_like);
    let high_low = format!("{}°C / {}°C", weather.max_temp_c, weather.min_temp_c);
    let summary = report.outfit.summary;
    let reason = report.outfit.reason;
    let tips = report.outfit.tips;
    let has_tips = !tips.is_empty();
    let has_images = !images.is_empty();

    view! {
        <div class="result-card">
            <div class="weather-strip">
                <h3>{title}</h3>
                <div class="weather-facts">
                    <span class="weather-temp">{temperature}</span>
                    <span>{feels_like}</span>
                    <span>{humidity}</span>
                    <span>{high_low}</span>
                </div>
            </div>

            <div class="outfit-summary">
                <h2>{summary}</h2>
                <p class="outfit-reason">{reason}</p>
                <Show when=move || has_tips>
                    <p class="outfit-tips">"💡 "{tips.clone()}</p>
                </Show>
            </div>

            <div class="item-grid">
                {items.into_iter().map(|item| view! {
                    <div class="item-card">
                        <span class="item-icon">{item.icon.glyph()}</span>
                        <span
                            class="item-swatch"
                            style=format!("background-color: {}", item.color_hex)
                        ></span>
                        <div class="item-info">
                            <h4>{item.name}</h4>
                            <p>{item.color}" · "{item.material}</p>
                            <span class="item-category">{item.category}</span>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="palette-row">
                <h3>"推荐配色"</h3>
                {palette.into_iter().enumerate().map(|(index, name)| {
                    let hex = resolve_color(&name);
                    view! {
                        <div class="palette-entry">
                            {(index < SWATCH_CAP).then(|| view! {
                                <span
                                    class="palette-swatch"
                                    style=format!("background-color: {}", hex)
                                ></span>
                            })}
                            <span class="palette-name">{name}</span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <Show when=move || has_images>
                <div class="inspiration-images">
                    <h3>"穿搭灵感"</h3>
                    {images.first().map(|image| view! {
                        <img
                            class="inspiration-large"
                            src=image.src.large.clone()
                            alt=image.alt.clone()
                        />
                    })}
                    <div class="inspiration-thumbs">
                        {images.iter().skip(1).map(|image| view! {
                            <img
                                class="inspiration-small"
                                src=image.src.medium.clone()
                                alt=image.alt.clone()
                            />
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_item_resolve() {
        let item = OutfitItem {
            name: "登山鞋".to_string(),
            color: "宝蓝".to_string(),
            material: "网面".to_string(),
            category: "shoes".to_string(),
        };
        let display = DisplayItem::resolve(&item);
        assert_eq!(display.icon, IconKind::Footwear);
        assert_eq!(display.color_hex, "#2457c5");
        assert_eq!(display.category, "鞋子");
    }

    #[test]
    fn test_display_item_unknown_color_falls_back() {
        let item = OutfitItem {
            name: "速干T恤".to_string(),
            color: "幻彩".to_string(),
            ..Default::default()
        };
        let display = DisplayItem::resolve(&item);
        assert_eq!(display.icon, IconKind::Garment);
        assert_eq!(display.color_hex, outfit_ai_common::FALLBACK_COLOR);
    }

    #[test]
    fn test_humidity_line_prefers_humidity() {
        let weather = WeatherSnapshot {
            humidity: "60".to_string(),
            precipitation: "20%".to_string(),
            ..Default::default()
        };
        assert_eq!(humidity_line(&weather), "湿度 60%");
    }

    #[test]
    fn test_humidity_line_falls_back_to_precipitation() {
        let weather = WeatherSnapshot {
            precipitation: "40%".to_string(),
            ..Default::default()
        };
        assert_eq!(humidity_line(&weather), "降水概率 40%");
    }

    #[test]
    fn test_humidity_line_both_missing() {
        let weather = WeatherSnapshot::default();
        assert_eq!(humidity_line(&weather), "湿度 -");
    }

    #[test]
    fn test_swatch_cap_is_four() {
        // 色板前4项带色块，之后的条目只显示文字
        let palette = ["宝蓝", "纯白", "柠檬黄", "亮银", "冰蓝"];
        let with_swatch = palette
            .iter()
            .enumerate()
            .filter(|(index, _)| *index < SWATCH_CAP)
            .count();
        assert_eq!(with_swatch, 4);
    }
}
