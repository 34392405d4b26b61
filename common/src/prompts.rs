//! 提示词构造模块
//!
//! 各前端共享的提示词拼装逻辑:
//! - ITEM_CATEGORIES: 单品类目的固定集合
//! - CONTRACT_EXAMPLE: 要求模型模仿的示例JSON
//! - build_outfit_prompt: 穿搭建议的完整指令

use crate::types::{Selection, WeatherSnapshot};

/// 单品类目（模型输出 `type` 字段的允许取值）
pub const ITEM_CATEGORIES: &[&str] = &["top", "pants", "shoes", "bag", "jacket"];

/// 嵌入提示词的示例JSON，模型必须按此结构输出
///
/// 字段名就是输出契约，改动会破坏线上解析，谨慎修改
pub const CONTRACT_EXAMPLE: &str = r#"{
  "weather": {
    "location": "泰山",
    "temperature": "25",
    "feels_like": "26",
    "maxtempC": "28",
    "mintempC": "18",
    "humidity": "60",
    "precipitation": "20%"
  },
  "outfit": {
    "summary": "清爽透气的休闲登山穿搭",
    "reason": "气温适中、湿度偏高，轻薄速干面料更舒适",
    "tips": "山顶早晚温差大，建议随身带一件薄外套",
    "color_palette": ["宝蓝", "纯白", "柠檬黄", "亮银"],
    "items": [
      { "name": "速干T恤", "color": "纯白", "material": "聚酯纤维", "type": "top" },
      { "name": "运动长裤", "color": "藏青", "material": "弹力棉", "type": "pants" },
      { "name": "登山鞋", "color": "宝蓝", "material": "网面", "type": "shoes" },
      { "name": "轻便双肩包", "color": "亮银", "material": "尼龙", "type": "bag" }
    ],
    "visualPrompts": ["casual hiking outfit bright blue and white"]
  }
}"#;

/// 生成穿搭建议的指令
///
/// 有实测天气时嵌入天气摘要；没有时让模型按地点和日期自行推断，
/// 下游解析对两种情况一视同仁
pub fn build_outfit_prompt(selection: &Selection, weather: Option<&WeatherSnapshot>) -> String {
    let weather_block = match weather {
        Some(w) => {
            let humidity_line = if w.humidity.is_empty() {
                format!("- 降水概率: {}", w.precipitation)
            } else {
                format!("- 湿度: {}%", w.humidity)
            };
            format!(
                "## 实时天气\n\
                 - 天气状况: {}\n\
                 - 当前气温: {}°C（体感 {}°C）\n\
                 {}\n\
                 - 当天最高/最低气温: {}°C / {}°C",
                w.condition, w.temperature, w.feels_like, humidity_line, w.max_temp_c, w.min_temp_c
            )
        }
        None => "## 实时天气\n暂无实时天气数据，请根据地点和出行日期推断当地典型天气，\
                 并把推断结果填入输出的 weather 字段。"
            .to_string(),
    };

    let categories = ITEM_CATEGORIES.join(", ");

    format!(
        r#"你是一位专业的穿搭顾问。请根据以下信息，为用户推荐一套完整的出行穿搭。

## 用户信息
- 出行地点: {location}
- 出行时间: {day}{time}
- 性别: {gender}
- 穿搭风格: {style}
- 色彩季型: {season}

{weather_block}

## 输出格式（严格按照此JSON结构输出）
{example}

## 注意
- items 至少包含 4 件单品
- 每件单品必须带 type 字段，且只能从 {categories} 中选择
- color_palette 按推荐优先级排序，颜色要符合用户的色彩季型
- visualPrompts 给出 1~2 条英文的穿搭图片搜索词
- 只输出JSON对象，不要围栏，不要任何解释文字"#,
        location = selection.location,
        day = selection.target_day.label(),
        time = selection.time_of_day.label(),
        gender = selection.gender.label(),
        style = selection.style.label(),
        season = selection.color_season.label(),
        weather_block = weather_block,
        example = CONTRACT_EXAMPLE,
        categories = categories,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorSeason, Gender, StylePreference, TargetDay, TimeOfDay};

    fn sample_selection() -> Selection {
        Selection {
            location: "泰山".to_string(),
            target_day: TargetDay::Today,
            time_of_day: TimeOfDay::Morning,
            gender: Gender::Female,
            style: StylePreference::Casual,
            color_season: ColorSeason::BrightWinter,
        }
    }

    #[test]
    fn test_contract_example_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(CONTRACT_EXAMPLE).unwrap();
        assert!(value.get("weather").is_some());
        assert!(value.get("outfit").is_some());
    }

    #[test]
    fn test_prompt_embeds_selection_labels() {
        let prompt = build_outfit_prompt(&sample_selection(), None);
        assert!(prompt.contains("泰山"));
        assert!(prompt.contains("今天"));
        assert!(prompt.contains("早上"));
        assert!(prompt.contains("女士"));
        assert!(prompt.contains("休闲"));
        assert!(prompt.contains("明冬型"));
    }

    #[test]
    fn test_prompt_embeds_contract_and_constraints() {
        let prompt = build_outfit_prompt(&sample_selection(), None);
        assert!(prompt.contains(CONTRACT_EXAMPLE));
        assert!(prompt.contains("至少包含 4 件"));
        assert!(prompt.contains("top, pants, shoes, bag, jacket"));
    }

    #[test]
    fn test_prompt_with_weather_block() {
        let weather = WeatherSnapshot {
            location: "泰山".to_string(),
            temperature: "25".to_string(),
            feels_like: "26".to_string(),
            max_temp_c: "28".to_string(),
            min_temp_c: "18".to_string(),
            humidity: "60".to_string(),
            precipitation: "20%".to_string(),
            condition: "Sunny".to_string(),
        };
        let prompt = build_outfit_prompt(&sample_selection(), Some(&weather));
        assert!(prompt.contains("25°C"));
        assert!(prompt.contains("体感 26°C"));
        assert!(prompt.contains("湿度: 60%"));
        assert!(prompt.contains("28°C / 18°C"));
        assert!(!prompt.contains("暂无实时天气数据"));
    }

    #[test]
    fn test_prompt_humidity_fallback_to_precipitation() {
        let weather = WeatherSnapshot {
            temperature: "20".to_string(),
            precipitation: "40%".to_string(),
            ..Default::default()
        };
        let prompt = build_outfit_prompt(&sample_selection(), Some(&weather));
        assert!(prompt.contains("降水概率: 40%"));
        assert!(!prompt.contains("湿度:"));
    }

    #[test]
    fn test_prompt_without_weather_degrades() {
        let prompt = build_outfit_prompt(&sample_selection(), None);
        assert!(prompt.contains("暂无实时天气数据"));
    }
}
