//! 穿搭推荐的类型定义
//!
//! 各前端共享的类型:
//! - Selection: 用户当前的表单输入
//! - WeatherSnapshot: 单次请求获取的天气快照
//! - SuggestionResponse: 生成式模型输出的结构（weather + outfit）
//! - OutfitReport: 合并实测天气与配图后的最终结果

use serde::{Deserialize, Serialize};

/// 出行日期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetDay {
    #[default]
    Today,
    Tomorrow,
    DayAfterTomorrow,
}

impl TargetDay {
    pub const ALL: &'static [TargetDay] =
        &[TargetDay::Today, TargetDay::Tomorrow, TargetDay::DayAfterTomorrow];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetDay::Today => "today",
            TargetDay::Tomorrow => "tomorrow",
            TargetDay::DayAfterTomorrow => "day-after-tomorrow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TargetDay::Today => "今天",
            TargetDay::Tomorrow => "明天",
            TargetDay::DayAfterTomorrow => "后天",
        }
    }

    /// 天气预报数据中的天数下标（0=今天）
    pub fn forecast_index(&self) -> usize {
        match self {
            TargetDay::Today => 0,
            TargetDay::Tomorrow => 1,
            TargetDay::DayAfterTomorrow => 2,
        }
    }

    /// 从表单值还原，未知值回退到默认
    pub fn from_value(value: &str) -> TargetDay {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == value)
            .unwrap_or_default()
    }
}

/// 出行时段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: &'static [TimeOfDay] = &[
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "早上",
            TimeOfDay::Afternoon => "下午",
            TimeOfDay::Evening => "傍晚",
            TimeOfDay::Night => "夜间",
        }
    }

    /// 该时段的代表整点，用于匹配3小时粒度的预报槽位
    pub fn representative_hour(&self) -> u32 {
        match self {
            TimeOfDay::Morning => 8,
            TimeOfDay::Afternoon => 14,
            TimeOfDay::Evening => 18,
            TimeOfDay::Night => 21,
        }
    }

    pub fn from_value(value: &str) -> TimeOfDay {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
            .unwrap_or_default()
    }
}

/// 性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Neutral,
}

impl Gender {
    pub const ALL: &'static [Gender] = &[Gender::Male, Gender::Female, Gender::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男士",
            Gender::Female => "女士",
            Gender::Neutral => "中性",
        }
    }

    pub fn from_value(value: &str) -> Gender {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == value)
            .unwrap_or_default()
    }
}

/// 穿搭风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StylePreference {
    #[default]
    Casual,
    Formal,
    Sport,
}

impl StylePreference {
    pub const ALL: &'static [StylePreference] = &[
        StylePreference::Casual,
        StylePreference::Formal,
        StylePreference::Sport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreference::Casual => "casual",
            StylePreference::Formal => "formal",
            StylePreference::Sport => "sport",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StylePreference::Casual => "休闲",
            StylePreference::Formal => "正式",
            StylePreference::Sport => "运动",
        }
    }

    pub fn from_value(value: &str) -> StylePreference {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// 十二色彩季型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorSeason {
    #[default]
    LightSpring,
    WarmSpring,
    BrightSpring,
    LightSummer,
    CoolSummer,
    SoftSummer,
    SoftAutumn,
    WarmAutumn,
    DeepAutumn,
    DeepWinter,
    CoolWinter,
    BrightWinter,
}

impl ColorSeason {
    pub const ALL: &'static [ColorSeason] = &[
        ColorSeason::LightSpring,
        ColorSeason::WarmSpring,
        ColorSeason::BrightSpring,
        ColorSeason::LightSummer,
        ColorSeason::CoolSummer,
        ColorSeason::SoftSummer,
        ColorSeason::SoftAutumn,
        ColorSeason::WarmAutumn,
        ColorSeason::DeepAutumn,
        ColorSeason::DeepWinter,
        ColorSeason::CoolWinter,
        ColorSeason::BrightWinter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSeason::LightSpring => "light-spring",
            ColorSeason::WarmSpring => "warm-spring",
            ColorSeason::BrightSpring => "bright-spring",
            ColorSeason::LightSummer => "light-summer",
            ColorSeason::CoolSummer => "cool-summer",
            ColorSeason::SoftSummer => "soft-summer",
            ColorSeason::SoftAutumn => "soft-autumn",
            ColorSeason::WarmAutumn => "warm-autumn",
            ColorSeason::DeepAutumn => "deep-autumn",
            ColorSeason::DeepWinter => "deep-winter",
            ColorSeason::CoolWinter => "cool-winter",
            ColorSeason::BrightWinter => "bright-winter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorSeason::LightSpring => "浅春型",
            ColorSeason::WarmSpring => "暖春型",
            ColorSeason::BrightSpring => "明春型",
            ColorSeason::LightSummer => "浅夏型",
            ColorSeason::CoolSummer => "冷夏型",
            ColorSeason::SoftSummer => "柔夏型",
            ColorSeason::SoftAutumn => "柔秋型",
            ColorSeason::WarmAutumn => "暖秋型",
            ColorSeason::DeepAutumn => "深秋型",
            ColorSeason::DeepWinter => "深冬型",
            ColorSeason::CoolWinter => "冷冬型",
            ColorSeason::BrightWinter => "明冬型",
        }
    }

    pub fn from_value(value: &str) -> ColorSeason {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// 用户当前的表单输入
///
/// 只由用户直接操作修改，不派生任何持久化字段
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub location: String,
    pub target_day: TargetDay,
    pub time_of_day: TimeOfDay,
    pub gender: Gender,
    pub style: StylePreference,
    pub color_season: ColorSeason,
}

/// 天气快照
///
/// 每次请求重新获取，不跨请求保留。
/// 字段名与生成式模型的输出契约一致（maxtempC/mintempC）。
/// humidity 可能为空，展示时回退到 precipitation（降水概率字符串）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature: String,
    pub feels_like: String,
    #[serde(rename = "maxtempC")]
    pub max_temp_c: String,
    #[serde(rename = "mintempC")]
    pub min_temp_c: String,
    pub humidity: String,
    pub precipitation: String,
    pub condition: String,
}

/// 穿搭单品
///
/// category 对应模型输出的 `type` 字段，取值应在
/// top / pants / shoes / bag / jacket 中，不做强校验
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitItem {
    pub name: String,
    pub color: String,
    pub material: String,
    #[serde(rename = "type")]
    pub category: String,
}

/// 穿搭方案
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitPlan {
    pub summary: String,
    pub reason: String,
    pub tips: String,
    pub color_palette: Vec<String>,
    pub items: Vec<OutfitItem>,
    #[serde(rename = "visualPrompts")]
    pub visual_prompts: Vec<String>,
}

/// 生成式模型输出的完整结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionResponse {
    pub weather: WeatherSnapshot,
    pub outfit: OutfitPlan,
}

/// 图片两档分辨率的地址
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSource {
    pub medium: String,
    pub large: String,
}

/// 穿搭灵感配图描述
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspirationImage {
    pub id: u64,
    pub src: ImageSource,
    pub alt: String,
}

/// 最终结果：实测天气覆盖后的方案与配图
///
/// 不缓存、不复用，由渲染层直接消费
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutfitReport {
    pub weather: WeatherSnapshot,
    pub outfit: OutfitPlan,
    pub images: Vec<InspirationImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_day_from_value_roundtrip() {
        for day in TargetDay::ALL {
            assert_eq!(TargetDay::from_value(day.as_str()), *day);
        }
    }

    #[test]
    fn test_target_day_from_value_unknown() {
        assert_eq!(TargetDay::from_value("yesterday"), TargetDay::Today);
    }

    #[test]
    fn test_time_of_day_representative_hour() {
        assert_eq!(TimeOfDay::Morning.representative_hour(), 8);
        assert_eq!(TimeOfDay::Night.representative_hour(), 21);
    }

    #[test]
    fn test_color_season_all_twelve() {
        assert_eq!(ColorSeason::ALL.len(), 12);
        for season in ColorSeason::ALL {
            assert_eq!(ColorSeason::from_value(season.as_str()), *season);
            assert!(!season.label().is_empty());
        }
    }

    #[test]
    fn test_outfit_item_deserialize_type_field() {
        let json = r#"{"name": "速干T恤", "color": "纯白", "material": "聚酯纤维", "type": "top"}"#;
        let item: OutfitItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "速干T恤");
        assert_eq!(item.category, "top");
    }

    #[test]
    fn test_outfit_item_missing_fields_default() {
        let json = r#"{"name": "风衣"}"#;
        let item: OutfitItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "风衣");
        assert_eq!(item.color, "");
        assert_eq!(item.category, "");
    }

    #[test]
    fn test_weather_snapshot_contract_names() {
        let json = r#"{
            "location": "泰山",
            "temperature": "25",
            "feels_like": "26",
            "maxtempC": "28",
            "mintempC": "18",
            "humidity": "60",
            "precipitation": "20%"
        }"#;
        let weather: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(weather.temperature, "25");
        assert_eq!(weather.max_temp_c, "28");
        assert_eq!(weather.min_temp_c, "18");
        assert_eq!(weather.precipitation, "20%");
    }

    #[test]
    fn test_outfit_plan_visual_prompts_rename() {
        let json = r#"{
            "summary": "清爽",
            "color_palette": ["宝蓝"],
            "items": [],
            "visualPrompts": ["female casual outfit"]
        }"#;
        let plan: OutfitPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.visual_prompts.len(), 1);
        assert_eq!(plan.color_palette[0], "宝蓝");
    }

    #[test]
    fn test_suggestion_response_weather_optional() {
        // 模型漏掉 weather 字段时由默认值兜底
        let json = r#"{"outfit": {"summary": "简洁", "items": []}}"#;
        let response: SuggestionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.weather, WeatherSnapshot::default());
        assert_eq!(response.outfit.summary, "简洁");
    }

    #[test]
    fn test_inspiration_image_deserialize() {
        let json = r#"{
            "id": 12345,
            "src": {"medium": "https://example.com/m.jpg", "large": "https://example.com/l.jpg"},
            "alt": "casual outfit",
            "photographer": "ignored"
        }"#;
        let image: InspirationImage = serde_json::from_str(json).unwrap();
        assert_eq!(image.id, 12345);
        assert_eq!(image.src.medium, "https://example.com/m.jpg");
        assert_eq!(image.alt, "casual outfit");
    }
}
