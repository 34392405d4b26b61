//! 天气源响应的解码
//!
//! 公共天气接口（wttr.in 的 j1 格式）返回当前天况与三天预报，
//! 预报按3小时一个槽位。这里只消费用到的字段，把目标日期与
//! 时段映射成一份 WeatherSnapshot。

use crate::types::{TargetDay, TimeOfDay, WeatherSnapshot};
use serde::Deserialize;

/// 天气接口的顶层响应
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WttrReply {
    pub current_condition: Vec<WttrCurrent>,
    pub weather: Vec<WttrDay>,
}

/// 当前天况
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WttrCurrent {
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    pub humidity: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WttrText>,
}

/// 单天预报
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WttrDay {
    #[serde(rename = "maxtempC")]
    pub max_temp_c: String,
    #[serde(rename = "mintempC")]
    pub min_temp_c: String,
    pub hourly: Vec<WttrHourly>,
}

/// 3小时粒度的预报槽位，time 形如 "0"/"300"/.../"2100"
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WttrHourly {
    pub time: String,
    #[serde(rename = "tempC")]
    pub temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    pub humidity: String,
    pub chanceofrain: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WttrText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WttrText {
    pub value: String,
}

fn first_desc(descs: &[WttrText]) -> String {
    descs.first().map(|d| d.value.clone()).unwrap_or_default()
}

/// 距离目标整点最近的预报槽位
fn nearest_hourly(hourly: &[WttrHourly], hour: u32) -> Option<&WttrHourly> {
    hourly.iter().min_by_key(|h| {
        let slot_hour = h.time.parse::<u32>().unwrap_or(0) / 100;
        slot_hour.abs_diff(hour)
    })
}

/// 把天气响应映射为目标日期/时段的快照
///
/// - 今天: 当前天况提供气温/体感/湿度/天况，当天预报提供最高最低温
/// - 明天/后天: 对应日期中最接近出行时段的槽位提供这些字段
/// - 降水概率取自所选槽位，格式化为 "40%" 形式
/// - 目标日期缺失时返回 None，整体降级为无天气数据
pub fn snapshot_for(
    reply: &WttrReply,
    location: &str,
    target_day: TargetDay,
    time_of_day: TimeOfDay,
) -> Option<WeatherSnapshot> {
    let day = reply.weather.get(target_day.forecast_index())?;
    let slot = nearest_hourly(&day.hourly, time_of_day.representative_hour());

    let (temperature, feels_like, humidity, condition) = if target_day == TargetDay::Today {
        let current = reply.current_condition.first()?;
        (
            current.temp_c.clone(),
            current.feels_like_c.clone(),
            current.humidity.clone(),
            first_desc(&current.weather_desc),
        )
    } else {
        let slot = slot?;
        (
            slot.temp_c.clone(),
            slot.feels_like_c.clone(),
            slot.humidity.clone(),
            first_desc(&slot.weather_desc),
        )
    };

    let precipitation = slot
        .map(|s| format!("{}%", s.chanceofrain))
        .unwrap_or_default();

    Some(WeatherSnapshot {
        location: location.to_string(),
        temperature,
        feels_like,
        max_temp_c: day.max_temp_c.clone(),
        min_temp_c: day.min_temp_c.clone(),
        humidity,
        precipitation,
        condition,
    })
}
