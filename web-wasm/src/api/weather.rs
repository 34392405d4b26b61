//! 天气查询（wttr.in，免认证）
//!
//! 天气只是锦上添花：任何失败（网络、非2xx、响应解码）都降级为
//! None 并打一条控制台日志，绝不让整次请求失败

use outfit_ai_common::types::{Selection, WeatherSnapshot};
use outfit_ai_common::weather::{snapshot_for, WttrReply};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const WEATHER_API_URL: &str = "https://wttr.in";

/// 查询出行地点的天气快照，失败时降级为 None
pub async fn fetch_weather(selection: &Selection) -> Option<WeatherSnapshot> {
    match try_fetch(selection).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("天气查询失败，本次按无天气数据继续: {:?}", e).into(),
            );
            None
        }
    }
}

async fn try_fetch(selection: &Selection) -> Result<Option<WeatherSnapshot>, JsValue> {
    let encoded = String::from(js_sys::encode_uri_component(&selection.location));
    let url = format!("{}/{}?format=j1", WEATHER_API_URL, encoded);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("weather API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let reply: WttrReply = serde_wasm_bindgen::from_value(json)
        .map_err(|e| JsValue::from_str(&format!("weather decode error: {}", e)))?;

    Ok(snapshot_for(
        &reply,
        &selection.location,
        selection.target_day,
        selection.time_of_day,
    ))
}
