//! 穿搭灵感配图搜索（Pexels）
//!
//! 可选环节：Key 未配置、请求失败、响应解码失败都返回空列表，
//! 永远不会让整次请求失败

use outfit_ai_common::types::InspirationImage;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::storage;

const IMAGE_API_URL: &str = "https://api.pexels.com/v1/search";

/// 最多展示的配图数量
pub const MAX_IMAGES: usize = 3;

#[derive(Deserialize)]
struct PexelsResponse {
    #[serde(default)]
    photos: Vec<InspirationImage>,
}

/// 按搜索词取最多3张配图，任何失败都降级为空列表
pub async fn search_images(query: &str) -> Vec<InspirationImage> {
    let Some(api_key) = storage::ENV_IMAGE_API_KEY.filter(|key| !key.is_empty()) else {
        return Vec::new();
    };

    match try_search(api_key, query).await {
        Ok(mut photos) => {
            photos.truncate(MAX_IMAGES);
            photos
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("配图搜索失败，本次不展示配图: {:?}", e).into());
            Vec::new()
        }
    }
}

async fn try_search(api_key: &str, query: &str) -> Result<Vec<InspirationImage>, JsValue> {
    let encoded = String::from(js_sys::encode_uri_component(query));
    let url = format!("{}?query={}&per_page={}", IMAGE_API_URL, encoded, MAX_IMAGES);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Authorization", api_key)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("image API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: PexelsResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| JsValue::from_str(&format!("image decode error: {}", e)))?;

    Ok(response.photos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pexels_response_deserialize() {
        let json = r#"{
            "page": 1,
            "per_page": 3,
            "photos": [
                {
                    "id": 1181424,
                    "photographer": "someone",
                    "src": {
                        "original": "https://images.pexels.com/1181424/original.jpg",
                        "large": "https://images.pexels.com/1181424/large.jpg",
                        "medium": "https://images.pexels.com/1181424/medium.jpg"
                    },
                    "alt": "Woman in casual outfit"
                }
            ]
        }"#;

        let response: PexelsResponse = serde_json::from_str(json).expect("反序列化失败");
        assert_eq!(response.photos.len(), 1);
        assert_eq!(response.photos[0].id, 1181424);
        assert!(response.photos[0].src.large.contains("large.jpg"));
        assert_eq!(response.photos[0].alt, "Woman in casual outfit");
    }

    #[test]
    fn test_pexels_response_missing_photos() {
        let response: PexelsResponse = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(response.photos.is_empty());
    }
}
