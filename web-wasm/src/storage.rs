//! API Key 的读写（localStorage + 编译期环境变量）
//!
//! 生成式服务的 Key 有两个来源:
//! 1. 构建时注入的环境变量，整个会话只读，永不落盘
//! 2. 浏览器 localStorage，由用户在设置面板显式保存/清除
//!
//! 图片搜索服务的 Key 只支持环境变量注入，没有对应的界面

use gloo::storage::{LocalStorage, Storage};

const API_KEY_STORAGE_KEY: &str = "weather-outfit-api-key";

/// 构建时注入的生成式 API Key
pub const ENV_API_KEY: Option<&str> = option_env!("DEEPSEEK_API_KEY");

/// 构建时注入的图片搜索 API Key
pub const ENV_IMAGE_API_KEY: Option<&str> = option_env!("PEXELS_API_KEY");

/// 环境变量注入的生成式 Key 是否生效
pub fn is_env_key() -> bool {
    ENV_API_KEY.map(|key| !key.is_empty()).unwrap_or(false)
}

/// 启动时加载 Key：环境变量优先，其次 localStorage
pub fn load_api_key() -> String {
    if let Some(key) = ENV_API_KEY {
        if !key.is_empty() {
            return key.to_string();
        }
    }
    let stored: Result<String, _> = LocalStorage::get(API_KEY_STORAGE_KEY);
    stored.unwrap_or_default()
}

/// 保存用户输入的 Key（环境变量生效时拒绝覆盖）
pub fn save_api_key(key: &str) -> Result<(), String> {
    if is_env_key() {
        return Err("当前使用环境变量注入的 API Key，无需保存".to_string());
    }
    LocalStorage::set(API_KEY_STORAGE_KEY, key).map_err(|e| format!("保存失败: {:?}", e))
}

/// 清除本地保存的 Key
pub fn clear_api_key() {
    LocalStorage::delete(API_KEY_STORAGE_KEY);
}
