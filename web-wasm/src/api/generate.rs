//! 生成式穿搭建议（DeepSeek Chat Completions）
//!
//! 单条用户消息进、单条文本补全出。回复文本交给共通库的
//! 修复+解析流程，这里只负责传输与鉴权错误的归类

use outfit_ai_common::{parse_suggestion, Error, Result, SuggestionResponse};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const CHAT_API_URL: &str = "https://api.deepseek.com/chat/completions";
const CHAT_MODEL: &str = "deepseek-chat";

/// Chat Completions 请求
#[derive(Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Chat Completions 响应
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

fn transport(e: JsValue) -> Error {
    Error::Transport(format!("{:?}", e))
}

/// 请求一次穿搭建议并解析
///
/// 凭证被拒 -> Error::Auth；传输失败 -> Error::Transport；
/// 回复无法修复解析 -> Error::Parse
pub async fn request_suggestion(api_key: &str, prompt: &str) -> Result<SuggestionResponse> {
    let raw = call_chat_api(api_key, prompt).await?;
    parse_suggestion(&raw)
}

/// 调用 Chat Completions 接口，返回首个补全文本
async fn call_chat_api(api_key: &str, prompt: &str) -> Result<String> {
    let chat_request = ChatRequest {
        model: CHAT_MODEL,
        messages: vec![ChatMessage {
            role: "user",
            content: prompt.to_string(),
        }],
        temperature: 0.7,
    };
    let body = serde_json::to_string(&chat_request)
        .map_err(|e| Error::Transport(format!("请求序列化失败: {}", e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(CHAT_API_URL, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;
    request
        .headers()
        .set("Authorization", &format!("Bearer {}", api_key))
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window 不可用".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if resp.status() == 401 || resp.status() == 403 {
        return Err(Error::Auth(format!("HTTP {}", resp.status())));
    }
    if !resp.ok() {
        return Err(Error::Transport(format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json().map_err(transport)?)
        .await
        .map_err(transport)?;
    let response: ChatResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Transport(format!("响应解码失败: {}", e)))?;

    response
        .choices
        .first()
        .map(|c| c.message.content.clone())
        .ok_or_else(|| Error::Transport("空的模型回复".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serialize() {
        let request = ChatRequest {
            model: CHAT_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: "测试提示词".to_string(),
            }],
            temperature: 0.7,
        };

        let json = serde_json::to_string(&request).expect("序列化失败");
        assert!(json.contains("\"model\":\"deepseek-chat\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"content\":\"测试提示词\""));
        assert!(json.contains("\"temperature\":0.7"));
    }

    #[test]
    fn test_chat_response_deserialize() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "{\"outfit\": {\"summary\": \"简洁\"}}"
                },
                "finish_reason": "stop"
            }]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).expect("反序列化失败");
        assert_eq!(response.choices.len(), 1);
        assert!(response.choices[0].message.content.contains("简洁"));
    }

    #[test]
    fn test_chat_response_empty_choices() {
        let json = r#"{"choices": []}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.choices.is_empty());
    }
}
