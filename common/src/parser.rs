//! 模型回复的修复与解析
//!
//! 生成式模型即使被要求只输出JSON，也经常带上代码围栏或前后说明文字。
//! 这里先做启发式修复（去围栏、截取首个 `{` 到最后一个 `}`），再交给
//! serde 解析。修复假设回复中恰好有一个顶层对象；出现多个候选对象时
//! 不做消歧，该行为与线上提示词契约绑定，不要悄悄加固。

use crate::error::{Error, Result};
use crate::types::SuggestionResponse;

/// 修复模型原始回复，返回假定的JSON对象子串
///
/// 步骤:
/// 1. 去掉首尾的 ```json / ``` 围栏
/// 2. 截取首个 `{` 到最后一个 `}`（含），丢弃两侧散文
///
/// # Returns
/// * `Ok(&str)` - 截取出的JSON子串
/// * `Err(Error::Parse)` - 回复中不存在成对的花括号
pub fn repair_json(raw: &str) -> Result<&str> {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    let text = text.trim();

    let start = text
        .find('{')
        .ok_or_else(|| Error::Parse("回复中未找到JSON对象".into()))?;
    let end = text
        .rfind('}')
        .filter(|&end| end >= start)
        .ok_or_else(|| Error::Parse("回复中的JSON对象不完整".into()))?;

    Ok(&text[start..=end])
}

/// 修复并解析为穿搭建议结构
pub fn parse_suggestion(raw: &str) -> Result<SuggestionResponse> {
    let json_str = repair_json(raw)?;
    serde_json::from_str(json_str).map_err(|e| Error::Parse(format!("JSON解析错误: {}", e)))
}
