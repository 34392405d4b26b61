//! 错误类型定义

use thiserror::Error;

/// 共通错误类型
///
/// 只有生成式接口的失败会以错误形式向上传播；
/// 天气源与图片源的失败在各自调用点就地降级，不会出现在这里
#[derive(Error, Debug)]
pub enum Error {
    #[error("尚未配置 API Key，请先在设置中填写")]
    ConfigMissing,

    #[error("API Key 无效或已被拒绝: {0}")]
    Auth(String),

    #[error("网络请求失败: {0}")]
    Transport(String),

    #[error("AI 回复解析失败: {0}")]
    Parse(String),
}

impl Error {
    /// 是否属于凭证问题（控制层据此决定是否重新打开设置面板）
    pub fn is_credential_error(&self) -> bool {
        matches!(self, Error::ConfigMissing | Error::Auth(_))
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;
