use std::time::Duration;

use serde::{Deserialize, Serialize};

/// 未显式配置时的调用超时
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// 未显式配置时的采样温度
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// 客户端级默认配置 同一个 LLMClient 的所有调用共享
///
/// 字段为 `None` 时的兜底顺序 请求级覆盖优先 其次这里的默认值 最后由各后端自行决定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LLMConfig {
    /// API 凭证 对 Ollama 这类本地后端 允许携带以 `http` 开头的 base URL 覆盖默认端点
    pub credential: Option<String>,
    /// 模型名称 缺省时由各后端使用自身的默认模型
    pub model: Option<String>,
    /// 单次调用的超时时间 覆盖整个请求 包括连接与读取响应体
    pub timeout: Duration,
    /// 默认采样温度
    pub temperature: Option<f32>,
    /// 默认输出 token 上限
    pub max_output_tokens: Option<u32>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            credential: None,
            model: None,
            timeout: DEFAULT_TIMEOUT,
            temperature: Some(DEFAULT_TEMPERATURE),
            max_output_tokens: None,
        }
    }
}
