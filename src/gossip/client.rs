//! gossip 客户端
//!
//! 向本地运行的 CT monitor 发送 SRD-with-RevData gossip 请求

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::request::SrdGossipRequest;

/// gossip 端点路径
pub const GOSSIP_PATH: &str = "/ct/v1/srd-with-revdata-gossip";

/// gossip 客户端的配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GossipClientConfig {
    /// monitor 服务器地址，如 "http://localhost:5000"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时（秒），默认不设置超时，阻塞等待直到响应或连接失败
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for GossipClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// gossip 客户端
///
/// 同步阻塞调用，不做重试，不解析响应内容。
///
/// # 行为说明
/// - 请求方法为 **GET**（端点约定如此），载荷以 JSON 形式放在请求体中
/// - 响应体作为不透明文本原样返回，不检查状态码
/// - 传输层失败（连接拒绝、超时等）直接作为错误向上传播
///
/// # 示例
/// ```no_run
/// use ct_gossip::gossip::{GossipClient, GossipClientConfig, SrdGossipRequest};
///
/// let client = GossipClient::new(GossipClientConfig::default()).unwrap();
/// let request = SrdGossipRequest::new("dGVzdA==", 10, 100);
/// let text = client.send_srd_with_revdata(&request).unwrap();
/// println!("{}", text);
/// ```
pub struct GossipClient {
    /// monitor 服务器地址
    base_url: String,
    /// HTTP 客户端
    client: reqwest::blocking::Client,
}

impl GossipClient {
    /// 创建 gossip 客户端
    ///
    /// # 参数
    /// - `config`: 客户端配置
    pub fn new(config: GossipClientConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::builder()
                .timeout(config.timeout_secs.map(Duration::from_secs))
                .build()?,
        })
    }

    /// 发送 SRD-with-RevData gossip 请求，返回响应文本
    pub fn send_srd_with_revdata(&self, request: &SrdGossipRequest) -> Result<String> {
        let url = format!("{}{}", self.base_url, GOSSIP_PATH);

        log::debug!("sending gossip request: {}", url);

        let resp = self
            .client
            .get(&url)
            .json(request)
            .send()
            .map_err(|e| anyhow!("请求 gossip 端点失败: {}", e))?;

        let text = resp.text().context("读取 gossip 响应失败")?;

        log::debug!("gossip response: {} bytes", text.len());

        Ok(text)
    }
}
