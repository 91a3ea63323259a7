//! gossip 请求载荷

use serde::{Deserialize, Serialize};

/// SRD-with-RevData gossip 请求载荷
///
/// 序列化后的字段名与 monitor 端点约定一致（PascalCase）：
///
/// ```json
/// {"LogId": "<base64>", "PercentRevoked": 10, "TotalCerts": 100}
/// ```
///
/// `LogId` 是 base64 编码的 log 标识，作为不透明字符串处理，不做解码。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SrdGossipRequest {
    /// base64 编码的 log 标识
    pub log_id: String,
    /// 已吊销证书百分比，取值范围 [0, 100]
    pub percent_revoked: u8,
    /// 证书总数
    pub total_certs: u64,
}

impl SrdGossipRequest {
    /// 创建 gossip 请求载荷
    ///
    /// # 参数
    /// - `log_id`: base64 编码的 log 标识
    /// - `percent_revoked`: 已吊销证书百分比
    /// - `total_certs`: 证书总数
    pub fn new(log_id: impl Into<String>, percent_revoked: u8, total_certs: u64) -> Self {
        Self {
            log_id: log_id.into(),
            percent_revoked,
            total_certs,
        }
    }
}
