//! ct-gossip - CT monitor 手工调试工具
//!
//! 向本地运行的 CT monitor 发送 SRD-with-RevData gossip 请求，
//! 并原样打印响应文本。
//!
//! ## 模块
//!
//! - **gossip**: gossip 请求载荷与客户端

pub mod gossip;

// 重新导出主要的公共 API
pub use gossip::{GossipClient, GossipClientConfig, SrdGossipRequest, GOSSIP_PATH};
