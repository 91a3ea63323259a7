//! gossip 模块 - SRD-with-RevData gossip 请求
//!
//! 提供 gossip 请求载荷类型与同步阻塞的客户端

// 模块声明
pub mod client;
pub mod request;

// 重新导出公共 API
pub use client::{GossipClient, GossipClientConfig, GOSSIP_PATH};
pub use request::SrdGossipRequest;
