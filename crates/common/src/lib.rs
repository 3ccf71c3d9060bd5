//! 查询层共享的错误类型、配置与日志初始化
pub mod error;
pub mod config;
pub mod telemetry;

pub use error::*;
pub use config::*;
pub use telemetry::*;
