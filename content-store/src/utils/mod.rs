//! 工具模块 - 日志初始化与输入校验

pub mod logger;
pub mod validation;

pub use logger::init_logger;
