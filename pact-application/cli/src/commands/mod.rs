//! CLI 命令处理模块

pub mod args;
pub mod common; // 公共工具函数
pub mod verify;
pub mod version;
