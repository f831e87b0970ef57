//! # jpcode 库
//!
//! 本库包含绿色-Alpha 通道 PNG 文本编解码工具的核心逻辑。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod constants;
pub mod handler;
