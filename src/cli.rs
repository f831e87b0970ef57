//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款将 UTF-8 文本编码为绿色-Alpha 通道 PNG 图像并可逆向恢复的命令行工具。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款将 UTF-8 文本编码为绿色-Alpha 通道 PNG 图像并可逆向恢复的命令行工具。\n每个字节存入一个像素的绿色通道，Alpha 为 0 的像素标记数据结束。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (编码) 和 decode (解码)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 将文本文件编码为 PNG 图像；不提供文件时读取标准输入。
    #[command(visible_alias = "e")]
    Encode(EncodeArgs),

    /// 从图像中恢复文本并写入标准输出；不提供文件时读取标准输入。
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),
}

/// 'encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 要编码的文本文件路径；每个文件产生一个对应的 .png 图像。
    pub files: Vec<PathBuf>,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 要解码的图像文件路径；恢复出的文本依次写入标准输出。
    pub files: Vec<PathBuf>,
}
