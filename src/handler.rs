//! # 命令处理逻辑模块
//!
//! 包含处理 `encode` 和 `decode` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心编解码函数以及向用户报告结果。
//! 单个文件的失败只写入标准错误流，不会中断批处理中的其余文件。

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::codec;
use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::VecDeque;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// 处理 'Encode' 命令的执行逻辑。
///
/// 对每个给定的文件：读取文本内容并按行规范化、编码为像素网格、
/// 保存为由源文件名派生的 .png 图像，并在标准输出打印
/// "源文件\t目标文件" 的映射。若未给出任何存在的文件，
/// 则改为读取标准输入，并把图像保存为以当前时间戳命名的文件。
///
/// # Arguments
///
/// * `args` - 包含输入文件路径列表的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 单个文件的读取、编码或保存失败只会在标准错误流中报告，
/// 不会作为错误返回，批处理继续执行剩余的文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let mut files = existing_files(args.files);

    if files.is_empty() {
        encode_stdin();
        return Ok(());
    }

    while let Some(file) = files.pop_front() {
        if let Err(error) = encode_file(&file) {
            eprintln!("{error:#}");
        }
    }

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 对每个给定的图像文件：读取并解码，把恢复出的文本写入 `out`。
/// 当处理多个文件时，每个文件的内容前会先写入一行 "路径:"，
/// 以便区分串联在一起的输出。若未给出任何存在的文件，
/// 则改为从标准输入读取单个图像。
///
/// # Arguments
///
/// * `args` - 包含输入图像路径列表的 `DecodeArgs` 结构体。
/// * `out` - 恢复出的文本的目标写入器（通常为标准输出）。
///
/// # Errors
///
/// 单个图像的读取或解码失败只会在标准错误流中报告，
/// 批处理继续执行剩余的文件；仅当向 `out` 写入失败时返回错误。
pub fn handle_decode(args: DecodeArgs, out: &mut impl Write) -> Result<()> {
    let mut files = existing_files(args.files);

    if files.is_empty() {
        return decode_stdin(out);
    }

    let print_filenames = files.len() > 1;
    while let Some(file) = files.pop_front() {
        if print_filenames {
            writeln!(out, "{}:", file.display())?;
        }
        match decode_file(&file) {
            Ok(bytes) => out.write_all(String::from_utf8_lossy(&bytes).as_bytes())?,
            Err(error) => eprintln!("{error:#}"),
        }
    }

    Ok(())
}

/// 根据输入文件名派生 .png 目标路径：替换掉最后一个扩展名。
/// 没有扩展名（无点号或仅有前导点号）时在原名后追加 ".png"，
/// 扩展名已是 "png" 时保持不变。纯路径变换，与文件内容无关。
pub fn png_destination(source: &Path) -> PathBuf {
    source.with_extension("png")
}

/// 将任意字节序列规范化为逐行的 UTF-8 文本：
/// 非法 UTF-8 序列替换为 U+FFFD，行结束符统一为 '\n'，
/// 且每一行（包括最后一行）都以 '\n' 结尾。
pub fn normalize_lines(bytes: &[u8]) -> Vec<u8> {
    let text = String::from_utf8_lossy(bytes);
    let mut normalized = Vec::with_capacity(bytes.len() + 1);

    for line in text.lines() {
        normalized.extend_from_slice(line.as_bytes());
        normalized.push(b'\n');
    }

    normalized
}

/// 过滤掉不存在的输入路径，返回按给定顺序排列的待处理队列。
/// 每个不存在的路径都会在标准错误流中产生一条警告。
fn existing_files(files: Vec<PathBuf>) -> VecDeque<PathBuf> {
    files
        .into_iter()
        .filter(|file| {
            if file.exists() {
                true
            } else {
                eprintln!("{} does not exist", file.to_string_lossy().red().bold());
                false
            }
        })
        .collect()
}

/// 编码单个文件。规范化结果为空时静默跳过，不产生输出文件。
fn encode_file(source: &Path) -> Result<()> {
    let raw = fs::read(source)
        .with_context(|| format!("Could not encode {}", source.to_string_lossy().red().bold()))?;

    let Some(image) = codec::encode(&normalize_lines(&raw)) else {
        return Ok(());
    };

    let destination = png_destination(source);
    image.save(&destination).with_context(|| {
        format!(
            "Could not save encoded {}",
            source.to_string_lossy().red().bold()
        )
    })?;

    println!("{}\t{}", source.display(), destination.display());
    Ok(())
}

/// 解码单个图像文件，返回恢复出的字节序列。
fn decode_file(source: &Path) -> Result<Vec<u8>> {
    let image = image::open(source)
        .with_context(|| format!("Could not read {}", source.to_string_lossy().red().bold()))?;

    Ok(codec::decode(&image.to_rgba8()))
}

/// 编码标准输入：图像保存为以当前 Unix 毫秒时间戳命名的 .png 文件，
/// 并把该文件名打印到标准输出。时间戳只是降低冲突概率的便利默认值，
/// 不保证唯一。
fn encode_stdin() {
    let mut input = Vec::new();
    if let Err(error) = io::stdin().read_to_end(&mut input) {
        eprintln!("Could not encode stdin: {error}");
        return;
    }

    let Some(image) = codec::encode(&normalize_lines(&input)) else {
        return;
    };

    let destination = timestamp_destination();
    match image.save(&destination) {
        Ok(()) => println!("{}", destination.display()),
        Err(error) => eprintln!("Could not save encoded stdin: {error}"),
    }
}

/// 解码标准输入中的单个图像，并把恢复出的文本写入 `out`。
/// 读取或解析失败只在标准错误流中报告，不作为错误返回。
fn decode_stdin(out: &mut impl Write) -> Result<()> {
    let mut input = Vec::new();
    if let Err(error) = io::stdin().read_to_end(&mut input) {
        eprintln!("Could not read stdin: {error}");
        return Ok(());
    }

    match image::load_from_memory(&input) {
        Ok(image) => {
            let bytes = codec::decode(&image.to_rgba8());
            writeln!(out, "{}", String::from_utf8_lossy(&bytes))?;
        }
        Err(error) => eprintln!("Could not read stdin: {error}"),
    }

    Ok(())
}

/// 以当前 Unix 毫秒时间戳生成目标文件名。
fn timestamp_destination() -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();

    PathBuf::from(format!("{millis}.png"))
}
