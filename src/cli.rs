//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数结构
//! - `input_dir`: 待扫描的目录（位置参数）
//! - `-q/--quality`: JPEG 编码质量
//! - `-w/--max-width`: 输出图像最大宽度
//! - `--keep-original`: 转换后保留原始 PNG
//! - `-r/--recursive`: 递归搜索子目录
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/optimize.rs`

use clap::Parser;
use std::path::PathBuf;

/// pngopt - PNG 批量压缩转换工具
#[derive(Parser, Debug)]
#[command(name = "pngopt")]
#[command(version)]
#[command(about = "Batch-convert PNG images to size-optimized JPEG files", long_about = None)]
pub struct Cli {
    /// Directory to scan for PNG files
    #[arg(default_value = "frontend/images")]
    pub input_dir: PathBuf,

    /// JPEG quality (1-100, values outside are clamped)
    #[arg(short, long, default_value_t = 85)]
    pub quality: u8,

    /// Maximum output width in pixels; wider images are downscaled
    #[arg(short = 'w', long, default_value_t = 1920,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: u32,

    /// Keep the original PNG files after conversion
    #[arg(long, default_value_t = false)]
    pub keep_original: bool,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
}
