//! # pngopt - PNG 批量压缩转换工具
//!
//! 扫描目录中的 PNG 图片，统一压缩转换为体积优化的 JPEG。
//!
//! ## 转换流程
//! - 解码 PNG，透明像素合成到白色背景
//! - 宽度超限时按比例缩小（Lanczos3）
//! - 按指定质量编码为同名 `.jpg`，可选删除原图
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs      (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (文件收集与批处理)
//!   │     └── convert/ (单文件转换管线)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod convert;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
