//! # optimize 命令实现
//!
//! 批量将目录下的 PNG 文件压缩转换为 JPEG。
//!
//! ## 功能
//! - 扫描目录收集 PNG 文件（可选递归）
//! - 逐个转换：解码 -> 白底合成 -> 按需缩小 -> JPEG 编码
//! - 打印每个文件的大小对比与缩减比例
//! - 汇总成功/失败统计，失败不中断批次
//!
//! ## 依赖关系
//! - 使用 `cli.rs` 定义的参数
//! - 使用 `batch/` 收集文件并驱动批处理
//! - 使用 `convert/` 执行单文件转换
//! - 使用 `utils/output.rs` 打印报告

use crate::batch::{runner, PngCollector, ProcessResult};
use crate::cli::Cli;
use crate::convert::{self, ConversionReport, ConversionRequest};
use crate::error::Result;
use crate::utils::output;

/// 执行 optimize 命令
pub fn execute(args: Cli) -> Result<()> {
    output::print_header("PNG to JPEG Optimization");

    // 收集输入文件；目录不存在是唯一的致命错误
    let files = PngCollector::new(args.input_dir.clone())
        .recursive(args.recursive)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No PNG files found in {}",
            args.input_dir.display()
        ));
        return Ok(());
    }

    output::print_info(&format!(
        "Found {} PNG file(s) in {}",
        files.len(),
        args.input_dir.display()
    ));
    output::print_info(&format!(
        "Quality: {}, Max Width: {}px",
        args.quality, args.max_width
    ));
    output::print_info(&format!("Delete originals: {}", !args.keep_original));
    println!();

    // 逐个处理，单个文件的失败只记录
    let result = runner::run(&files, |file, pb| {
        let request = ConversionRequest {
            source: file.to_path_buf(),
            quality: args.quality,
            max_width: args.max_width,
            delete_original: !args.keep_original,
        };

        match convert::optimize_file(&request) {
            Ok(report) => {
                pb.suspend(|| print_report(&report));
                ProcessResult::Success(report.dest_name)
            }
            Err(e) => {
                pb.suspend(|| {
                    output::print_error(&format!("{}", e));
                    output::print_separator();
                });
                ProcessResult::Failed(file.display().to_string(), e.to_string())
            }
        }
    });

    output::print_done(&format!(
        "Completed: {}/{} files optimized successfully",
        result.success,
        result.total()
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 打印单个文件的转换报告
fn print_report(report: &ConversionReport) {
    output::print_conversion(&report.source_name, &report.dest_name);
    output::print_detail(&format!(
        "{} -> {} (↓ {:.1}%)",
        output::format_kb(report.original_bytes),
        output::format_kb(report.converted_bytes),
        report.reduction_percent()
    ));
    if let Some((old_w, old_h, new_w, new_h)) = report.resized {
        output::print_detail(&format!(
            "Resized: {}x{} -> {}x{}",
            old_w, old_h, new_w, new_h
        ));
    }
    if report.deleted_original {
        output::print_detail("Deleted original PNG");
    }
    if let Some(err) = &report.delete_error {
        output::print_warning(err);
    }
    output::print_separator();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PngoptError;
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn cli_for(input_dir: &Path) -> Cli {
        Cli {
            input_dir: input_dir.to_path_buf(),
            quality: 85,
            max_width: 1920,
            keep_original: false,
            recursive: false,
        }
    }

    fn write_png(path: &Path) {
        RgbImage::from_pixel(16, 16, Rgb([120, 80, 40]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_execute_continues_past_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("a.png"));
        fs::write(dir.path().join("b.png"), b"not a png at all").unwrap();
        write_png(&dir.path().join("c.png"));

        execute(cli_for(dir.path())).unwrap();

        // 有效文件转换成功且原图被删除
        assert!(dir.path().join("a.jpg").exists());
        assert!(dir.path().join("c.jpg").exists());
        assert!(!dir.path().join("a.png").exists());
        assert!(!dir.path().join("c.png").exists());

        // 坏文件原样保留，不产生输出
        assert!(dir.path().join("b.png").exists());
        assert!(!dir.path().join("b.jpg").exists());
    }

    #[test]
    fn test_execute_missing_directory_is_fatal() {
        let err = execute(cli_for(&PathBuf::from("/no/such/dir"))).unwrap_err();
        assert!(matches!(err, PngoptError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_execute_empty_directory_is_clean_noop() {
        let dir = tempfile::tempdir().unwrap();
        execute(cli_for(dir.path())).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_execute_keep_original() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("logo.png"));

        let mut cli = cli_for(dir.path());
        cli.keep_original = true;
        execute(cli).unwrap();

        assert!(dir.path().join("logo.png").exists());
        assert!(dir.path().join("logo.jpg").exists());
    }

    #[test]
    fn test_execute_recursive_reaches_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("icons")).unwrap();
        write_png(&dir.path().join("icons").join("nested.png"));

        let mut cli = cli_for(dir.path());
        cli.recursive = true;
        execute(cli).unwrap();

        assert!(dir.path().join("icons").join("nested.jpg").exists());
        assert!(!dir.path().join("icons").join("nested.png").exists());
    }
}
