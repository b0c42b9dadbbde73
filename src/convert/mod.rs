//! # 图像转换模块
//!
//! 将单个 PNG 源文件转换为体积优化的 JPEG 文件。
//!
//! ## 转换流程
//! 1. 读取源文件大小并解码
//! 2. 模式归一化（透明度合成到白色背景，统一为 RGB8）
//! 3. 宽度超限的图像按比例缩小（Lanczos3）
//! 4. 按指定质量编码为 JPEG，写入同目录下的 `<stem>.jpg`
//! 5. 可选删除原始 PNG（尽力而为，失败只降级为警告）
//!
//! 转换函数本身不打印任何内容，结果通过 `ConversionReport` 返回，
//! 由调用方负责输出，便于用伪造的处理器测试批处理逻辑。
//!
//! ## 依赖关系
//! - 被 `commands/optimize.rs` 调用
//! - 使用 `image` crate 进行解码/缩放/编码
//! - 子模块: normalize, resize, encode

pub mod encode;
pub mod normalize;
pub mod resize;

use crate::error::{PngoptError, Result};

use std::fs;
use std::path::{Path, PathBuf};

/// 单文件转换请求
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// 源 PNG 文件路径
    pub source: PathBuf,
    /// JPEG 质量（1-100，超出范围会被钳制）
    pub quality: u8,
    /// 最大输出宽度（像素）
    pub max_width: u32,
    /// 转换成功后删除原始文件
    pub delete_original: bool,
}

/// 单文件转换报告
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// 源文件名
    pub source_name: String,
    /// 目标文件名
    pub dest_name: String,
    /// 原始文件大小（字节）
    pub original_bytes: u64,
    /// 转换后文件大小（字节）
    pub converted_bytes: u64,
    /// 最终输出尺寸 (宽, 高)
    pub dimensions: (u32, u32),
    /// 缩放信息：(原宽, 原高, 新宽, 新高)，未缩放为 None
    pub resized: Option<resize::ResizeInfo>,
    /// 原始文件是否已删除
    pub deleted_original: bool,
    /// 删除失败的错误信息（转换本身仍算成功）
    pub delete_error: Option<String>,
}

impl ConversionReport {
    /// 体积缩减百分比
    ///
    /// 原始大小为零时定义为 0%，避免除零。
    pub fn reduction_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (self.original_bytes as f64 - self.converted_bytes as f64) / self.original_bytes as f64
            * 100.0
    }
}

/// 转换单个 PNG 文件为优化的 JPEG
///
/// 输出文件写在源文件所在目录，同名但扩展名为 `.jpg`。
/// 任何错误只影响当前文件，由调用方决定是否继续批处理。
pub fn optimize_file(request: &ConversionRequest) -> Result<ConversionReport> {
    let source = &request.source;

    // 原始文件大小
    let original_bytes = fs::metadata(source)
        .map_err(|e| PngoptError::FileReadError {
            path: source.display().to_string(),
            source: e,
        })?
        .len();

    // 解码
    let img = image::open(source).map_err(|e| PngoptError::DecodeError {
        path: source.display().to_string(),
        source: e,
    })?;

    // 模式归一化 + 按需缩小
    let rgb = normalize::to_opaque_rgb(img);
    let (rgb, resized) = resize::shrink_to_width(rgb, request.max_width);

    // JPEG 编码（内存中）
    let quality = request.quality.clamp(1, 100);
    let jpeg_bytes = encode::encode_jpeg(&rgb, quality).map_err(|e| PngoptError::EncodeError {
        path: source.display().to_string(),
        source: e,
    })?;

    // 写入目标文件
    let dest = destination_path(source);
    fs::write(&dest, &jpeg_bytes).map_err(|e| PngoptError::FileWriteError {
        path: dest.display().to_string(),
        source: e,
    })?;

    let mut report = ConversionReport {
        source_name: file_name_string(source),
        dest_name: file_name_string(&dest),
        original_bytes,
        converted_bytes: jpeg_bytes.len() as u64,
        dimensions: (rgb.width(), rgb.height()),
        resized,
        deleted_original: false,
        delete_error: None,
    };

    // 删除原始文件：JPEG 已经写成，删除失败不改变转换结果
    if request.delete_original {
        match fs::remove_file(source) {
            Ok(()) => report.deleted_original = true,
            Err(e) => {
                report.delete_error = Some(
                    PngoptError::DeleteError {
                        path: source.display().to_string(),
                        source: e,
                    }
                    .to_string(),
                );
            }
        }
    }

    Ok(report)
}

/// 构造输出路径：同目录下 `<stem>.jpg`
fn destination_path(source: &Path) -> PathBuf {
    source.with_extension("jpg")
}

/// 取文件名部分用于展示
fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
