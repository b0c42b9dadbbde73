//! # JPEG 编码
//!
//! 将归一化后的 RGB 图像编码为指定质量的 JPEG 字节流。
//! 先编码到内存缓冲区再写盘，这样能直接统计输出大小，
//! 也能区分编码失败和写盘失败。
//!
//! ## 依赖关系
//! - 被 `convert/mod.rs` 调用
//! - 使用 `image` crate 的 `JpegEncoder`

use image::codecs::jpeg::JpegEncoder;
use image::{ImageResult, RgbImage};

/// 将 RGB 图像编码为 JPEG 字节流
///
/// `quality` 取值 1-100，由调用方负责钳制。
pub fn encode_jpeg(img: &RgbImage, quality: u8) -> ImageResult<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    img.write_with_encoder(encoder)?;
    Ok(buf)
}
