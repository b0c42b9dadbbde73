//! # 缩小策略
//!
//! 宽度超过上限的图像按比例缩小到上限宽度，保持纵横比，
//! 使用 Lanczos3 重采样保证画质；不超过上限的图像保持原尺寸，
//! 从不放大。
//!
//! ## 依赖关系
//! - 被 `convert/mod.rs` 调用
//! - 使用 `image` crate 的 `imageops`

use image::imageops::{self, FilterType};
use image::RgbImage;

/// 缩放信息：(原宽, 原高, 新宽, 新高)
pub type ResizeInfo = (u32, u32, u32, u32);

/// 按需把图像缩小到不超过 `max_width` 的宽度
///
/// 返回（可能缩小后的）图像和缩放信息；未缩放时信息为 `None`。
pub fn shrink_to_width(img: RgbImage, max_width: u32) -> (RgbImage, Option<ResizeInfo>) {
    match target_dimensions(img.width(), img.height(), max_width) {
        Some((w, h)) => {
            let (from_w, from_h) = (img.width(), img.height());
            let resized = imageops::resize(&img, w, h, FilterType::Lanczos3);
            (resized, Some((from_w, from_h, w, h)))
        }
        None => (img, None),
    }
}

/// 计算缩小后的目标尺寸
///
/// 宽度不超过 `max_width` 时返回 `None`（不缩放、不放大）。
/// 高度按宽度比例四舍五入，且至少为 1 像素。
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width {
        return None;
    }
    let ratio = max_width as f64 / width as f64;
    let new_height = ((height as f64 * ratio).round() as u32).max(1);
    Some((max_width, new_height))
}
