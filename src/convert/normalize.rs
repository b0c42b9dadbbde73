//! # 图像模式归一化
//!
//! JPEG 不支持透明度，编码前必须把带 alpha 通道的图像合成到不透明
//! 背景上，否则透明区域会变成黑色或直接编码失败。索引色（调色板）
//! PNG 在解码阶段已被 `image` 扩展为携带完整 alpha 的 RGBA 表示，
//! 因此这里统一按 alpha 通道处理，半透明的索引像素也能正确合成。
//!
//! ## 依赖关系
//! - 被 `convert/mod.rs` 调用
//! - 使用 `image` crate

use image::{DynamicImage, RgbImage, RgbaImage};

/// 将任意解码模式归一化为不透明 RGB8
///
/// - 带 alpha 的模式（RGBA、灰度+alpha、带透明度的调色板 PNG）
///   合成到白色背景
/// - 其他非 RGB8 模式（灰度、16 位色等）直接转换为 RGB8
/// - 已是 RGB8 的图像原样返回，逐像素不变
pub fn to_opaque_rgb(img: DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        img if img.color().has_alpha() => flatten_onto_white(&img.to_rgba8()),
        img => img.to_rgb8(),
    }
}

/// 将 RGBA 图像按 alpha 加权合成到白色背景
///
/// alpha = 255 时保留前景色，alpha = 0 时得到纯白，中间线性插值。
fn flatten_onto_white(rgba: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let a = src[3] as u16;
        for c in 0..3 {
            // 整数混合：fg*a + 255*(255-a)，加 127 做四舍五入后除以 255
            dst[c] = ((src[c] as u16 * a + 255 * (255 - a) + 127) / 255) as u8;
        }
    }
    out
}
