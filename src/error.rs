//! # 统一错误处理模块
//!
//! 定义 pngopt 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分级
//! - 致命错误：`DirectoryNotFound`，由 `main` 打印后以非零状态退出
//! - 单文件错误：读取/解码/编码/写入失败只标记该文件失败，批处理继续
//! - 警告级错误：`DeleteError` 仅作为警告上报，转换本身仍算成功
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// pngopt 统一错误类型
#[derive(Error, Debug)]
pub enum PngoptError {
    // ─────────────────────────────────────────────────────────────
    // 目录级错误（致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 单文件 I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}\nReason: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}\nReason: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete original: {path}\nReason: {source}")]
    DeleteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 编解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode image: {path}\nReason: {source}")]
    DecodeError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode JPEG: {path}\nReason: {source}")]
    EncodeError {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PngoptError>;
