//! # PNG 文件收集器
//!
//! 扫描目标目录，收集扩展名大小写不敏感匹配 png 的文件。
//!
//! ## 功能
//! - 大小写不敏感匹配（.png / .PNG / .PnG）
//! - 结果按路径排序，保证报告顺序可复现
//! - 默认只扫描目录第一层，可选递归
//!
//! ## 依赖关系
//! - 被 `commands/optimize.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{PngoptError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// PNG 文件收集器
pub struct PngCollector {
    /// 输入目录
    input: PathBuf,
    /// 是否递归子目录
    recursive: bool,
}

impl PngCollector {
    /// 创建新的收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            recursive: false,
        }
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的 PNG 文件，按路径排序
    ///
    /// 路径不存在或不是目录时返回 `DirectoryNotFound`；
    /// 目录存在但没有匹配文件时返回空列表，不算错误。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.input.is_dir() {
            return Err(PngoptError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| is_png(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        Ok(files)
    }
}

/// 判断扩展名是否大小写不敏感等于 png
fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_png_case_insensitive() {
        assert!(is_png(Path::new("a.png")));
        assert!(is_png(Path::new("B.PNG")));
        assert!(is_png(Path::new("c.PnG")));
        assert!(!is_png(Path::new("d.jpg")));
        assert!(!is_png(Path::new("png")));
        assert!(!is_png(Path::new(".png")));
    }

    #[test]
    fn test_collect_is_sorted_and_top_level_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"x").unwrap();
        fs::write(dir.path().join("A.PNG"), b"x").unwrap();
        fs::write(dir.path().join("c.jpg"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("d.png"), b"x").unwrap();

        let files = PngCollector::new(dir.path().to_path_buf()).collect().unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("A.PNG"), dir.path().join("b.png")]
        );
    }

    #[test]
    fn test_collect_recursive_includes_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("d.png"), b"x").unwrap();

        let files = PngCollector::new(dir.path().to_path_buf())
            .recursive(true)
            .collect()
            .unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = PngCollector::new(PathBuf::from("/no/such/dir"))
            .collect()
            .unwrap_err();
        assert!(matches!(err, PngoptError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_plain_file_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.png");
        fs::write(&file, b"x").unwrap();

        let err = PngCollector::new(file).collect().unwrap_err();
        assert!(matches!(err, PngoptError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let files = PngCollector::new(dir.path().to_path_buf()).collect().unwrap();
        assert!(files.is_empty());
    }
}
