//! # 批量执行器
//!
//! 顺序执行批量处理任务。
//!
//! ## 功能
//! - 逐个文件顺序处理，单个文件失败不中断批次
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/optimize.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条

use crate::utils::progress;

use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 处理成功
    Success(String),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Success(_) => self.success += 1,
            ProcessResult::Failed(path, err) => {
                self.failed += 1;
                self.failures.push((path, err));
            }
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 顺序处理文件列表
///
/// 处理回调可通过进度条的 `suspend` 在不打乱进度条绘制的前提下输出日志。
pub fn run<F>(files: &[PathBuf], mut processor: F) -> BatchResult
where
    F: FnMut(&Path, &ProgressBar) -> ProcessResult,
{
    let pb = progress::create_progress_bar(files.len() as u64, "Optimizing");

    let mut batch_result = BatchResult::default();
    for file in files {
        let result = processor(file, &pb);
        batch_result.merge(result);
        pb.inc(1);
    }

    pb.finish_and_clear();
    batch_result
}
