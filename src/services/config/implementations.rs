// 設定管理の具象実装

use crate::core::{PipelineConfig, PipelineError, PipelineResult};
use std::path::PathBuf;
use std::time::Duration;

/// ワーカー数（固定）
pub const WORKER_COUNT: usize = 4;
/// 生成タスク数（固定）
pub const TASK_COUNT: usize = 10;
/// キュー容量（固定）
pub const QUEUE_CAPACITY: usize = 10;
/// 1タスクあたりの擬似作業時間
pub const WORK_DELAY: Duration = Duration::from_millis(200);
/// 結果ファイルのパス
pub const OUTPUT_PATH: &str = "results.txt";

/// デフォルト設定実装
///
/// バイナリは常に `Default` の値で動く。`with_*` はライブラリ利用とテスト用
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    worker_count: usize,
    task_count: usize,
    queue_capacity: usize,
    work_delay: Duration,
    output_path: PathBuf,
}

impl DefaultPipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_task_count(mut self, task_count: usize) -> Self {
        self.task_count = task_count;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn with_work_delay(mut self, work_delay: Duration) -> Self {
        self.work_delay = work_delay;
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            worker_count: WORKER_COUNT,
            task_count: TASK_COUNT,
            queue_capacity: QUEUE_CAPACITY,
            work_delay: WORK_DELAY,
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn task_count(&self) -> usize {
        self.task_count
    }

    fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    fn work_delay(&self) -> Duration {
        self.work_delay
    }

    fn output_path(&self) -> PathBuf {
        self.output_path.clone()
    }
}

/// 起動前の設定検証
pub fn validate_config<C: PipelineConfig + ?Sized>(config: &C) -> PipelineResult<()> {
    if config.worker_count() == 0 {
        return Err(PipelineError::configuration(
            "worker_count は1以上である必要があります",
        ));
    }
    // tokio::sync::mpsc::channel は容量0でパニックする
    if config.queue_capacity() == 0 {
        return Err(PipelineError::configuration(
            "queue_capacity は1以上である必要があります",
        ));
    }
    Ok(())
}
