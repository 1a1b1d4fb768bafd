// パイプラインで流れるデータ型定義

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// ワーカー識別子（1始まり）
pub type WorkerId = usize;

/// タスク - 文字列ラベルで識別される作業単位
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    label: String,
}

impl Task {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// `Task-1` から `Task-<count>` までを順に生成する遅延シーケンス
pub fn task_sequence(count: usize) -> impl Iterator<Item = Task> + Send + 'static {
    (1..=count).map(|n| Task::new(format!("Task-{n}")))
}

/// ワーカーが1タスクを処理した結果
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskResult {
    pub worker_id: WorkerId,
    pub task: Task,
}

impl TaskResult {
    pub fn new(worker_id: WorkerId, task: Task) -> Self {
        Self { worker_id, task }
    }

    /// 出力ファイルに書き込む1行（改行なし）
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Worker {} processed {}", self.worker_id, self.task)
    }
}

/// パイプライン全体の状態遷移
/// INIT → RUNNING → DRAINING → CLOSING → DONE
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PipelineState {
    Init,
    Running,
    Draining,
    Closing,
    Done,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "INIT",
            Self::Running => "RUNNING",
            Self::Draining => "DRAINING",
            Self::Closing => "CLOSING",
            Self::Done => "DONE",
        };
        f.write_str(name)
    }
}

/// ワーカー終了時の報告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerReport {
    pub worker_id: WorkerId,
    pub tasks_processed: usize,
}

/// パイプライン実行全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineSummary {
    pub total_tasks: usize,
    pub results_written: usize,
    pub workers: Vec<WorkerReport>,
    pub output_location: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

impl PipelineSummary {
    /// 全ワーカーが処理したタスク数の合計
    pub fn tasks_processed(&self) -> usize {
        self.workers.iter().map(|w| w.tasks_processed).sum()
    }
}
