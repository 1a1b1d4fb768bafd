// パイプラインのトレイト定義
// 差し替え可能な抽象化インターフェースを定義

use super::error::PipelineResult;
use super::types::{PipelineState, PipelineSummary, Task, TaskResult, WorkerId, WorkerReport};
use async_trait::async_trait;
use mockall::automock;
use std::path::PathBuf;
use std::time::Duration;

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// ワーカー数
    fn worker_count(&self) -> usize;

    /// 生成するタスク数
    fn task_count(&self) -> usize;

    /// タスクキュー・結果キューの容量
    fn queue_capacity(&self) -> usize;

    /// 1タスクあたりの擬似作業時間
    fn work_delay(&self) -> Duration;

    /// 結果ファイルのパス
    fn output_path(&self) -> PathBuf;
}

/// 1タスク分の作業を抽象化するトレイト
#[automock]
#[async_trait]
pub trait TaskProcessor: Send + Sync {
    /// 作業を実行する（失敗しない）
    async fn perform(&self, worker_id: WorkerId, task: &Task);
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait PipelineReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_tasks: usize, worker_count: usize);

    /// 状態遷移の報告
    async fn report_state(&self, state: PipelineState);

    /// 結果1件を書き込んだときの報告
    async fn report_result(&self, result: &TaskResult);

    /// ワーカー終了時の報告
    async fn report_worker_finished(&self, report: &WorkerReport);

    /// エラー発生時の報告
    async fn report_error(&self, context: &str, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, summary: &PipelineSummary);
}

/// 結果行の永続化抽象化トレイト
#[automock]
#[async_trait]
pub trait ResultPersistence: Send + Sync {
    /// 出力先を新規作成する（既存内容は切り詰める）
    async fn open(&self) -> PipelineResult<()>;

    /// 1行追記（改行は実装側で付与）
    async fn append_line(&self, line: &str) -> PipelineResult<()>;

    /// フラッシュしてクローズする。複数回呼んでもよい
    async fn finalize(&self) -> PipelineResult<()>;

    /// 出力先の表示名
    fn location(&self) -> String;
}
