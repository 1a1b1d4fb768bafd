// Pipeline - Task Source → Worker Pool → Completion Tracker → Result Sink
// メインパイプライン機能とオーケストレーション

use super::{
    consumer::spawn_workers, producer::spawn_task_source, tracker::spawn_completion_tracker,
};
use crate::{
    core::{
        bounded_queue, task_sequence, PipelineConfig, PipelineReporter, PipelineResult,
        PipelineState, PipelineSummary, ResultPersistence, Task, TaskProcessor, TaskResult,
    },
    services::{config::validate_config, persistence::spawn_result_sink},
};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 全ての依存関係をコンストラクタで注入するタスクパイプライン
///
/// 並列ユニットで共有する依存関係は初期から Arc で管理する
pub struct TaskPipeline<P, C, R, S> {
    processor: Arc<P>,
    config: C,
    reporter: Arc<R>,
    persistence: Arc<S>,
}

impl<P, C, R, S> TaskPipeline<P, C, R, S>
where
    P: TaskProcessor + 'static,
    C: PipelineConfig,
    R: PipelineReporter + 'static,
    S: ResultPersistence + 'static,
{
    pub fn new(processor: P, config: C, reporter: R, persistence: S) -> Self {
        Self::from_shared(
            Arc::new(processor),
            config,
            Arc::new(reporter),
            Arc::new(persistence),
        )
    }

    /// 共有済みの依存関係から作成（テストで中身を覗くとき用）
    pub fn from_shared(processor: Arc<P>, config: C, reporter: Arc<R>, persistence: Arc<S>) -> Self {
        Self {
            processor,
            config,
            reporter,
            persistence,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 設定されたタスク数分の `Task-<n>` を処理する
    pub async fn run(&self) -> PipelineResult<PipelineSummary> {
        let total = self.config.task_count();
        self.execute(task_sequence(total), total).await
    }

    /// 任意のタスク列を処理する
    pub async fn run_tasks(&self, tasks: Vec<Task>) -> PipelineResult<PipelineSummary> {
        let total = tasks.len();
        self.execute(tasks, total).await
    }

    async fn execute<I>(&self, tasks: I, total_tasks: usize) -> PipelineResult<PipelineSummary>
    where
        I: IntoIterator<Item = Task>,
        I::IntoIter: Send + 'static,
    {
        validate_config(&self.config)?;

        let started_at = Utc::now();
        let start_time = Instant::now();
        let worker_count = self.config.worker_count();

        self.reporter.report_started(total_tasks, worker_count).await;
        self.reporter.report_state(PipelineState::Init).await;

        // 有界キュー構築
        let (task_tx, task_rx) = bounded_queue::<Task>("task queue", self.config.queue_capacity())?;
        let (result_tx, result_rx) =
            bounded_queue::<TaskResult>("result queue", self.config.queue_capacity())?;

        // Result Sink 起動（ワーカーより先に消費を始められる）
        let sink_handle = spawn_result_sink(
            result_rx,
            Arc::clone(&self.persistence),
            Arc::clone(&self.reporter),
        );

        // Worker Pool 起動
        let worker_handles = spawn_workers(
            worker_count,
            Arc::clone(&self.processor),
            task_rx,
            &result_tx,
        );

        // Completion Tracker 起動。result_tx の最後のハンドルは Tracker が持つ
        let tracker_handle =
            spawn_completion_tracker(worker_handles, result_tx, Arc::clone(&self.reporter));

        self.reporter.report_state(PipelineState::Running).await;

        // Task Source 起動
        let source_handle = spawn_task_source(tasks, task_tx, Arc::clone(&self.reporter));

        // 全ユニットを待ってからエラーを判定する
        let source_outcome = source_handle.await;
        let tracker_outcome = tracker_handle.await;
        let sink_outcome = sink_handle.await;

        self.reporter.report_state(PipelineState::Done).await;

        let results_written = sink_outcome??;
        let workers = tracker_outcome??;
        let enqueued = source_outcome??;
        debug_assert_eq!(enqueued, total_tasks);

        let summary = PipelineSummary {
            total_tasks,
            results_written,
            workers,
            output_location: self.persistence.location(),
            started_at,
            finished_at: Utc::now(),
            elapsed_ms: elapsed_millis(start_time.elapsed()),
        };

        self.reporter.report_completed(&summary).await;
        Ok(summary)
    }
}

/// ミリ秒へ変換する。u64 に収まらなければ飽和させる
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
