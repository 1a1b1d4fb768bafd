// Completion Tracker - 全ワーカーの終了を待って結果キューを閉じる

use crate::core::{
    PipelineError, PipelineReporter, PipelineResult, PipelineState, QueueProducer, TaskResult,
    WorkerReport,
};
use std::sync::Arc;

/// Completion Tracker を起動する
///
/// 各ワーカーのハンドルをちょうど一度ずつ待ち、全員の終了後に
/// `result_queue` を閉じる。ワーカーが失敗・パニックしても閉鎖は必ず行う
pub fn spawn_completion_tracker<R>(
    workers: Vec<tokio::task::JoinHandle<PipelineResult<WorkerReport>>>,
    result_queue: QueueProducer<TaskResult>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<PipelineResult<Vec<WorkerReport>>>
where
    R: PipelineReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut reports = Vec::with_capacity(workers.len());
        let mut first_error: Option<PipelineError> = None;

        for handle in workers {
            let error = match handle.await {
                Ok(Ok(report)) => {
                    reporter.report_worker_finished(&report).await;
                    reports.push(report);
                    continue;
                }
                Ok(Err(error)) => error,
                Err(join_error) => PipelineError::task(join_error),
            };

            reporter.report_error("worker", &error.to_string()).await;
            if first_error.is_none() {
                first_error = Some(error);
            }
        }

        reporter.report_state(PipelineState::Closing).await;
        result_queue.close();

        match first_error {
            Some(error) => Err(error),
            None => Ok(reports),
        }
    })
}
