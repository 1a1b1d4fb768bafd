// Worker Pool - 並列ワーカー機能

use crate::{
    core::{
        PipelineResult, QueueConsumer, QueueProducer, Task, TaskProcessor, TaskResult, WorkerId,
        WorkerReport,
    },
    services::processing::process_task,
};
use std::sync::Arc;

/// 単一ワーカー
///
/// タスクキューが閉鎖されて空になるまで取り出し→作業→結果投入を繰り返す
pub fn spawn_worker<P>(
    worker_id: WorkerId,
    processor: Arc<P>,
    tasks: QueueConsumer<Task>,
    results: QueueProducer<TaskResult>,
) -> tokio::task::JoinHandle<PipelineResult<WorkerReport>>
where
    P: TaskProcessor + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut tasks_processed = 0;

        while let Some(task) = tasks.take().await {
            let result = process_task(processor.as_ref(), worker_id, task).await;
            results.put(result).await?;
            tasks_processed += 1;
        }

        results.close();
        Ok(WorkerReport {
            worker_id,
            tasks_processed,
        })
    })
}

/// Workers: 固定数のワーカープールを起動する（IDは1始まり）
pub fn spawn_workers<P>(
    worker_count: usize,
    processor: Arc<P>,
    tasks: QueueConsumer<Task>,
    results: &QueueProducer<TaskResult>,
) -> Vec<tokio::task::JoinHandle<PipelineResult<WorkerReport>>>
where
    P: TaskProcessor + ?Sized + 'static,
{
    (1..=worker_count)
        .map(|worker_id| {
            spawn_worker(
                worker_id,
                Arc::clone(&processor),
                tasks.clone(),
                results.clone(),
            )
        })
        .collect()
}
