// Task Source - タスク配信機能

use crate::core::{PipelineReporter, PipelineResult, PipelineState, QueueProducer, Task};
use std::sync::Arc;

/// Task Source: タスクを順にキューへ投入し、最後に閉鎖する
///
/// キューが満杯なら空きが出るまで待つ。戻り値は投入した件数
pub fn spawn_task_source<I, R>(
    tasks: I,
    task_queue: QueueProducer<Task>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<PipelineResult<usize>>
where
    I: IntoIterator<Item = Task>,
    I::IntoIter: Send + 'static,
    R: PipelineReporter + ?Sized + 'static,
{
    let tasks = tasks.into_iter();
    tokio::spawn(async move {
        let mut enqueued = 0;
        for task in tasks {
            // 消費者が全滅した場合のみ失敗する
            task_queue.put(task).await?;
            enqueued += 1;
        }

        // 閉鎖より先に報告しておくと CLOSING より前に届く
        reporter.report_state(PipelineState::Draining).await;
        task_queue.close();
        Ok(enqueued)
    })
}
