// Worker - 単一タスク処理機能

use crate::core::{Task, TaskProcessor, TaskResult, WorkerId};
use async_trait::async_trait;
use std::time::Duration;

/// 固定時間スリープするだけの擬似作業
///
/// `tokio::time::sleep` なのでランタイムのスレッドは塞がない
#[derive(Debug, Clone)]
pub struct SimulatedWork {
    delay: Duration,
}

impl SimulatedWork {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl TaskProcessor for SimulatedWork {
    async fn perform(&self, _worker_id: WorkerId, _task: &Task) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// 単一タスクの処理
pub async fn process_task<P>(processor: &P, worker_id: WorkerId, task: Task) -> TaskResult
where
    P: TaskProcessor + ?Sized,
{
    processor.perform(worker_id, &task).await;
    TaskResult::new(worker_id, task)
}
