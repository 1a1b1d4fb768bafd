// 進捗監視の具象実装

use crate::core::{PipelineReporter, PipelineState, PipelineSummary, TaskResult, WorkerReport};
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl PipelineReporter for ConsoleReporter {
    async fn report_started(&self, total_tasks: usize, worker_count: usize) {
        if !self.quiet {
            println!("🚀 Starting pipeline: {total_tasks} tasks, {worker_count} workers");
        }
    }

    async fn report_state(&self, state: PipelineState) {
        if !self.quiet {
            println!("🔁 State: {state}");
        }
    }

    async fn report_result(&self, result: &TaskResult) {
        if !self.quiet {
            println!("📝 {result}");
        }
    }

    async fn report_worker_finished(&self, report: &WorkerReport) {
        if !self.quiet {
            println!(
                "👷 Worker {} finished ({} tasks)",
                report.worker_id, report.tasks_processed
            );
        }
    }

    // エラーは quiet でも抑制しない
    async fn report_error(&self, context: &str, error: &str) {
        eprintln!("❌ Error in {context}: {error}");
    }

    async fn report_completed(&self, summary: &PipelineSummary) {
        if !self.quiet {
            println!(
                "✅ Completed! Results written: {}/{} to {} ({} ms)",
                summary.results_written,
                summary.total_tasks,
                summary.output_location,
                summary.elapsed_ms
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PipelineReporter for NoOpReporter {
    async fn report_started(&self, _total_tasks: usize, _worker_count: usize) {}

    async fn report_state(&self, _state: PipelineState) {}

    async fn report_result(&self, _result: &TaskResult) {}

    async fn report_worker_finished(&self, _report: &WorkerReport) {}

    async fn report_error(&self, _context: &str, _error: &str) {}

    async fn report_completed(&self, _summary: &PipelineSummary) {}
}
