// パイプライン全体の統合テスト
use crate::fixtures::*;
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use task_pipeline::{
    core::PipelineState,
    engine::{create_quiet_pipeline, TaskPipeline},
    services::{DefaultPipelineConfig, SimulatedWork, TextFileResultPersistence},
};
use tempfile::TempDir;

#[tokio::test]
async fn test_every_task_written_exactly_once() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("results.txt");

    let summary = create_quiet_pipeline(quick_config(&output)).run().await?;

    let pairs = read_result_pairs(&output);
    assert_eq!(pairs.len(), 10);
    assert_eq!(summary.results_written, 10);

    // 同じタスクが2回現れない
    let tasks: Vec<&String> = pairs.iter().map(|(_, task)| task).collect();
    let unique: HashSet<&String> = tasks.iter().copied().collect();
    assert_eq!(unique.len(), tasks.len());
    Ok(())
}

#[tokio::test]
async fn test_worker_attribution_is_valid() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("results.txt");

    create_quiet_pipeline(quick_config(&output)).run().await?;

    let pairs = read_result_pairs(&output);
    for (worker_id, _) in &pairs {
        assert!((1..=4).contains(worker_id), "unexpected worker id {worker_id}");
    }

    let tasks: HashSet<String> = pairs.into_iter().map(|(_, task)| task).collect();
    assert_eq!(tasks, expected_task_labels(10));
    Ok(())
}

#[tokio::test]
async fn test_summary_matches_file_contents() -> Result<()> {
    // 到着順は問わず、(worker, task) の集合だけを比較する
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("results.txt");
    let reporter = RecordingReporter::new();

    let pipeline = TaskPipeline::new(
        SimulatedWork::new(Duration::from_millis(10)),
        quick_config(&output),
        reporter.clone(),
        TextFileResultPersistence::new(&output),
    );
    let summary = pipeline.run().await?;

    let from_file: HashSet<(usize, String)> = read_result_pairs(&output).into_iter().collect();
    let from_reporter: HashSet<(usize, String)> = reporter
        .events()
        .into_iter()
        .filter_map(|event| match event {
            ReportEvent::Result(result) => {
                Some((result.worker_id, result.task.label().to_string()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(from_file, from_reporter);

    let per_worker_total: usize = summary.workers.iter().map(|w| w.tasks_processed).sum();
    assert_eq!(per_worker_total, 10);
    for report in &summary.workers {
        let in_file = from_file
            .iter()
            .filter(|(worker_id, _)| *worker_id == report.worker_id)
            .count();
        assert_eq!(in_file, report.tasks_processed);
    }
    Ok(())
}

#[tokio::test]
async fn test_result_queue_closes_after_all_workers_finish() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("results.txt");
    let reporter = RecordingReporter::new();

    let pipeline = TaskPipeline::new(
        SimulatedWork::new(Duration::from_millis(10)),
        quick_config(&output),
        reporter.clone(),
        TextFileResultPersistence::new(&output),
    );
    pipeline.run().await?;

    let events = reporter.events();
    let closing_at = events
        .iter()
        .position(|event| *event == ReportEvent::State(PipelineState::Closing))
        .expect("CLOSING was never reported");

    let finished_before_closing = events[..closing_at]
        .iter()
        .filter(|event| matches!(event, ReportEvent::WorkerFinished(_)))
        .count();
    assert_eq!(finished_before_closing, 4);

    let results_reported = events
        .iter()
        .filter(|event| matches!(event, ReportEvent::Result(_)))
        .count();
    assert_eq!(results_reported, 10);

    assert_eq!(
        reporter.states(),
        vec![
            PipelineState::Init,
            PipelineState::Running,
            PipelineState::Draining,
            PipelineState::Closing,
            PipelineState::Done,
        ]
    );
    assert_eq!(
        events.last(),
        Some(&ReportEvent::Completed {
            results_written: 10
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_rerun_replaces_previous_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("results.txt");
    std::fs::write(&output, "left over from an older run\n")?;

    create_quiet_pipeline(quick_config(&output)).run().await?;
    let first = read_result_pairs(&output);

    create_quiet_pipeline(quick_config(&output)).run().await?;
    let second = read_result_pairs(&output);

    assert_eq!(first.len(), 10);
    assert_eq!(second.len(), 10);
    let content = std::fs::read_to_string(&output)?;
    assert!(!content.contains("left over"));
    assert_eq!(content.lines().count(), 10);
    Ok(())
}

#[tokio::test]
async fn test_small_queue_capacity_still_completes() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("results.txt");

    let config = quick_config(&output)
        .with_queue_capacity(1)
        .with_task_count(25)
        .with_work_delay(Duration::from_millis(2));
    let summary = create_quiet_pipeline(config).run().await?;

    assert_eq!(summary.results_written, 25);
    let tasks: HashSet<String> = read_result_pairs(&output)
        .into_iter()
        .map(|(_, task)| task)
        .collect();
    assert_eq!(tasks, expected_task_labels(25));
    Ok(())
}

#[tokio::test]
async fn test_default_timing_runs_in_parallel() -> Result<()> {
    // 200ms × 10件 / 4ワーカー なので3ラウンド分
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("results.txt");

    let config = DefaultPipelineConfig::default().with_output_path(&output);
    let summary = create_quiet_pipeline(config).run().await?;

    assert_eq!(summary.results_written, 10);
    assert!(summary.elapsed_ms >= 600);
    assert!(summary.elapsed_ms < 2000);
    Ok(())
}

#[tokio::test]
async fn test_shared_persistence_reports_location() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("results.txt");
    let persistence = Arc::new(TextFileResultPersistence::new(&output));

    let pipeline = TaskPipeline::from_shared(
        Arc::new(SimulatedWork::new(Duration::ZERO)),
        quick_config(&output),
        Arc::new(RecordingReporter::new()),
        Arc::clone(&persistence),
    );
    let summary = pipeline.run().await?;

    assert_eq!(summary.output_location, output.display().to_string());
    assert_eq!(persistence.file_path(), output.as_path());
    Ok(())
}
