// テストユーティリティとモック実装
// 統合テスト共通のヘルパー


pub use mocks::*;

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use task_pipeline::services::DefaultPipelineConfig;

/// 固定値のまま作業時間だけ短くした設定
pub fn quick_config(output: &Path) -> DefaultPipelineConfig {
    DefaultPipelineConfig::default()
        .with_work_delay(Duration::from_millis(10))
        .with_output_path(output)
}

/// `Worker <id> processed <task>` を (id, task) に分解する
pub fn parse_result_line(line: &str) -> Option<(usize, String)> {
    let rest = line.strip_prefix("Worker ")?;
    let (id, task) = rest.split_once(" processed ")?;
    Some((id.parse().ok()?, task.to_string()))
}

/// 出力ファイルを (id, task) の組の列として読む
pub fn read_result_pairs(output: &Path) -> Vec<(usize, String)> {
    let content = std::fs::read_to_string(output).expect("failed to read output file");
    content
        .lines()
        .map(|line| parse_result_line(line).unwrap_or_else(|| panic!("malformed line: {line}")))
        .collect()
}

/// `Task-1` .. `Task-<count>` の集合
pub fn expected_task_labels(count: usize) -> HashSet<String> {
    (1..=count).map(|n| format!("Task-{n}")).collect()
}
