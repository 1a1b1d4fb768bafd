// 固定ワーカープールによる並行タスク処理パイプライン
//
// core     - トレイト、型、エラー、閉鎖可能な有界キュー
// services - 設定、進捗報告、擬似作業、結果永続化
// engine   - Task Source / Worker Pool / Completion Tracker / Result Sink の組み立て

pub mod core;
pub mod engine;
pub mod services;

pub use crate::core::{PipelineError, PipelineResult, PipelineSummary, Task, TaskResult};
pub use crate::engine::{create_default_pipeline, TaskPipeline};
