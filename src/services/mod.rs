// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod persistence;
pub mod processing;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{validate_config, DefaultPipelineConfig};
pub use monitoring::{ConsoleReporter, NoOpReporter};
pub use persistence::{spawn_result_sink, MemoryResultPersistence, TextFileResultPersistence};
pub use processing::{process_task, SimulatedWork};
