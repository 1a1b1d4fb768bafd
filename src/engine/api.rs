// 高レベル公開API
// TaskPipeline を簡単に使用できるようにするための便利な関数

use super::TaskPipeline;
use crate::{
    core::PipelineConfig,
    services::{
        ConsoleReporter, DefaultPipelineConfig, NoOpReporter, SimulatedWork,
        TextFileResultPersistence,
    },
};

/// バイナリが使う標準構成
pub type DefaultPipeline =
    TaskPipeline<SimulatedWork, DefaultPipelineConfig, ConsoleReporter, TextFileResultPersistence>;

/// 進捗を出さない構成（テスト・バックグラウンド処理用）
pub type QuietPipeline =
    TaskPipeline<SimulatedWork, DefaultPipelineConfig, NoOpReporter, TextFileResultPersistence>;

/// 固定値の設定でパイプラインを作成
pub fn create_default_pipeline() -> DefaultPipeline {
    create_pipeline_with_config(DefaultPipelineConfig::default())
}

/// 設定を指定してパイプラインを作成
pub fn create_pipeline_with_config(config: DefaultPipelineConfig) -> DefaultPipeline {
    let processor = SimulatedWork::new(config.work_delay());
    let persistence = TextFileResultPersistence::new(config.output_path());
    TaskPipeline::new(processor, config, ConsoleReporter::new(), persistence)
}

/// 静音版パイプラインを作成
pub fn create_quiet_pipeline(config: DefaultPipelineConfig) -> QuietPipeline {
    let processor = SimulatedWork::new(config.work_delay());
    let persistence = TextFileResultPersistence::new(config.output_path());
    TaskPipeline::new(processor, config, NoOpReporter::new(), persistence)
}
