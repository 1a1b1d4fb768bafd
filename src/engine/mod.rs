// エンジン層 - 並列処理とオーケストレーション
// サービス層を組み合わせて Task Source → Worker Pool → Result Sink を構成

pub mod api;
pub mod consumer;
mod pipeline;
pub mod producer;
pub mod tracker;

// 公開API - 主要エンジンクラス
pub use api::{
    create_default_pipeline, create_pipeline_with_config, create_quiet_pipeline, DefaultPipeline,
    QuietPipeline,
};
pub use pipeline::TaskPipeline;
