// 設定管理機能

pub mod implementations;

// 公開API
pub use implementations::{
    validate_config, DefaultPipelineConfig, OUTPUT_PATH, QUEUE_CAPACITY, TASK_COUNT, WORKER_COUNT,
    WORK_DELAY,
};
