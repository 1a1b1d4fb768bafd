// タスク処理機能
// 擬似作業の実行と結果行の生成

pub mod worker;

// 公開API
pub use worker::{process_task, SimulatedWork};
