// 結果永続化機能
// 出力先への行書き込みと Result Sink

pub mod collector;
pub mod implementations;

// 公開API
pub use collector::spawn_result_sink;
pub use implementations::{MemoryResultPersistence, TextFileResultPersistence};
