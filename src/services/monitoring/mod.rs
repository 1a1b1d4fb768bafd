// 進捗監視機能
// 状態遷移、結果書き込み、エラー、完了の報告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter};
