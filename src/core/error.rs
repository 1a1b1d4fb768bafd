// パイプライン用のカスタムエラー型定義

use thiserror::Error;

/// パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("出力先を開けません: {path} - {source}")]
    OutputUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("永続化エラー: {source}")]
    Persistence {
        #[source]
        source: anyhow::Error,
    },

    #[error("キューが閉じられています: {queue}")]
    QueueClosed { queue: String },

    #[error("設定エラー: {message}")]
    Configuration { message: String },

    #[error("タスクエラー: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl PipelineError {
    /// 出力先オープン失敗エラーの作成
    pub fn output_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputUnavailable {
            path: path.into(),
            source,
        }
    }

    /// 永続化エラーの作成
    pub fn persistence(source: anyhow::Error) -> Self {
        Self::Persistence { source }
    }

    /// キュー閉鎖エラーの作成
    pub fn queue_closed(queue: impl Into<String>) -> Self {
        Self::QueueClosed {
            queue: queue.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::Task { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Configuration { .. } => ErrorSeverity::High,
            Self::OutputUnavailable { .. } | Self::Persistence { .. } => ErrorSeverity::High,
            Self::QueueClosed { .. } => ErrorSeverity::Medium,
            Self::Task { .. } => ErrorSeverity::Critical,
        }
    }

    /// 再実行で回復しうるかどうか
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutputUnavailable { .. } | Self::Persistence { .. } => true,
            Self::QueueClosed { .. } => true,
            Self::Configuration { .. } | Self::Task { .. } => false,
        }
    }

    /// 重要度ラベル付きの1行表現（バイナリの終了時出力用）
    pub fn diagnostic(&self) -> String {
        let hint = if self.is_recoverable() {
            "再実行で回復する可能性があります"
        } else {
            "再実行では回復しません"
        };
        format!("[{}] {self} ({hint})", self.severity().as_str())
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::task(source)
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - システム停止レベル
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// パイプライン用のResult型エイリアス
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
