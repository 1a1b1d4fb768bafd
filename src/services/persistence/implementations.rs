// 結果永続化の具象実装

use crate::core::{PipelineError, PipelineResult, ResultPersistence};
use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex as AsyncMutex;

/// メモリ内永続化実装（テスト・ベンチマーク用）
#[derive(Debug, Clone, Default)]
pub struct MemoryResultPersistence {
    lines: Arc<Mutex<Vec<String>>>,
    finalized: Arc<Mutex<bool>>,
}

impl MemoryResultPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用：保存された行を取得
    pub fn get_stored_lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// テスト用：完了状態を確認
    pub fn is_finalized(&self) -> bool {
        *self
            .finalized
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ResultPersistence for MemoryResultPersistence {
    async fn open(&self) -> PipelineResult<()> {
        self.lines
            .lock()
            .map_err(|e| PipelineError::persistence(anyhow::anyhow!("ロックエラー: {e}")))?
            .clear();
        *self
            .finalized
            .lock()
            .map_err(|e| PipelineError::persistence(anyhow::anyhow!("ロックエラー: {e}")))? = false;
        Ok(())
    }

    async fn append_line(&self, line: &str) -> PipelineResult<()> {
        self.lines
            .lock()
            .map_err(|e| PipelineError::persistence(anyhow::anyhow!("ロックエラー: {e}")))?
            .push(line.to_string());
        Ok(())
    }

    async fn finalize(&self) -> PipelineResult<()> {
        *self
            .finalized
            .lock()
            .map_err(|e| PipelineError::persistence(anyhow::anyhow!("ロックエラー: {e}")))? = true;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

/// 改行区切りテキストファイルへの永続化実装
///
/// `open` でファイルを作り直すので、前回の内容は残らない
#[derive(Debug)]
pub struct TextFileResultPersistence {
    file_path: PathBuf,
    writer: AsyncMutex<Option<BufWriter<File>>>,
}

impl TextFileResultPersistence {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            writer: AsyncMutex::new(None),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl ResultPersistence for TextFileResultPersistence {
    async fn open(&self) -> PipelineResult<()> {
        let mut writer_guard = self.writer.lock().await;
        if writer_guard.is_some() {
            return Ok(());
        }

        let file = File::create(&self.file_path)
            .await
            .map_err(|e| PipelineError::output_unavailable(self.location(), e))?;
        *writer_guard = Some(BufWriter::new(file));
        Ok(())
    }

    async fn append_line(&self, line: &str) -> PipelineResult<()> {
        let mut writer_guard = self.writer.lock().await;
        let writer = writer_guard.as_mut().ok_or_else(|| {
            PipelineError::persistence(anyhow::anyhow!(
                "出力先が開かれていません: {}",
                self.location()
            ))
        })?;

        writer
            .write_all(line.as_bytes())
            .await
            .context("書き込みエラー")
            .map_err(PipelineError::persistence)?;
        writer
            .write_all(b"\n")
            .await
            .context("書き込みエラー")
            .map_err(PipelineError::persistence)?;
        Ok(())
    }

    async fn finalize(&self) -> PipelineResult<()> {
        // take() するので、フラッシュが失敗してもファイルは閉じられる
        let mut writer_guard = self.writer.lock().await;
        if let Some(mut writer) = writer_guard.take() {
            writer
                .flush()
                .await
                .context("フラッシュエラー")
                .map_err(PipelineError::persistence)?;
            writer
                .shutdown()
                .await
                .context("クローズエラー")
                .map_err(PipelineError::persistence)?;
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.file_path.display().to_string()
    }
}
