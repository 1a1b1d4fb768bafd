// Result Sink - 結果キューを出力先へ書き出す

use crate::core::{
    PipelineReporter, PipelineResult, QueueConsumer, ResultPersistence, TaskResult,
};
use std::sync::Arc;

/// Result Sink: 結果キューを到着順に取り出して1行ずつ永続化する
///
/// 出力先を開けなかった場合も、書き込みに失敗した場合も、キューは閉鎖まで
/// 読み捨てるのでワーカーが満杯のキューで止まることはない。
/// 戻り値は書き込めた行数
pub fn spawn_result_sink<S, R>(
    results: QueueConsumer<TaskResult>,
    persistence: Arc<S>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<PipelineResult<usize>>
where
    S: ResultPersistence + ?Sized + 'static,
    R: PipelineReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        if let Err(error) = persistence.open().await {
            reporter
                .report_error("result sink", &error.to_string())
                .await;
            let discarded = results.drain_and_discard().await;
            reporter
                .report_error(
                    "result sink",
                    &format!("{discarded} results discarded, nothing written"),
                )
                .await;
            return Err(error);
        }

        let mut written = 0;
        let mut write_error = None;

        while let Some(result) = results.take().await {
            // 書き込み失敗後は破棄モード
            if write_error.is_some() {
                continue;
            }

            match persistence.append_line(&result.line()).await {
                Ok(()) => {
                    written += 1;
                    reporter.report_result(&result).await;
                }
                Err(error) => {
                    reporter
                        .report_error("result sink", &error.to_string())
                        .await;
                    write_error = Some(error);
                }
            }
        }

        // 書き込みエラーがあっても finalize の失敗は報告する
        if let Err(error) = persistence.finalize().await {
            reporter
                .report_error("result sink", &error.to_string())
                .await;
            if write_error.is_none() {
                return Err(error);
            }
        }

        match write_error {
            Some(error) => Err(error),
            None => Ok(written),
        }
    })
}
