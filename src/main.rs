use anyhow::{Context, Result};
use task_pipeline::engine::create_default_pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    // ワーカー数・タスク数・キュー容量・出力先は全て固定値
    let pipeline = create_default_pipeline();

    let summary = match pipeline.run().await {
        Ok(summary) => summary,
        Err(error) => {
            eprintln!("❌ {}", error.diagnostic());
            return Err(error).context("パイプラインの実行に失敗しました");
        }
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
