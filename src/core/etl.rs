use crate::core::Pipeline;
use crate::utils::error::Result;

/// 成功後輸出到 stdout 的訊息
pub fn confirmation_message(output_path: &str) -> String {
    format!("Data saved to {}", output_path)
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract、transform、load；任何一步失敗就中止，不會寫出檔案
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting ETL process...");

        // Extract
        tracing::info!("Querying SPARQL endpoint...");
        let raw_response = self.pipeline.extract().await?;

        // Transform
        tracing::info!("Flattening query results...");
        let transformed_result = self.pipeline.transform(raw_response).await?;
        tracing::info!("Flattened {} records", transformed_result.records.len());

        // Load
        tracing::info!("Writing CSV output...");
        let output_path = self.pipeline.load(transformed_result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
