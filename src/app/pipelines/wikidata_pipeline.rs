use crate::core::flatten::{flatten_response, render_csv};
use crate::core::query::{build_query, QueryExecutor};
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

/// 從 Wikidata 取出公司資料並寫成 CSV 的 pipeline
pub struct WikidataPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) executor: QueryExecutor,
}

impl<S: Storage, C: ConfigProvider> WikidataPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let executor = QueryExecutor::new(config.endpoint(), config.user_agent());
        Self {
            storage,
            config,
            executor,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for WikidataPipeline<S, C> {
    async fn extract(&self) -> Result<serde_json::Value> {
        tracing::info!(
            "🚀 Querying {} (language: {}, limit: {})",
            self.executor.endpoint(),
            self.config.language(),
            self.config.limit()
        );

        let query = build_query(self.config.language(), self.config.limit());
        self.executor.execute(&query).await
    }

    async fn transform(&self, raw: serde_json::Value) -> Result<TransformResult> {
        let records = flatten_response(&raw)?;
        tracing::info!("📊 Received {} bindings", records.len());

        if records.len() >= self.config.limit() {
            tracing::warn!(
                "Result window is full ({} records); the endpoint may hold more organizations",
                records.len()
            );
        }

        let csv_output = render_csv(&records)?;
        tracing::debug!("Rendered CSV ({} bytes)", csv_output.len());

        Ok(TransformResult {
            records,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        tracing::debug!(
            "Writing {} records to {}",
            result.records.len(),
            self.config.output_file()
        );
        let output_path = self
            .storage
            .write_file(self.config.output_file(), result.csv_output.as_bytes())
            .await?;

        tracing::info!("💾 CSV saved: {}", output_path);
        Ok(output_path)
    }
}
