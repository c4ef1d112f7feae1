use crate::domain::model::TransformResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// 寫入後回傳實際的輸出位置，供完成訊息使用
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn language(&self) -> &str;
    fn limit(&self) -> usize;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<serde_json::Value>;
    async fn transform(&self, raw: serde_json::Value) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
