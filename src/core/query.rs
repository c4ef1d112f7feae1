use crate::utils::error::Result;
use reqwest::header::USER_AGENT;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";
pub const DEFAULT_USER_AGENT: &str = "DeduplicationTool/1.0";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_LIMIT: usize = 1000;

/// Wikidata 的 "business" 類別 (wd:Q4830453)
const ORGANIZATION_CLASS: &str = "wd:Q4830453";

/// 組出查詢公司名稱、別名與描述的 SPARQL
///
/// `language` 需先經過 `validate_language_tag` 檢查，這裡直接嵌入字串。
pub fn build_query(language: &str, limit: usize) -> String {
    format!(
        r#"SELECT DISTINCT ?company ?companyLabel ?alias ?description
WHERE {{
  ?company wdt:P31 {class}.
  OPTIONAL {{ ?company skos:altLabel ?alias. FILTER(LANG(?alias) = "{lang}") }}
  OPTIONAL {{ ?company schema:description ?description. FILTER(LANG(?description) = "{lang}") }}
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language "{lang}". }}
}}
LIMIT {limit}"#,
        class = ORGANIZATION_CLASS,
        lang = language,
        limit = limit,
    )
}

/// 對 SPARQL 端點送出唯讀查詢
pub struct QueryExecutor {
    client: Client,
    endpoint: String,
    user_agent: String,
}

impl QueryExecutor {
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 單次 GET；連線失敗、非 2xx 或非 JSON 都直接回傳錯誤，不重試
    pub async fn execute(&self, query: &str) -> Result<serde_json::Value> {
        tracing::debug!("Making SPARQL request to: {}", self.endpoint);
        tracing::debug!("Query:\n{}", query);

        let response = self
            .client
            .get(&self.endpoint)
            .header(USER_AGENT, &self.user_agent)
            .query(&[("query", query), ("format", "json")])
            .send()
            .await?;

        tracing::debug!("SPARQL response status: {}", response.status());

        let json_data: serde_json::Value = response.error_for_status()?.json().await?;
        Ok(json_data)
    }
}
