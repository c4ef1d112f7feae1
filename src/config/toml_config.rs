use crate::config::{DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_PATH};
use crate::core::query::{DEFAULT_ENDPOINT, DEFAULT_LANGUAGE, DEFAULT_LIMIT, DEFAULT_USER_AGENT};
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 每個區段與欄位都可省略，省略時使用與 CLI 相同的預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            limit: default_limit(),
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            output_file: default_output_file(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WIKIDATA_ENDPOINT})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("source.endpoint", &self.source.endpoint)?;
        validation::validate_non_empty_string("source.user_agent", &self.source.user_agent)?;
        validation::validate_language_tag("query.language", &self.query.language)?;
        validation::validate_positive_number("query.limit", self.query.limit, 1)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_path("load.output_file", &self.load.output_file)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn user_agent(&self) -> &str {
        &self.source.user_agent
    }

    fn language(&self) -> &str {
        &self.query.language
    }

    fn limit(&self) -> usize {
        self.query.limit
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_file(&self) -> &str {
        &self.load.output_file
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.endpoint(), "https://query.wikidata.org/sparql");
        assert_eq!(config.user_agent(), "DeduplicationTool/1.0");
        assert_eq!(config.language(), "en");
        assert_eq!(config.limit(), 1000);
        assert_eq!(config.output_path(), "data");
        assert_eq!(config.output_file(), "wikidata_input.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[query]
language = "nl"
limit = 200

[load]
output_file = "organisaties.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.language(), "nl");
        assert_eq!(config.limit(), 200);
        assert_eq!(config.output_path(), "data");
        assert_eq!(config.output_file(), "organisaties.csv");
        assert_eq!(config.endpoint(), "https://query.wikidata.org/sparql");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("WIKIDATA_ETL_TEST_ENDPOINT", "https://sparql.example.org/query");

        let toml_content = r#"
[source]
endpoint = "${WIKIDATA_ETL_TEST_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "https://sparql.example.org/query");

        std::env::remove_var("WIKIDATA_ETL_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let invalid_endpoint = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(invalid_endpoint.validate().is_err());

        let invalid_language = TomlConfig::from_toml_str(
            r#"
[query]
language = "en\") }"
"#,
        )
        .unwrap();
        assert!(invalid_language.validate().is_err());

        let zero_limit = TomlConfig::from_toml_str(
            r#"
[query]
limit = 0
"#,
        )
        .unwrap();
        assert!(zero_limit.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[query\nlimit = ");
        assert!(matches!(
            result,
            Err(EtlError::ConfigValidationError { ref field, .. }) if field == "toml_parsing"
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
user_agent = "OrgDedupe/2.0 (ops@example.org)"

[load]
output_path = "./exports"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.user_agent(), "OrgDedupe/2.0 (ops@example.org)");
        assert_eq!(config.output_path(), "./exports");
    }
}
