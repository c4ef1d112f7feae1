pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::query::{DEFAULT_ENDPOINT, DEFAULT_LANGUAGE, DEFAULT_LIMIT, DEFAULT_USER_AGENT};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_OUTPUT_PATH: &str = "data";
pub const DEFAULT_OUTPUT_FILE: &str = "wikidata_input.csv";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "wikidata-etl")]
#[command(about = "Fetch organizations from Wikidata into a CSV for deduplication")]
pub struct CliConfig {
    /// Path to a TOML configuration file; replaces the query and output flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Language tag used for labels, aliases and descriptions
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Maximum number of results requested from the endpoint
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn limit(&self) -> usize {
        self.limit
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        validation::validate_language_tag("language", &self.language)?;
        validation::validate_positive_number("limit", self.limit, 1)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_path("output_file", &self.output_file)?;
        Ok(())
    }
}
