use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use nutritrack_core::domain::common::{LLMConfig, NutriTrackConfig, StorageConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutritrack-api", version, about = "NutriTrack API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`. Empty serves from the root.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = nutritrack_core::infrastructure::llm::DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    /// JSON document for tracked products. Omit to keep products in memory.
    #[arg(long = "products-file", env = "PRODUCTS_FILE")]
    pub products_file: Option<PathBuf>,

    #[arg(
        long = "barcodes-file",
        env = "BARCODES_FILE",
        default_value = "data/barcodes.json"
    )]
    pub barcodes_file: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        default_value = "info,nutritrack_api=debug,nutritrack_core=debug"
    )]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutriTrackConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            storage: StorageConfig {
                products_file: args.storage.products_file,
                barcodes_file: args.storage.barcodes_file,
            },
        }
    }
}
