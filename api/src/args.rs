use std::path::PathBuf;

use clap::Parser;
use freshlens_core::{
    domain::common::{FreshlensConfig, LLMConfig, StorageConfig},
    infrastructure::llm::gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL},
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "freshlens", version, about = "Food image analysis API")]
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

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5002)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list, `*` allows any origin
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    /// Base of the image URLs returned to clients
    #[arg(long = "public-url", env = "PUBLIC_URL", default_value = "http://127.0.0.1:5002")]
    pub public_url: Url,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API",
        default_value = "",
        hide_env_values = true
    )]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,

    /// Constrain replies with a JSON response schema
    #[arg(long = "gemini-structured-output", env = "GEMINI_STRUCTURED_OUTPUT")]
    pub structured_output: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for FreshlensConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                structured_output: args.llm.structured_output,
            },
            storage: StorageConfig {
                upload_dir: args.storage.upload_dir,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["freshlens"]);
        assert_eq!(args.server.port, 5002);
        assert_eq!(args.server.public_url.as_str(), "http://127.0.0.1:5002/");
        assert_eq!(args.llm.gemini_model, "gemini-2.0-flash");
        assert!(!args.llm.structured_output);
    }

    #[test]
    fn test_allowed_origins_are_split() {
        let args = Args::parse_from([
            "freshlens",
            "--allowed-origins",
            "http://localhost:3000,https://app.example.com",
        ]);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_into_config() {
        let args = Args::parse_from([
            "freshlens",
            "--gemini-api-key",
            "secret",
            "--upload-dir",
            "/tmp/freshlens",
            "--gemini-structured-output",
        ]);
        let config = FreshlensConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert!(config.llm.structured_output);
        assert_eq!(config.storage.upload_dir, PathBuf::from("/tmp/freshlens"));
    }
}
