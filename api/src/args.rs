use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Args as ClapArgs, Parser};
use leafdoc_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, LLMConfig, LeafdocConfig, ServiceConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "leafdoc-api", version, about = "Plant identification and care assistant API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Include underlying error messages in `details` of identify failures.
    #[arg(long = "expose-error-details", env = "EXPOSE_ERROR_DETAILS", default_value_t = false, action = ArgAction::Set)]
    pub expose_error_details: bool,

    #[arg(long = "metrics-enabled", env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics_enabled: bool,

    #[arg(long = "tls-cert-path", env = "TLS_CERT_PATH", requires = "tls_key_path")]
    pub tls_cert_path: Option<PathBuf>,

    #[arg(long = "tls-key-path", env = "TLS_KEY_PATH", requires = "tls_cert_path")]
    pub tls_key_path: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long = "llm-request-timeout-secs", env = "LLM_REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Upper bound for the paired identification + disease calls.
    #[arg(long = "diagnose-timeout-secs", env = "DIAGNOSE_TIMEOUT_SECS", default_value_t = 15)]
    pub diagnose_timeout_secs: u64,

    #[arg(long = "max-suggestions", env = "MAX_SUGGESTIONS", default_value_t = 5)]
    pub max_suggestions: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for LeafdocConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                request_timeout: Duration::from_secs(args.llm.request_timeout_secs),
            },
            service: ServiceConfig {
                diagnose_timeout: Duration::from_secs(args.llm.diagnose_timeout_secs),
                max_suggestions: args.llm.max_suggestions,
            },
        }
    }
}
