//! Process configuration read from the environment.

use anyhow::{Context, Result, bail};
use outliner_core::{DEFAULT_SESSION_COOKIE, env_parse_with_default};
use outliner_llm::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// Where outlines are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StorageKind {
    Hosted,
    Postgres,
    Memory,
}

impl std::str::FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hosted" => Ok(Self::Hosted),
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => bail!("OUTLINER_STORAGE must be hosted, postgres or memory, got {other:?}"),
        }
    }
}

pub(crate) struct Config {
    pub llm_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub data_url: String,
    pub data_key: String,
    pub storage: StorageKind,
    pub database_url: Option<String>,
    pub session_cookie: String,
    pub secure_cookie: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("llm_api_key", &"***")
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_model", &self.llm_model)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("data_url", &self.data_url)
            .field("data_key", &"***")
            .field("storage", &self.storage)
            .field("database_url", &self.database_url.as_ref().map(|_| "***"))
            .field("session_cookie", &self.session_cookie)
            .field("secure_cookie", &self.secure_cookie)
            .finish()
    }
}

fn required(var: &str) -> Result<String> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{var} environment variable must be set"))
}

fn optional(var: &str, default: &str) -> String {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_owned())
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        let llm_api_key = required("OUTLINER_LLM_API_KEY")?;
        let data_url = required("OUTLINER_DATA_URL")?;
        let data_key = required("OUTLINER_DATA_KEY")?;
        let storage: StorageKind = optional("OUTLINER_STORAGE", "hosted").parse()?;
        let database_url = match storage {
            StorageKind::Postgres => Some(required("DATABASE_URL")?),
            StorageKind::Hosted | StorageKind::Memory => None,
        };
        Ok(Self {
            llm_api_key,
            llm_base_url: optional("OUTLINER_LLM_BASE_URL", DEFAULT_BASE_URL),
            llm_model: optional("OUTLINER_LLM_MODEL", DEFAULT_MODEL),
            llm_timeout_secs: env_parse_with_default("OUTLINER_LLM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            data_url,
            data_key,
            storage,
            database_url,
            session_cookie: optional("OUTLINER_SESSION_COOKIE", DEFAULT_SESSION_COOKIE),
            secure_cookie: env_parse_with_default("OUTLINER_SECURE_COOKIE", false),
        })
    }
}
