use crate::constants::{BASE_URL, DEFAULT_TIMEOUT};
use crate::error::AppError;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the TD Ameritrade API
///
/// Both values are read once from local files at construction time and are
/// immutable for the lifetime of the process. The files should be listed in
/// the project .gitignore so the account number and token are never posted.
pub struct Credentials {
    /// TD Ameritrade account number used to build account-scoped paths
    pub account_id: String,
    /// OAuth 2.0 bearer token attached to every request
    pub access_token: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the TD Ameritrade REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the TD Ameritrade API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Builds a configuration from two credential files
    ///
    /// Reads the first line of each file (trimmed of the trailing newline)
    /// as the account number and bearer token respectively.
    ///
    /// # Arguments
    /// * `account_path` - File whose first line is the account number
    /// * `token_path` - File whose first line is the OAuth bearer token
    ///
    /// # Returns
    /// * `Ok(Config)` - Credentials loaded, REST settings at their defaults
    /// * `Err(AppError::Config)` - If either file is missing or empty
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        account_path: P,
        token_path: Q,
    ) -> Result<Self, AppError> {
        let account_id = read_first_line(account_path.as_ref())?;
        let access_token = read_first_line(token_path.as_ref())?;

        Ok(Config {
            credentials: Credentials {
                account_id,
                access_token,
            },
            rest_api: RestApiConfig {
                base_url: BASE_URL.to_string(),
                timeout: DEFAULT_TIMEOUT,
            },
        })
    }

    /// Builds a configuration from environment variables (and `.env`)
    ///
    /// `TDA_ACCOUNT_FILE` and `TDA_TOKEN_FILE` name the credential files;
    /// `TDA_BASE_URL` and `TDA_HTTP_TIMEOUT` override the REST settings.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let account_file: String =
            get_env_or_default("TDA_ACCOUNT_FILE", String::from("account_no.txt"));
        let token_file: String =
            get_env_or_default("TDA_TOKEN_FILE", String::from("oauth_token.txt"));

        let mut config = Self::from_files(&account_file, &token_file)?;
        config.rest_api.base_url = get_env_or_default("TDA_BASE_URL", BASE_URL.to_string());
        config.rest_api.timeout = get_env_or_default("TDA_HTTP_TIMEOUT", DEFAULT_TIMEOUT);
        Ok(config)
    }

    /// Replaces the base URL, e.g. to point the client at a test server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }
}

/// Reads the first line of a credential file, trimmed of the trailing newline
fn read_first_line(path: &Path) -> Result<String, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!(
            "cannot read credential file {}: {e}",
            path.display()
        ))
    })?;

    let value = content.lines().next().unwrap_or_default().to_string();
    if value.is_empty() {
        return Err(AppError::Config(format!(
            "credential file {} is empty",
            path.display()
        )));
    }
    Ok(value)
}
