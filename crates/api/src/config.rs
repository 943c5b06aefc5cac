//! Server configuration, read from the environment.

pub const HOST_VAR: &str = "SIGMA_HOST";
pub const PORT_VAR: &str = "SIGMA_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid TCP port")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// `SIGMA_HOST` / `SIGMA_PORT`, falling back to `0.0.0.0:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup(HOST_VAR).unwrap_or_else(|| {
            tracing::warn!("{HOST_VAR} not set; binding {DEFAULT_HOST}");
            DEFAULT_HOST.to_string()
        });

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: raw,
            })?,
            None => {
                tracing::warn!("{PORT_VAR} not set; using {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
