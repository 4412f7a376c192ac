use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_PATH_ENV: &str = "AIMPUR_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "aimpur.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Environment {
    pub env_type: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self { env_type: "development".to_string() }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 3000 }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_body_size_kb: usize,
    pub request_timeout_seconds: u64,
    /// Upper bound on the number of named inputs in one calculation request.
    pub max_calculator_inputs: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_body_size_kb: 64, request_timeout_seconds: 10, max_calculator_inputs: 50 }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Pretty => f.write_str("pretty"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            filter: "aimpur_api=info,aimpur_calculator=info,tower_http=info".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AimpurConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
    /// File the configuration was read from; `None` when running on defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl AimpurConfig {
    /// Loads from `AIMPUR_CONFIG_PATH` (default `aimpur.toml`) and applies environment
    /// overrides. A missing file means defaults; an unreadable or malformed one is an error.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => {
                let mut config = Self::from_toml_str(&contents).with_context(|| {
                    format!("Failed to parse configuration file '{}'", path.display())
                })?;
                config.source = Some(path.to_path_buf());
                config
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read configuration file '{}'", path.display())
                });
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `AIMPUR_*` overrides read through `lookup`.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(env_type) = lookup("AIMPUR_ENVIRONMENT") {
            self.environment.env_type = env_type;
        }
        if let Some(host) = lookup("AIMPUR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("AIMPUR_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("AIMPUR_PORT '{port}' is not a valid port"))?;
        }
        if let Some(size) = lookup("AIMPUR_MAX_BODY_SIZE_KB") {
            self.limits.max_body_size_kb = size
                .parse()
                .with_context(|| format!("AIMPUR_MAX_BODY_SIZE_KB '{size}' is not a number"))?;
        }
        if let Some(format) = lookup("AIMPUR_LOG_FORMAT") {
            self.logging.format = format.parse().map_err(anyhow::Error::msg)?;
        }
        Ok(self)
    }

    pub fn max_body_size_bytes(&self) -> usize {
        self.limits.max_body_size_kb * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AimpurConfig::from_toml_str("").unwrap();
        assert_eq!(config, AimpurConfig::default());
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.max_body_size_bytes(), 64 * 1024);
    }

    #[test]
    fn test_partial_sections() {
        let config = AimpurConfig::from_toml_str(
            r#"
[server]
port = 8080

[logging]
format = "pretty"
"#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.limits, LimitsConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(AimpurConfig::from_toml_str("[server]\nport = \"eighty\"").is_err());
    }

    #[test]
    fn test_environment_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("AIMPUR_HOST", "0.0.0.0"),
            ("AIMPUR_PORT", "9000"),
            ("AIMPUR_MAX_BODY_SIZE_KB", "8"),
            ("AIMPUR_LOG_FORMAT", "text"),
        ]);
        let config = AimpurConfig::default()
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.limits.max_body_size_kb, 8);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_override_is_reported() {
        let result = AimpurConfig::default()
            .apply_overrides(|key| (key == "AIMPUR_PORT").then(|| "http".to_string()));
        assert!(result.unwrap_err().to_string().contains("AIMPUR_PORT"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AimpurConfig::load_from(Path::new("does/not/exist/aimpur.toml")).unwrap();
        assert_eq!(config.source, None);
    }
}
