use std::env;

use tracing::Level;

pub const DEFAULT_ROOT_PATH: &str = "/prod";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix every route is mounted under, e.g. `/prod`. Never ends with `/`.
    pub root_path: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_path: DEFAULT_ROOT_PATH.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let root_path = env::var("SERVING_ROOT_PATH")
            .map(|p| normalize_root_path(&p))
            .unwrap_or_else(|_| DEFAULT_ROOT_PATH.to_string());

        let log_level = match env::var("SERVING_LOG_LEVEL") {
            Ok(raw) => parse_level(&raw).map_err(|e| format!("SERVING_LOG_LEVEL: {}", e))?,
            Err(_) => Level::INFO,
        };

        Ok(Self {
            root_path,
            log_level,
        })
    }
}

/// Leading slash, no trailing slash. An empty or `/` root becomes `""`.
pub fn normalize_root_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn parse_level(raw: &str) -> Result<Level, String> {
    raw.trim()
        .parse::<Level>()
        .map_err(|_| format!("unknown log level '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_root_path() {
        assert_eq!(normalize_root_path("prod"), "/prod");
        assert_eq!(normalize_root_path("/prod/"), "/prod");
        assert_eq!(normalize_root_path("/api/v1"), "/api/v1");
        assert_eq!(normalize_root_path("/"), "");
        assert_eq!(normalize_root_path(""), "");
    }

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(parse_level("INFO"), Ok(Level::INFO));
        assert_eq!(parse_level(" debug "), Ok(Level::DEBUG));
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn default_matches_production_values() {
        let config = AppConfig::default();
        assert_eq!(config.root_path, "/prod");
        assert_eq!(config.log_level, Level::INFO);
    }
}
