use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "events_data.json";
const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

// Development fallback only; any real environment overrides it through
// SESSION_SECRET.
const DEV_SESSION_SECRET: &str = "dev-secret-key-change-in-production";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub database_url: Option<String>,
    pub data_file: PathBuf,
    pub session_secret: String,
    pub session_ttl_secs: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3296".to_string());

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let data_file = env::var("DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        let session_secret =
            env::var("SESSION_SECRET").unwrap_or_else(|_| DEV_SESSION_SECRET.to_string());

        let session_ttl_secs = env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|ttl| *ttl > 0)
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);

        Self {
            host,
            port,
            database_url,
            data_file,
            session_secret,
            session_ttl_secs,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_format() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: "8080".to_string(),
            database_url: None,
            data_file: PathBuf::from("events_data.json"),
            session_secret: "secret".to_string(),
            session_ttl_secs: 60,
        };

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
