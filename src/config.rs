// src/config.rs
use std::env;
use std::fs;

use tracing::debug;

#[derive(Debug)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("BACKEND_PORT")
            .unwrap_or_else(|_| "3020".to_string())
            .parse()
            .expect("BACKEND_PORT must be a valid u16");
        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Two-step credential lookup: a secrets file named by OPENAI_API_KEY_FILE
/// first, then the OPENAI_API_KEY environment variable (.env honored).
/// Returns None when neither yields a non-empty key. The key itself is
/// never logged.
pub fn resolve_api_key() -> Option<String> {
    dotenvy::dotenv().ok();

    if let Ok(path) = env::var("OPENAI_API_KEY_FILE") {
        if let Ok(contents) = fs::read_to_string(&path) {
            let key = contents.trim();
            if !key.is_empty() {
                debug!(source = "secrets_file", "Resolved API key");
                return Some(key.to_string());
            }
        }
    }

    match env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {
            debug!(source = "env", "Resolved API key");
            Some(key.trim().to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bind_addr_format() {
        let config = ApiConfig {
            host: "0.0.0.0".into(),
            port: 8080,
        };
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_secrets_file_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.txt");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "  sk-from-file  ").unwrap();

        env::set_var("OPENAI_API_KEY_FILE", &path);
        env::set_var("OPENAI_API_KEY", "sk-from-env");
        assert_eq!(resolve_api_key().as_deref(), Some("sk-from-file"));

        env::remove_var("OPENAI_API_KEY_FILE");
        assert_eq!(resolve_api_key().as_deref(), Some("sk-from-env"));
        env::remove_var("OPENAI_API_KEY");
    }
}
