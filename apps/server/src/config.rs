use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub watchlist_path: PathBuf,
    /// `None` disables the background refresh.
    pub refresh_interval: Option<Duration>,
    pub holdings_top_n: u32,
    pub request_timeout: Duration,
    pub cors_allow: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr = env_or("LF_LISTEN_ADDR", "0.0.0.0:8080")?;
        let watchlist_path = std::env::var("LF_WATCHLIST_PATH")
            .unwrap_or_else(|_| "./data/watchlist.json".into())
            .into();
        let refresh_secs: u64 = env_or("LF_REFRESH_INTERVAL_SECS", "10")?;
        let holdings_top_n = env_or("LF_HOLDINGS_TOP_N", "100")?;
        let timeout_ms: u64 = env_or("LF_REQUEST_TIMEOUT_MS", "30000")?;
        let cors_allow = std::env::var("LF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            watchlist_path,
            refresh_interval: (refresh_secs > 0).then(|| Duration::from_secs(refresh_secs)),
            holdings_top_n,
            request_timeout: Duration::from_millis(timeout_ms),
            cors_allow,
        })
    }

    /// Deadline for a whole API request.
    ///
    /// A fund detail makes two upstream calls in sequence, each bounded by
    /// `request_timeout`; the server deadline covers both so upstream
    /// timeouts surface as JSON errors.
    pub fn server_timeout(&self) -> Duration {
        self.request_timeout * 2
    }
}

fn env_or<T>(key: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid {}: {:?}", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_timeout_covers_two_upstream_calls() {
        let config = Config {
            listen_addr: "127.0.0.1:0".parse().unwrap(),
            watchlist_path: PathBuf::from("watchlist.json"),
            refresh_interval: None,
            holdings_top_n: 100,
            request_timeout: Duration::from_millis(30000),
            cors_allow: vec!["*".to_string()],
        };

        assert_eq!(config.server_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_env_or_uses_default() {
        let port: u16 = env_or("LF_TEST_UNSET_PORT", "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_env_or_rejects_garbage() {
        std::env::set_var("LF_TEST_BAD_NUMBER", "ten");
        let result: anyhow::Result<u64> = env_or("LF_TEST_BAD_NUMBER", "10");
        std::env::remove_var("LF_TEST_BAD_NUMBER");

        let message = result.unwrap_err().to_string();
        assert!(message.contains("LF_TEST_BAD_NUMBER"));
    }
}
