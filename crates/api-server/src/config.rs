use std::net::SocketAddr;

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `BIND_ADDR`, default `0.0.0.0:5000`
    pub bind_addr: SocketAddr,
    /// `CORS_ORIGINS`, comma separated. Empty allows any origin.
    pub cors_origins: Vec<String>,
    /// `ENABLE_HSTS`
    pub enable_hsts: bool,
    /// `RUST_LOG_FORMAT=json`
    pub json_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            cors_origins: Vec::new(),
            enable_hsts: false,
            json_logging: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("BIND_ADDR '{}' is not a socket address: {}", addr, e))?;
        }

        config.cors_origins = lookup("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        config.enable_hsts = lookup("ENABLE_HSTS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        config.json_logging = lookup("RUST_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(config)
    }
}
