use std::env;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub request_timeout_secs: u64,
    /// 路由前缀，为空时直接挂在根路径
    pub api_base_uri: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过任意键值来源构建配置，只有 DATABASE_URL 是必需的
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            database_url: lookup("DATABASE_URL").ok_or(env::VarError::NotPresent)?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: parse_or(&lookup, "SERVER_PORT", 3333),
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10),
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            api_base_uri: lookup("API_BASE_URI")
                .map(|uri| normalize_base_uri(&uri))
                .unwrap_or_default(),
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn server_addr(&self) -> SocketAddr {
        let ip = self.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(Ipv6Addr::UNSPECIFIED)
        });
        SocketAddr::new(ip, self.server_port)
    }
}

// 统一为 "/xxx" 形式，空值或 "/" 表示不加前缀
fn normalize_base_uri(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} 的值 {:?} 无效，使用默认值", key, raw);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(
            Config::from_lookup(lookup_from(&[])).unwrap_err(),
            env::VarError::NotPresent
        );
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db")])).unwrap();
        assert_eq!(config.server_port, 3333);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.api_base_uri, "");
        assert!(config.run_migrations);
        assert_eq!(config.server_addr(), "0.0.0.0:3333".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn overrides_and_invalid_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("SERVER_HOST", "not-an-ip"),
            ("SERVER_PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "lots"),
            ("API_BASE_URI", "/api/"),
            ("RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.api_base_uri, "/api");
        assert!(!config.run_migrations);
        assert_eq!(
            config.server_addr(),
            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 8080)
        );
    }

    #[test]
    fn base_uri_always_starts_with_slash() {
        for (raw, expected) in [
            ("api", "/api"),
            ("/api", "/api"),
            ("api/v1/", "/api/v1"),
            (" /api ", "/api"),
            ("/", ""),
            ("", ""),
        ] {
            let config = Config::from_lookup(lookup_from(&[
                ("DATABASE_URL", "postgres://db"),
                ("API_BASE_URI", raw),
            ]))
            .unwrap();
            assert_eq!(config.api_base_uri, expected, "API_BASE_URI={raw:?}");
        }
    }
}
