use std::error::Error;
use std::fmt;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "environment variable {key} is not set"),
        }
    }
}

impl Error for ConfigError {}

impl Config {
    /// Reads the config from the process environment. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let listen_addr =
            lookup("BOOK_STORE_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Config {
            database_url,
            listen_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn database_url_is_required() {
        let result = Config::from_lookup(lookup_in(HashMap::new()));

        assert_eq!(Err(ConfigError::Missing("DATABASE_URL")), result);
    }

    #[test]
    fn listen_addr_defaults_to_localhost() {
        let config = Config::from_lookup(lookup_in(HashMap::from([(
            "DATABASE_URL",
            "postgres://localhost/book_store",
        )])))
        .unwrap();

        assert_eq!("postgres://localhost/book_store", config.database_url);
        assert_eq!(DEFAULT_LISTEN_ADDR, config.listen_addr);
    }

    #[test]
    fn listen_addr_can_be_overridden() {
        let config = Config::from_lookup(lookup_in(HashMap::from([
            ("DATABASE_URL", "postgres://localhost/book_store"),
            ("BOOK_STORE_LISTEN_ADDR", "0.0.0.0:8080"),
        ])))
        .unwrap();

        assert_eq!("0.0.0.0:8080", config.listen_addr);
    }
}
