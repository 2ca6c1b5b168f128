use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Runtime settings read from the process environment (and `.env`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_max_size: u32,
    pub run_migrations: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default().try_parsing(true))
    }

    fn from_source(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("pool_max_size", 10)?
            .set_default("run_migrations", true)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default()
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn defaults_apply_when_only_the_database_is_set() {
        let settings =
            Settings::from_source(env_of(&[("DATABASE_URL", "postgres://localhost/holocron")]))
                .unwrap();

        assert_eq!(settings.database_url, "postgres://localhost/holocron");
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.pool_max_size, 10);
        assert!(settings.run_migrations);
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::from_source(env_of(&[
            ("DATABASE_URL", "postgres://db/holocron"),
            ("PORT", "8080"),
            ("POOL_MAX_SIZE", "2"),
            ("RUN_MIGRATIONS", "false"),
        ]))
        .unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.pool_max_size, 2);
        assert!(!settings.run_migrations);
    }

    #[test]
    fn database_url_is_required() {
        assert!(Settings::from_source(env_of(&[])).is_err());
    }
}
