use clap::Parser;
use dotenvy::dotenv;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
struct Cli {
    #[clap(long, env = "TASKMANAGER_PORT")]
    port: Option<u16>,

    #[clap(long, env = "TASKMANAGER_CONFIG_PATH")]
    config: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    #[serde(default = "default_port")]
    pub port: u16,
    pub database: DatabaseSettings,
    pub frontend: FrontendSettings,
    #[serde(default)]
    pub debug: bool,
}

fn default_port() -> u16 {
    5000
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FrontendSettings {
    /// Comma-separated list of origins allowed to call the API with
    /// credentials.
    pub origins: String,
    /// Directory holding the static single-page client.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_assets_dir() -> String {
    "api/static".to_string()
}

impl FrontendSettings {
    /// Splits `origins` into a normalized, deduplicated allow-list.
    pub fn origin_list(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for candidate in self.origins.split(',') {
            let normalized = candidate.trim().trim_end_matches('/');
            if normalized.is_empty() {
                continue;
            }
            if seen.insert(normalized.to_string()) {
                out.push(normalized.to_string());
            }
        }
        out
    }
}

impl Settings {
    #[allow(clippy::result_large_err)]
    pub fn new() -> Result<Self, figment::Error> {
        dotenv().ok();
        let cli = Cli::parse();

        let mut figment = Figment::from(Serialized::defaults(Settings::default_settings()));

        // 1. System Config
        figment = figment.merge(Toml::file("/etc/taskmanager/config.toml"));

        // 2. User Config
        if let Some(config_dir) = dirs::config_dir() {
            figment = figment.merge(Toml::file(config_dir.join("taskmanager/config.toml")));
        }

        // 3. Local Config
        figment = figment.merge(Toml::file("taskmanager.toml"));

        // 4. CLI Config File (Overrides previous files)
        if let Some(config_path) = &cli.config {
            figment = figment.merge(Toml::file(config_path));
        }

        // 5. Environment Variables
        // Prefixed with TASKMANAGER_ (e.g. TASKMANAGER_PORT=8080,
        // TASKMANAGER_FRONTEND__ORIGINS=https://tasks.example)
        figment = figment.merge(Env::prefixed("TASKMANAGER_").split("__"));

        // Support the conventional DATABASE_URL and PORT env vars
        figment = figment.merge(
            Env::raw()
                .only(&["DATABASE_URL"])
                .map(|_| "database.url".into()),
        );
        figment = figment.merge(Env::raw().only(&["PORT"]).map(|_| "port".into()));

        // 6. CLI Arguments (Overrides everything)
        if let Some(port) = cli.port {
            figment = figment.merge(("port", port));
        }

        figment.extract()
    }

    fn default_settings() -> Settings {
        Settings {
            port: 5000,
            debug: false,
            database: DatabaseSettings {
                url: "sqlite://taskmanager.db?mode=rwc".to_string(),
            },
            frontend: FrontendSettings {
                origins: "http://localhost:5173".to_string(),
                assets_dir: default_assets_dir(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use figment::{providers::Serialized, Figment};

    #[test]
    fn default_settings_extract() {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::default_settings()))
            .extract()
            .unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.database.url, "sqlite://taskmanager.db?mode=rwc");
        assert_eq!(settings.frontend.origins, "http://localhost:5173");
        assert_eq!(settings.frontend.assets_dir, "api/static");
        assert!(!settings.debug);
    }

    #[test]
    fn origin_list_normalizes_and_deduplicates() {
        let frontend = super::FrontendSettings {
            origins: " https://tasks.example/ , https://tasks.example , , http://localhost:5173 "
                .to_string(),
            assets_dir: super::default_assets_dir(),
        };
        assert_eq!(
            frontend.origin_list(),
            vec!["https://tasks.example", "http://localhost:5173"]
        );
    }

    #[test]
    fn toml_fragment_overrides_defaults() {
        use figment::providers::{Format, Toml};

        let settings: Settings = Figment::from(Serialized::defaults(Settings::default_settings()))
            .merge(Toml::string(
                r#"
                port = 8080
                debug = true

                [frontend]
                origins = "https://tasks.example,https://staging.tasks.example"
                "#,
            ))
            .extract()
            .unwrap();
        assert_eq!(settings.port, 8080);
        assert!(settings.debug);
        assert_eq!(
            settings.frontend.origins,
            "https://tasks.example,https://staging.tasks.example"
        );
        // untouched sections keep their defaults
        assert_eq!(settings.database.url, "sqlite://taskmanager.db?mode=rwc");
    }
}
