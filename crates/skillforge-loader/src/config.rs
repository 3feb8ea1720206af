use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[logging]
level = "info"  # trace, debug, info, warn, error

[catalog]
report = true  # print the definition catalog as JSON after registration
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub report: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Get the global config path: ~/.skillforge/skillforge.toml
    fn global_config_path() -> PathBuf {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".skillforge")
            .join("skillforge.toml")
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path();
        let config_dir = config_path.parent().unwrap();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            eprintln!("Created config directory: {}", config_dir.display());
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.skillforge/skillforge.toml (auto-created if missing)
    /// 2. Local override: ./skillforge.toml (workspace, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        // Ensure global config exists
        let global_config_path = Self::ensure_global_config()?;

        // Build config with layered sources (later sources override earlier ones)
        let mut config_builder = config::Config::builder()
            // Layer 1: Global config (required - we just created it if missing)
            .add_source(config::File::from(global_config_path))
            // Layer 2: Local workspace config (optional override)
            .add_source(config::File::with_name("skillforge").required(false))
            // Layer 3: Environment variables with SKILLFORGE__ prefix
            .add_source(config::Environment::with_prefix("SKILLFORGE").separator("__"));

        // Layer 4: Convenience env var override (highest priority)
        if let Ok(level) = env::var("SKILLFORGE_LOG") {
            config_builder = config_builder.set_override("logging__level", level)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }
}
